//! # Tables Subcommand
//!
//! Prints the loaded regulation dataset for operator inspection:
//! Table 11 flow parameters by density row, and the permissible-time
//! categories with their limits.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use egress_reg::PermissibleEntry;

/// Arguments for the `egress tables` subcommand.
#[derive(Args, Debug)]
pub struct TablesArgs {
    /// Load the regulation dataset from a file instead of the embedded copy.
    #[arg(long, value_name = "FILE")]
    pub regulations: Option<PathBuf>,
}

/// Execute the tables subcommand. Always returns exit code 0 on a
/// loadable dataset.
///
/// # Errors
///
/// Fails when the dataset cannot be loaded.
pub fn run_tables(args: &TablesArgs) -> Result<u8> {
    let store = crate::load_store(args.regulations.as_deref())?;

    println!("Table 11 — flow parameters (v m/min, q persons/(m*min))");
    println!(
        "{:>6}  {:>14}  {:>14}  {:>14}  {:>14}",
        "D", "horizontal", "stair_down", "stair_up", "door_wide"
    );
    for row in store.flow_rows() {
        println!(
            "{:>6.1}  {:>6.1} /{:>6.1}  {:>6.1} /{:>6.1}  {:>6.1} /{:>6.1}  {:>6.1} /{:>6.1}",
            row.density,
            row.horiz.v,
            row.horiz.q,
            row.stair_down.v,
            row.stair_down.q,
            row.stair_up.v,
            row.stair_up.q,
            row.door_wide.v,
            row.door_wide.q,
        );
    }

    println!();
    println!("Table 12 — narrow doors (reserved)");
    for row in store.narrow_door_rows() {
        println!(
            "  width {:>4.1} m: v={:>5.1} q={:>6.1}",
            row.width, row.v, row.q
        );
    }

    println!();
    println!("Permissible evacuation times (min)");
    for (category, entry) in store.permissible_time_limits() {
        match entry {
            PermissibleEntry::Single(minutes) => {
                println!("  {category}: {minutes}");
            }
            PermissibleEntry::BySubCategory(by_sub) => {
                println!("  {category}:");
                for (sub, minutes) in by_sub {
                    println!("    {sub}: {minutes}");
                }
            }
        }
    }

    Ok(0)
}
