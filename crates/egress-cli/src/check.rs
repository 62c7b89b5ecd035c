//! # Check Subcommand
//!
//! Runs one calculation request against the regulation tables and
//! reports the compliance outcome. The request document is the
//! collaborator-boundary JSON contract; `--json` emits the matching
//! response document instead of the text report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use egress_compliance::{assess, EvacuationRequest};

/// Arguments for the `egress check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the calculation request JSON document.
    #[arg(value_name = "REQUEST")]
    pub request: PathBuf,

    /// Load the regulation dataset from a file instead of the embedded copy.
    #[arg(long, value_name = "FILE")]
    pub regulations: Option<PathBuf>,

    /// Emit the machine-readable response document instead of the text report.
    #[arg(long)]
    pub json: bool,
}

/// Execute the check subcommand.
///
/// Returns exit code 0 for a PASS verdict (or a gated-off request),
/// 1 for FAIL.
///
/// # Errors
///
/// Fails on unreadable or malformed request/regulation files and on
/// request validation errors (unknown path type, bad dimensions).
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let store = crate::load_store(args.regulations.as_deref())?;

    let text = std::fs::read_to_string(&args.request)
        .with_context(|| format!("failed to read request file {}", args.request.display()))?;
    let request: EvacuationRequest = serde_json::from_str(&text)
        .with_context(|| format!("malformed request document {}", args.request.display()))?;

    let Some(report) = assess(&store, &request)? else {
        println!("run gate not set; nothing to calculate");
        return Ok(0);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.to_response())?);
    } else {
        println!("Verdict:          {}", report.verdict);
        println!("Total time:       {:.2} min", report.total_time);
        println!("Permissible time: {:.2} min", report.permissible_time);
        println!("Report:           {}", report.report_id);
        println!();
        for line in &report.trace {
            println!("  {line}");
        }
    }

    Ok(if report.verdict.is_pass() { 0 } else { 1 })
}
