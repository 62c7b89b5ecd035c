#![deny(missing_docs)]

//! # egress-cli — Command-Line Interface
//!
//! Subcommand handlers for the `egress` binary. Each handler takes its
//! clap `Args` struct and returns an exit code; the binary's `main`
//! maps errors to the operational-failure code.
//!
//! Exit code convention: 0 = compliant / success, 1 = non-compliant,
//! 2 = operational error (bad file, malformed request, bad dataset).

use std::path::Path;

use anyhow::{Context, Result};

use egress_reg::RegulationStore;

pub mod check;
pub mod tables;

/// Load the regulation store, from an override file when supplied,
/// otherwise from the embedded dataset.
///
/// # Errors
///
/// Fails when the override file cannot be read or either dataset fails
/// validation.
pub fn load_store(regulations: Option<&Path>) -> Result<RegulationStore> {
    match regulations {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read regulations file {}", path.display()))?;
            let store = RegulationStore::from_json(&json)
                .with_context(|| format!("invalid regulations file {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded regulation dataset override");
            Ok(store)
        }
        None => RegulationStore::load().context("embedded regulation dataset failed to load"),
    }
}
