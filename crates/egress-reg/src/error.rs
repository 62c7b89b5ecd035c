//! Regulation-dataset error types.
//!
//! Structured errors for loading and validating the packaged regulation
//! data. Every variant is a fatal, startup-time condition: a store that
//! fails to load cannot serve any calculation, and the failure is
//! reported to the caller rather than retried.

use thiserror::Error;

/// Errors that can occur while loading the regulation dataset.
#[derive(Debug, Error)]
pub enum RegError {
    /// The dataset is not valid JSON or is missing required keys.
    #[error("failed to parse regulation dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Table 11 (flow parameters) has no rows.
    #[error("table 11 (flow parameters) has no rows")]
    EmptyFlowTable,

    /// Table 11 density thresholds are not strictly ascending.
    #[error(
        "table 11 density thresholds must be strictly ascending: \
         row {index} has D={density} after D={previous}"
    )]
    UnsortedFlowTable {
        /// Zero-based index of the offending row.
        index: usize,
        /// The density threshold of the offending row.
        density: f64,
        /// The density threshold of the preceding row.
        previous: f64,
    },

    /// Table 12 (narrow doors) has no rows.
    #[error("table 12 (narrow doors) has no rows")]
    EmptyNarrowDoorTable,

    /// Table 12 widths are not strictly ascending.
    #[error(
        "table 12 widths must be strictly ascending: \
         row {index} has width={width} after width={previous}"
    )]
    UnsortedNarrowDoorTable {
        /// Zero-based index of the offending row.
        index: usize,
        /// The width of the offending row.
        width: f64,
        /// The width of the preceding row.
        previous: f64,
    },
}

/// Result type alias for regulation-store operations.
pub type RegResult<T> = Result<T, RegError>;
