//! # Error Hierarchy
//!
//! Structured error types for input validation, built with `thiserror`.
//!
//! Validation errors are per-call and propagated: a request that fails
//! validation aborts the whole calculation before any arithmetic runs, so
//! no partial result can be observed. Degenerate numeric inputs that the
//! regulation handles with explicit substitutions (non-positive room area,
//! non-positive table speed) are *not* errors — see the engine and store
//! documentation for those policies.

use thiserror::Error;

/// Validation errors for domain values.
///
/// Each domain type enforces its invariants at construction time. These
/// errors carry the offending input so operators can diagnose a malformed
/// request without guesswork.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Path type outside the supported enumeration.
    #[error("unknown path type: {0:?} (expected horizontal, stair_down, stair_up, or door)")]
    UnknownPathType(String),

    /// Segment or curve length must be positive.
    #[error("path length must be positive, got {0}")]
    NonPositiveLength(f64),

    /// Segment clear width must be positive.
    #[error("segment width must be positive, got {0}")]
    NonPositiveWidth(f64),

    /// Building category key is empty.
    #[error("building category must be non-empty")]
    EmptyCategory,
}
