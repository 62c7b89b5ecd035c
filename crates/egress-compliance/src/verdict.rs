//! The compliance verdict.

use serde::{Deserialize, Serialize};

/// Pass/fail outcome of comparing computed evacuation time to the
/// permissible limit.
///
/// Equality passes: a building that evacuates in exactly the permissible
/// time is compliant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Total time within the permissible limit.
    Pass,
    /// Total time exceeds the permissible limit.
    Fail,
}

impl Verdict {
    /// Evaluate a verdict. Pure and total: `Pass` iff
    /// `total_time <= permissible_time`.
    pub fn evaluate(total_time: f64, permissible_time: f64) -> Self {
        if total_time <= permissible_time {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// Whether this verdict is a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Return the wire representation, `"PASS"` or `"FAIL"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
