//! # Compliance Report & Response Documents
//!
//! [`ComplianceReport`] is the assembled outcome of one assessment:
//! identifiers and timestamp for audit, both times, the verdict, and the
//! full calculation trace. [`ComplianceResponse`] is the flat wire
//! document handed back to the collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use egress_engine::Method;

use crate::verdict::Verdict;

/// The assembled outcome of one compliance assessment.
///
/// Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceReport {
    /// Unique report identifier.
    pub report_id: Uuid,
    /// The calculation method that produced the total.
    pub method: Method,
    /// Computed total evacuation time, minutes.
    pub total_time: f64,
    /// Permissible evacuation time for the building category, minutes.
    pub permissible_time: f64,
    /// The compliance verdict.
    pub verdict: Verdict,
    /// Ordered human-readable calculation steps.
    pub trace: Vec<String>,
    /// When this report was generated.
    pub generated_at: DateTime<Utc>,
}

impl ComplianceReport {
    /// Project this report onto the collaborator wire document.
    pub fn to_response(&self) -> ComplianceResponse {
        ComplianceResponse {
            total_time: self.total_time,
            permissible_time: self.permissible_time,
            compliance: self.verdict,
            log: self.trace.clone(),
        }
    }
}

/// The calculation-response wire document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceResponse {
    /// Computed total evacuation time, minutes.
    pub total_time: f64,
    /// Permissible evacuation time, minutes.
    pub permissible_time: f64,
    /// `"PASS"` or `"FAIL"`.
    pub compliance: Verdict,
    /// The calculation trace, one line per step.
    pub log: Vec<String>,
}
