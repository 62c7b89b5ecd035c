#![deny(missing_docs)]

//! # egress-compliance — Compliance Evaluation Bridge
//!
//! Connects the regulation store (data) to the evacuation calculator
//! (engine) and produces the compliance verdict. This crate provides:
//!
//! - [`Verdict`]: the pass/fail comparison of computed total time
//!   against the permissible limit.
//! - [`EvacuationRequest`] / [`ComplianceResponse`]: the collaborator
//!   boundary documents.
//! - [`assess`]: the primary entry point — validate a request, run the
//!   calculation, resolve the permissible time, assemble the report.
//!
//! ## Architecture
//!
//! ```text
//! egress-reg (data)  -->  egress-compliance (bridge)  -->  egress-engine (calculation)
//!   RegulationStore        assess() / ComplianceReport      EvacuationCalculator
//! ```

pub mod report;
pub mod request;
pub mod verdict;

pub use report::{ComplianceReport, ComplianceResponse};
pub use request::{EvacuationRequest, SegmentSpec};
pub use verdict::Verdict;

use chrono::Utc;
use uuid::Uuid;

use egress_core::{BuildingCategory, SubCategory, ValidationError, DEFAULT_ROOM_AREA_M2};
use egress_engine::EvacuationCalculator;
use egress_reg::RegulationStore;

/// Assess one calculation request against the regulation.
///
/// Returns `Ok(None)` when the request's `run` gate is false — the
/// request is a no-op by contract. Otherwise validates the segments,
/// computes the total evacuation time, resolves the permissible time
/// for the request's building category, and assembles the report.
///
/// # Errors
///
/// Returns a [`ValidationError`] if any segment has an unknown path
/// type or a non-positive dimension, or if the category key is empty.
/// The whole assessment aborts — no partial report is produced.
pub fn assess(
    store: &RegulationStore,
    request: &EvacuationRequest,
) -> Result<Option<ComplianceReport>, ValidationError> {
    if !request.run {
        tracing::debug!("run gate not set; skipping assessment");
        return Ok(None);
    }

    let segments = request.validated_segments()?;
    let room_area = match request.room_area {
        Some(area) => area,
        None => {
            tracing::warn!(
                assumed = DEFAULT_ROOM_AREA_M2,
                "no room area supplied; assuming default"
            );
            DEFAULT_ROOM_AREA_M2
        }
    };

    let calculator = EvacuationCalculator::new(store);
    let result = calculator.calculate(&segments, request.occupant_count, room_area);

    let category = BuildingCategory::new(request.category.as_str())?;
    let sub_category = request
        .sub_category
        .as_deref()
        .map(SubCategory::new)
        .transpose()?;
    let permissible_time = store.permissible_time(&category, sub_category.as_ref());

    let verdict = Verdict::evaluate(result.total_time, permissible_time);
    tracing::info!(
        total_time = result.total_time,
        permissible_time,
        verdict = %verdict,
        category = %category,
        "assessment complete"
    );

    Ok(Some(ComplianceReport {
        report_id: Uuid::new_v4(),
        method: result.method,
        total_time: result.total_time,
        permissible_time,
        verdict,
        trace: result.trace,
        generated_at: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egress_engine::Method;

    fn store() -> RegulationStore {
        RegulationStore::load().unwrap()
    }

    fn request_json(json: &str) -> EvacuationRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn run_gate_false_is_noop() {
        let request = request_json(
            r#"{
                "segments": [{"length": 20.0, "type": "horizontal"}],
                "occupant_count": 30,
                "category": "buildings_under_25m"
            }"#,
        );
        assert!(assess(&store(), &request).unwrap().is_none());
    }

    #[test]
    fn small_load_assessment_passes() {
        // N=30, A=50 → D=0.6 → Method L, one 20 m horizontal segment at
        // v=80.14 → ≈0.25 min against a 6-minute limit.
        let request = request_json(
            r#"{
                "run": true,
                "segments": [{"length": 20.0, "type": "horizontal"}],
                "occupant_count": 30,
                "room_area": 50.0,
                "category": "buildings_under_25m",
                "sub_category": "fire_resistance_I_II"
            }"#,
        );
        let report = assess(&store(), &request).unwrap().unwrap();
        assert_eq!(report.method, Method::L);
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.permissible_time, 6.0);
        assert!((report.total_time - 20.0 / 80.14).abs() < 1e-9);
        assert!(report.trace[0].contains("Method L Selected"));
    }

    #[test]
    fn missing_room_area_defaults() {
        let request = request_json(
            r#"{
                "run": true,
                "segments": [{"length": 10.0, "type": "horizontal"}],
                "occupant_count": 10,
                "category": "industrial_category_C"
            }"#,
        );
        let report = assess(&store(), &request).unwrap().unwrap();
        // N=10 over the default 100 m² → D=0.1 → v=100 → 0.1 min.
        assert!((report.total_time - 0.1).abs() < 1e-9);
    }

    #[test]
    fn unknown_category_gets_sentinel_and_passes() {
        let request = request_json(
            r#"{
                "run": true,
                "segments": [{"length": 10.0, "type": "horizontal"}],
                "occupant_count": 10,
                "category": "offshore_rigs"
            }"#,
        );
        let report = assess(&store(), &request).unwrap().unwrap();
        assert_eq!(report.permissible_time, 999.0);
        assert_eq!(report.verdict, Verdict::Pass);
    }

    #[test]
    fn unknown_path_type_aborts_assessment() {
        let request = request_json(
            r#"{
                "run": true,
                "segments": [{"length": 10.0, "type": "ramp"}],
                "occupant_count": 10,
                "category": "industrial_category_C"
            }"#,
        );
        let err = assess(&store(), &request).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownPathType(_)));
    }

    #[test]
    fn empty_category_is_validation_error() {
        let request = request_json(
            r#"{
                "run": true,
                "segments": [{"length": 10.0, "type": "horizontal"}],
                "occupant_count": 10,
                "category": ""
            }"#,
        );
        assert!(matches!(
            assess(&store(), &request),
            Err(ValidationError::EmptyCategory)
        ));
    }

    #[test]
    fn failing_assessment_reports_fail() {
        // Industrial category A/B allows 1.0 minute; a long stair path
        // with many occupants cannot clear in time.
        let request = request_json(
            r#"{
                "run": true,
                "segments": [{"length": 60.0, "type": "stair_up", "width": 0.8}],
                "occupant_count": 300,
                "room_area": 40.0,
                "category": "industrial_category_A_B"
            }"#,
        );
        let report = assess(&store(), &request).unwrap().unwrap();
        assert_eq!(report.method, Method::Q);
        assert_eq!(report.verdict, Verdict::Fail);
        assert!(report.total_time > report.permissible_time);
    }
}
