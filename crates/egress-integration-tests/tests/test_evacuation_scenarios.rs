//! End-to-end evacuation scenarios across the store, engine, and
//! compliance crates, using the embedded regulation dataset.

use egress_compliance::{assess, EvacuationRequest, Verdict};
use egress_core::{PathType, Segment};
use egress_engine::{EvacuationCalculator, Method};
use egress_reg::RegulationStore;

fn store() -> RegulationStore {
    RegulationStore::load().expect("embedded dataset loads")
}

fn request(json: &str) -> EvacuationRequest {
    serde_json::from_str(json).expect("request parses")
}

/// Thirty occupants leaving a 50 m² room through one 20 m corridor:
/// D = 0.6, Method L, total = 20 / v(D=0.6, horizontal).
#[test]
fn small_office_single_corridor() {
    let store = store();
    let calc = EvacuationCalculator::new(&store);
    let segments = [Segment::new(20.0, PathType::Horizontal).unwrap()];

    let result = calc.calculate(&segments, 30, 50.0);

    assert_eq!(result.method, Method::L);
    let expected_v = store.flow_params(0.6, PathType::Horizontal).v;
    assert!((result.total_time - 20.0 / expected_v).abs() < 1e-9);
    assert!(result.trace.iter().any(|l| l.contains("Method L Selected")));
}

/// Two hundred occupants down a 15 m stair of 1.2 m clear width from a
/// 40 m² hall: D = 5.0, Method Q, total = max(200/(1.2·q), 15/v).
#[test]
fn crowded_hall_stair_descent() {
    let store = store();
    let calc = EvacuationCalculator::new(&store);
    let segments = [Segment::with_width(15.0, PathType::StairDown, 1.2).unwrap()];

    let result = calc.calculate(&segments, 200, 40.0);

    assert_eq!(result.method, Method::Q);
    let params = store.flow_params(5.0, PathType::StairDown);
    let expected = (200.0 / (1.2 * params.q)).max(15.0 / params.v);
    assert!((result.total_time - expected).abs() < 1e-9);
}

/// The method boundary is exact: 50 occupants use Method L, 51 use
/// Method Q, over the same geometry.
#[test]
fn method_boundary_is_exact_at_fifty() {
    let store = store();
    let calc = EvacuationCalculator::new(&store);
    let segments = [Segment::new(20.0, PathType::Horizontal).unwrap()];

    assert_eq!(calc.calculate(&segments, 50, 100.0).method, Method::L);
    assert_eq!(calc.calculate(&segments, 51, 100.0).method, Method::Q);
}

/// A multi-leg path: corridor, stair down, corridor to the exit.
/// Method L sums the per-segment travel times at the initial density.
#[test]
fn multi_leg_path_sums_in_travel_order() {
    let store = store();
    let calc = EvacuationCalculator::new(&store);
    let segments = [
        Segment::new(12.0, PathType::Horizontal).unwrap(),
        Segment::new(6.0, PathType::StairDown).unwrap(),
        Segment::new(8.0, PathType::Horizontal).unwrap(),
    ];

    let result = calc.calculate(&segments, 40, 80.0);

    // D = 0.5 exactly; read the same rows the engine reads.
    let horiz = store.flow_params(0.5, PathType::Horizontal);
    let stair = store.flow_params(0.5, PathType::StairDown);
    let expected = 12.0 / horiz.v + 6.0 / stair.v + 8.0 / horiz.v;
    assert!((result.total_time - expected).abs() < 1e-9);
    // One line per segment plus the method and density headers.
    assert_eq!(result.trace.len(), 5);
}

/// Full request-to-report flow over the compliance bridge, including
/// the permissible-time lookup and verdict.
#[test]
fn request_to_report_pass() {
    let report = assess(
        &store(),
        &request(
            r#"{
                "run": true,
                "segments": [
                    {"length": 20.0, "type": "horizontal"},
                    {"length": 8.0, "type": "stair_down", "width": 1.2}
                ],
                "occupant_count": 45,
                "room_area": 90.0,
                "category": "buildings_under_25m",
                "sub_category": "fire_resistance_I_II"
            }"#,
        ),
    )
    .expect("assessment runs")
    .expect("run gate set");

    assert_eq!(report.method, Method::L);
    assert_eq!(report.permissible_time, 6.0);
    assert_eq!(report.verdict, Verdict::Pass);
    assert!(report.total_time > 0.0);
}

/// The verdict boundary: a dataset tuned so the computed total equals
/// the permissible limit exactly still passes; one unit over fails.
#[test]
fn verdict_boundary_at_equality() {
    // v=10 everywhere: a 20 m corridor takes exactly 2.0 minutes.
    let dataset = r#"{
        "table_11_flow_params": { "data": [
            {"D": 9.2,
             "horiz": {"v": 10.0, "q": 10.0},
             "stair_down": {"v": 10.0, "q": 10.0},
             "stair_up": {"v": 10.0, "q": 10.0},
             "door_wide": {"v": 10.0, "q": 10.0}}
        ]},
        "table_12_narrow_doors": { "data": [
            {"width": 0.6, "v": 13.0, "q": 65.0}
        ]},
        "permissible_time_limits": {
            "exactly_two": 2.0,
            "just_under": 1.9
        }
    }"#;
    let store = RegulationStore::from_json(dataset).expect("dataset loads");

    let at_limit = assess(
        &store,
        &request(
            r#"{
                "run": true,
                "segments": [{"length": 20.0, "type": "horizontal"}],
                "occupant_count": 10,
                "room_area": 100.0,
                "category": "exactly_two"
            }"#,
        ),
    )
    .expect("assessment runs")
    .expect("run gate set");
    assert_eq!(at_limit.total_time, 2.0);
    assert_eq!(at_limit.verdict, Verdict::Pass);

    let over_limit = assess(
        &store,
        &request(
            r#"{
                "run": true,
                "segments": [{"length": 20.0, "type": "horizontal"}],
                "occupant_count": 10,
                "room_area": 100.0,
                "category": "just_under"
            }"#,
        ),
    )
    .expect("assessment runs")
    .expect("run gate set");
    assert_eq!(over_limit.verdict, Verdict::Fail);
}

/// Degenerate origin geometry: a zero-area room prices the whole path
/// at saturation density.
#[test]
fn zero_area_room_uses_saturation_density() {
    let store = store();
    let calc = EvacuationCalculator::new(&store);
    let segments = [Segment::new(10.0, PathType::Horizontal).unwrap()];

    let result = calc.calculate(&segments, 30, 0.0);

    let saturated = store.flow_params(9.2, PathType::Horizontal);
    assert!((result.total_time - 10.0 / saturated.v).abs() < 1e-9);
}
