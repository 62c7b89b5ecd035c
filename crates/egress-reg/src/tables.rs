//! # Regulation Table Data Model
//!
//! Typed serde structures for the regulation dataset: Table 11 (flow
//! parameters by occupant density and path type), Table 12 (narrow-door
//! parameters at boundary density, reserved), the per-path-type flow
//! limits (reserved), and the permissible-time map.
//!
//! The structures mirror the dataset's JSON shape directly; all semantic
//! validation (ordering, non-emptiness) happens once in the store's load
//! step, so lookups over loaded tables are total.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use egress_core::PathType;

/// Flow parameters for one path type at one density row.
///
/// `v` is the flow speed in m/min, `q` the specific throughput in
/// persons per metre of clear width per minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowParams {
    /// Flow speed, m/min.
    pub v: f64,
    /// Specific throughput, persons/(m·min).
    pub q: f64,
}

/// One density row of Table 11.
///
/// Carries the flow parameters for every supported path type at a single
/// density threshold. The thresholds ascend strictly across the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowRow {
    /// Occupant density threshold, persons/m².
    #[serde(rename = "D")]
    pub density: f64,
    /// Parameters for level travel.
    pub horiz: FlowParams,
    /// Parameters for descending stair travel.
    pub stair_down: FlowParams,
    /// Parameters for ascending stair travel.
    pub stair_up: FlowParams,
    /// Parameters for wide door crossings.
    pub door_wide: FlowParams,
}

impl FlowRow {
    /// The flow parameters this row carries for a path type.
    ///
    /// `PathType::Door` maps to the `door_wide` column; the narrow-door
    /// table is a separate, reserved dataset.
    pub fn params_for(&self, path_type: PathType) -> FlowParams {
        match path_type {
            PathType::Horizontal => self.horiz,
            PathType::StairDown => self.stair_down,
            PathType::StairUp => self.stair_up,
            PathType::Door => self.door_wide,
        }
    }
}

/// Table 11 as it appears in the dataset: a `data` array of rows.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowTable {
    /// The density rows, ascending by threshold.
    pub data: Vec<FlowRow>,
}

/// One width row of Table 12 (narrow doors at boundary density).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NarrowDoorRow {
    /// Door clear width, metres.
    pub width: f64,
    /// Flow speed, m/min.
    pub v: f64,
    /// Specific throughput, persons/(m·min).
    pub q: f64,
}

/// Table 12 as it appears in the dataset: a `data` array of rows.
#[derive(Debug, Clone, Deserialize)]
pub struct NarrowDoorTable {
    /// The width rows, ascending by width.
    pub data: Vec<NarrowDoorRow>,
}

/// Reserved per-path-type limit constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitParams {
    /// Maximum specific throughput, persons/(m·min).
    pub q_max: f64,
    /// Throughput at boundary density.
    pub q_gran: f64,
    /// Speed at boundary density, m/min.
    pub v_gran: f64,
}

/// One entry of the permissible-time map: either a single limit in
/// minutes, or a nested sub-category → limit map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PermissibleEntry {
    /// A single permissible time for the whole category.
    Single(f64),
    /// Permissible times keyed by sub-category.
    BySubCategory(BTreeMap<String, f64>),
}

/// The regulation dataset's top-level shape.
///
/// Unknown top-level keys (source attribution, unit notes) are ignored;
/// the four listed keys are required and their absence is a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDataset {
    /// Table 11: flow parameters by density and path type.
    pub table_11_flow_params: FlowTable,
    /// Table 12: narrow-door parameters (reserved).
    pub table_12_narrow_doors: NarrowDoorTable,
    /// Reserved flow-limit constants keyed by path type string.
    #[serde(default)]
    pub limits: BTreeMap<String, LimitParams>,
    /// Permissible evacuation times keyed by building category.
    pub permissible_time_limits: BTreeMap<String, PermissibleEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_row_params_for_covers_all_path_types() {
        let row = FlowRow {
            density: 1.0,
            horiz: FlowParams { v: 80.0, q: 80.0 },
            stair_down: FlowParams { v: 50.0, q: 50.0 },
            stair_up: FlowParams { v: 33.0, q: 33.0 },
            door_wide: FlowParams { v: 75.0, q: 75.0 },
        };
        assert_eq!(row.params_for(PathType::Horizontal).v, 80.0);
        assert_eq!(row.params_for(PathType::StairDown).v, 50.0);
        assert_eq!(row.params_for(PathType::StairUp).v, 33.0);
        assert_eq!(row.params_for(PathType::Door).v, 75.0);
    }

    #[test]
    fn flow_row_deserializes_capital_d_key() {
        let row: FlowRow = serde_json::from_str(
            r#"{
                "D": 0.5,
                "horiz": {"v": 90.0, "q": 45.0},
                "stair_down": {"v": 55.0, "q": 27.5},
                "stair_up": {"v": 37.0, "q": 18.5},
                "door_wide": {"v": 85.0, "q": 42.5}
            }"#,
        )
        .unwrap();
        assert_eq!(row.density, 0.5);
        assert_eq!(row.horiz.q, 45.0);
    }

    #[test]
    fn permissible_entry_deserializes_single_number() {
        let entry: PermissibleEntry = serde_json::from_str("1.5").unwrap();
        assert_eq!(entry, PermissibleEntry::Single(1.5));
    }

    #[test]
    fn permissible_entry_deserializes_nested_map() {
        let entry: PermissibleEntry =
            serde_json::from_str(r#"{"fire_resistance_I_II": 6.0}"#).unwrap();
        match entry {
            PermissibleEntry::BySubCategory(map) => {
                assert_eq!(map.get("fire_resistance_I_II"), Some(&6.0));
            }
            PermissibleEntry::Single(_) => panic!("expected nested map"),
        }
    }

    #[test]
    fn raw_dataset_requires_table_11() {
        let err = serde_json::from_str::<RawDataset>(
            r#"{"table_12_narrow_doors": {"data": []}, "permissible_time_limits": {}}"#,
        )
        .unwrap_err();
        assert!(format!("{err}").contains("table_11_flow_params"));
    }
}
