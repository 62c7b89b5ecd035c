//! # Regulation Store — Load-Then-Freeze Data Handle
//!
//! [`RegulationStore`] parses the regulation dataset once, validates the
//! table invariants, and exposes read-only lookups. The loaded store is
//! immutable and `Send + Sync`: it can be shared by reference across any
//! number of concurrent calculations without locking.
//!
//! ## Lookup Semantics
//!
//! - [`flow_params`](RegulationStore::flow_params) performs the
//!   regulation's **next-higher-value** row selection: the first row
//!   whose density threshold is ≥ the (clamped) query density. This is a
//!   deliberate discretization, not interpolation — the table is read
//!   the way an engineer reads the printed ordinance.
//! - [`permissible_time`](RegulationStore::permissible_time) resolves a
//!   category (and optional sub-category) to a limit in minutes, falling
//!   back to the `999.0` "effectively unlimited" sentinel for unknown
//!   keys.
//! - [`narrow_door_params`](RegulationStore::narrow_door_params)
//!   interpolates Table 12 linearly by width. Reserved: the current
//!   calculation methods do not consume it.

use std::collections::BTreeMap;

use egress_core::{BuildingCategory, PathType, SubCategory, MAX_DENSITY, UNLIMITED_TIME_MIN};

use crate::error::{RegError, RegResult};
use crate::tables::{
    FlowParams, FlowRow, LimitParams, NarrowDoorRow, PermissibleEntry, RawDataset,
};

/// The regulation dataset packaged with this crate.
const EMBEDDED_REGULATIONS: &str = include_str!("../data/regulations.json");

/// Immutable handle over the loaded regulation dataset.
#[derive(Debug, Clone)]
pub struct RegulationStore {
    flow_table: Vec<FlowRow>,
    narrow_doors: Vec<NarrowDoorRow>,
    limits: BTreeMap<String, LimitParams>,
    permissible: BTreeMap<String, PermissibleEntry>,
}

impl RegulationStore {
    /// Load the embedded regulation dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`RegError`] if the packaged dataset is malformed. This
    /// is a fatal startup condition: no calculation can proceed without
    /// a loaded store, and the load is never retried.
    pub fn load() -> RegResult<Self> {
        Self::from_json(EMBEDDED_REGULATIONS)
    }

    /// Load a regulation dataset from a JSON document.
    ///
    /// Used by tests and by deployments that override the packaged
    /// tables with a locally maintained dataset.
    ///
    /// # Errors
    ///
    /// Returns [`RegError::Parse`] for malformed JSON or missing keys,
    /// and the table-invariant variants for an empty or unsorted table.
    pub fn from_json(json: &str) -> RegResult<Self> {
        let dataset: RawDataset = serde_json::from_str(json)?;
        validate_dataset(&dataset)?;

        tracing::debug!(
            flow_rows = dataset.table_11_flow_params.data.len(),
            narrow_door_rows = dataset.table_12_narrow_doors.data.len(),
            categories = dataset.permissible_time_limits.len(),
            "loaded regulation dataset"
        );

        Ok(Self {
            flow_table: dataset.table_11_flow_params.data,
            narrow_doors: dataset.table_12_narrow_doors.data,
            limits: dataset.limits,
            permissible: dataset.permissible_time_limits,
        })
    }

    /// Look up flow parameters for a path type at an occupant density.
    ///
    /// The density is clamped to [`MAX_DENSITY`] and the table is read
    /// with next-higher-value selection: the first row whose threshold
    /// is ≥ the clamped density. A density above every threshold selects
    /// the last row — a degenerate fallback, not extrapolation.
    pub fn flow_params(&self, density: f64, path_type: PathType) -> FlowParams {
        let clamped = density.min(MAX_DENSITY);

        let mut selected: Option<&FlowRow> = None;
        for row in &self.flow_table {
            selected = Some(row);
            if row.density >= clamped {
                break;
            }
        }

        match selected {
            Some(row) => {
                if row.density < clamped {
                    tracing::debug!(
                        density = clamped,
                        last_threshold = row.density,
                        "density exceeds every table 11 threshold; using last row"
                    );
                }
                row.params_for(path_type)
            }
            // Table emptiness is rejected at load; this arm cannot be
            // reached on a loaded store.
            None => FlowParams { v: 0.0, q: 0.0 },
        }
    }

    /// Resolve the permissible evacuation time for a building category.
    ///
    /// A category mapped to a single number returns it directly. A
    /// category mapped to sub-categories returns the matching
    /// sub-category value. Anything else — unknown category, missing or
    /// unmatched sub-category — returns the [`UNLIMITED_TIME_MIN`]
    /// sentinel rather than an error.
    pub fn permissible_time(
        &self,
        category: &BuildingCategory,
        sub_category: Option<&SubCategory>,
    ) -> f64 {
        match self.permissible.get(category.as_str()) {
            Some(PermissibleEntry::Single(minutes)) => *minutes,
            Some(PermissibleEntry::BySubCategory(by_sub)) => {
                match sub_category.and_then(|sub| by_sub.get(sub.as_str())) {
                    Some(minutes) => *minutes,
                    None => {
                        tracing::warn!(
                            category = %category,
                            "no sub-category match; treating permissible time as unlimited"
                        );
                        UNLIMITED_TIME_MIN
                    }
                }
            }
            None => {
                tracing::warn!(
                    category = %category,
                    "unknown building category; treating permissible time as unlimited"
                );
                UNLIMITED_TIME_MIN
            }
        }
    }

    /// Look up narrow-door flow parameters by clear width.
    ///
    /// Widths are clamped to the table's range and interpolated linearly
    /// between bracketing rows; an exact-width row is returned verbatim.
    /// Reserved: the current calculation methods never call this.
    pub fn narrow_door_params(&self, width: f64) -> FlowParams {
        let (Some(first), Some(last)) = (self.narrow_doors.first(), self.narrow_doors.last())
        else {
            // Table emptiness is rejected at load.
            return FlowParams { v: 0.0, q: 0.0 };
        };

        let w = width.clamp(first.width, last.width);

        let mut lower = *first;
        for row in &self.narrow_doors {
            if row.width == w {
                return FlowParams { v: row.v, q: row.q };
            }
            if row.width < w {
                lower = *row;
            } else {
                let ratio = (w - lower.width) / (row.width - lower.width);
                return FlowParams {
                    v: lower.v + (row.v - lower.v) * ratio,
                    q: lower.q + (row.q - lower.q) * ratio,
                };
            }
        }

        FlowParams {
            v: lower.v,
            q: lower.q,
        }
    }

    /// Reserved flow-limit constants for a path type, if the dataset
    /// carries them.
    pub fn limit(&self, path_type: PathType) -> Option<LimitParams> {
        self.limits.get(path_type.as_str()).copied()
    }

    /// The loaded Table 11 rows, ascending by density threshold.
    pub fn flow_rows(&self) -> &[FlowRow] {
        &self.flow_table
    }

    /// The loaded Table 12 rows, ascending by width.
    pub fn narrow_door_rows(&self) -> &[NarrowDoorRow] {
        &self.narrow_doors
    }

    /// The loaded permissible-time map, keyed by building category.
    pub fn permissible_time_limits(&self) -> &BTreeMap<String, PermissibleEntry> {
        &self.permissible
    }
}

/// Check the table invariants the lookups rely on.
fn validate_dataset(dataset: &RawDataset) -> RegResult<()> {
    let flow_rows = &dataset.table_11_flow_params.data;
    if flow_rows.is_empty() {
        return Err(RegError::EmptyFlowTable);
    }
    for (index, pair) in flow_rows.windows(2).enumerate() {
        if pair[1].density <= pair[0].density {
            return Err(RegError::UnsortedFlowTable {
                index: index + 1,
                density: pair[1].density,
                previous: pair[0].density,
            });
        }
    }

    let door_rows = &dataset.table_12_narrow_doors.data;
    if door_rows.is_empty() {
        return Err(RegError::EmptyNarrowDoorTable);
    }
    for (index, pair) in door_rows.windows(2).enumerate() {
        if pair[1].width <= pair[0].width {
            return Err(RegError::UnsortedNarrowDoorTable {
                index: index + 1,
                width: pair[1].width,
                previous: pair[0].width,
            });
        }
    }

    Ok(())
}
