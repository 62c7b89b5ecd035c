//! # Evacuation Time Calculation
//!
//! [`EvacuationCalculator`] walks an egress path segment by segment and
//! accumulates the total evacuation time, producing a fresh
//! [`CalculationResult`] per invocation. The engine is stateless beyond
//! its reference to the shared, read-only
//! [`RegulationStore`](egress_reg::RegulationStore) — all per-invocation
//! state (density, running total, trace) is local, so any number of
//! calculations may run concurrently against one store.
//!
//! ## Method Selection
//!
//! `N <= 50` selects Method L, `N > 50` Method Q. A hard regulatory
//! boundary: there is no blending between the methods.
//!
//! ## Determinism
//!
//! Given identical segments, occupant count, room area, and regulation
//! dataset, the computed total and trace are always identical.

use serde::{Deserialize, Serialize};

use egress_core::{Segment, MAX_DENSITY, OCCUPANT_METHOD_THRESHOLD, SPEED_FLOOR};
use egress_reg::RegulationStore;

/// Derive the occupant density `D = N / A`, persons/m².
///
/// Clamped to [`MAX_DENSITY`]. A non-positive area is treated as maximum
/// crowding rather than a division error — an explicit degenerate-input
/// policy, not a fault.
pub fn density(occupants: u32, area: f64) -> f64 {
    if area <= 0.0 {
        return MAX_DENSITY;
    }
    (f64::from(occupants) / area).min(MAX_DENSITY)
}

/// The regulation-defined calculation procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Simple travel-time method for small occupant loads (`N <= 50`).
    L,
    /// Density/throughput method for larger loads (`N > 50`).
    Q,
}

impl Method {
    /// Select the method for an occupant count.
    pub fn select(occupants: u32) -> Self {
        if occupants <= OCCUPANT_METHOD_THRESHOLD {
            Self::L
        } else {
            Self::Q
        }
    }

    /// Return the method letter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L => "L",
            Self::Q => "Q",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Method {}", self.as_str())
    }
}

/// The outcome of one evacuation-time calculation.
///
/// Immutable once returned; the trace is the human-readable record of
/// every step, suitable for inclusion in a compliance report.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    /// The method that produced the total.
    pub method: Method,
    /// Total evacuation time, minutes.
    pub total_time: f64,
    /// Ordered human-readable calculation steps.
    pub trace: Vec<String>,
}

/// Segment-walking evacuation calculator over a shared regulation store.
#[derive(Debug, Clone, Copy)]
pub struct EvacuationCalculator<'a> {
    store: &'a RegulationStore,
}

impl<'a> EvacuationCalculator<'a> {
    /// Create a calculator over a loaded regulation store.
    pub fn new(store: &'a RegulationStore) -> Self {
        Self { store }
    }

    /// Compute the total evacuation time for an egress path.
    ///
    /// `room_area` is the area of the origin room, used for the initial
    /// density. Method selection is by occupant count; see [`Method`].
    pub fn calculate(
        &self,
        segments: &[Segment],
        occupants: u32,
        room_area: f64,
    ) -> CalculationResult {
        let method = Method::select(occupants);
        tracing::debug!(
            occupants,
            room_area,
            segments = segments.len(),
            method = %method,
            "starting evacuation calculation"
        );
        match method {
            Method::L => self.method_l(segments, occupants, room_area),
            Method::Q => self.method_q(segments, occupants, room_area),
        }
    }

    /// Method L: travel time at the initial density.
    ///
    /// Density is derived once from the origin room; each segment
    /// contributes `length / v` at that fixed density.
    fn method_l(&self, segments: &[Segment], occupants: u32, room_area: f64) -> CalculationResult {
        let mut trace = vec!["Method L Selected (N <= 50)".to_string()];
        let mut total_time = 0.0;

        let d_start = density(occupants, room_area);
        trace.push(format!(
            "Initial Density D = {d_start:.2} (N={occupants}, A={room_area:.2})"
        ));

        for (i, seg) in segments.iter().enumerate() {
            let params = self.store.flow_params(d_start, seg.path_type());
            let mut v = params.v;
            if v <= 0.0 {
                tracing::warn!(
                    path_type = %seg.path_type(),
                    density = d_start,
                    "non-positive flow speed in table data; substituting floor"
                );
                v = SPEED_FLOOR;
            }

            let t_seg = seg.length() / v;
            total_time += t_seg;
            trace.push(format!(
                "Seg {num} ({ty}): L={len:.2}m, v={v:.2}m/min -> t={t_seg:.2} min",
                num = i + 1,
                ty = seg.path_type(),
                len = seg.length(),
            ));
        }

        CalculationResult {
            method: Method::L,
            total_time,
            trace,
        }
    }

    /// Method Q: the slower of throughput and travel time per segment.
    ///
    /// Density is derived once from the initial occupant count and room
    /// area and reused for every segment — the source regulation does
    /// not propagate a continuity-derived density across width changes.
    /// Per segment, the clearing time is
    /// `max(N / (width × q), length / v)`: a segment cannot clear faster
    /// than either its walking speed or its throughput allows.
    fn method_q(&self, segments: &[Segment], occupants: u32, room_area: f64) -> CalculationResult {
        let mut trace = vec!["Method Q Selected (N > 50)".to_string()];

        let d_current = density(occupants, room_area);
        trace.push(format!("Initial Density D={d_current:.2}"));

        let mut total_time = 0.0;

        for (i, seg) in segments.iter().enumerate() {
            let params = self.store.flow_params(d_current, seg.path_type());

            let mut throughput = seg.width() * params.q;
            if throughput <= 0.0 {
                tracing::warn!(
                    path_type = %seg.path_type(),
                    width = seg.width(),
                    q = params.q,
                    "non-positive throughput; substituting floor"
                );
                throughput = SPEED_FLOOR;
            }
            let t_throughput = f64::from(occupants) / throughput;

            // Table 11 speeds are positive in valid data; only the
            // throughput denominator carries a floor.
            let t_travel = seg.length() / params.v;

            let t_segment = t_throughput.max(t_travel);
            total_time += t_segment;
            trace.push(format!(
                "Seg {num}: W={w}m L={len}m Type={ty} D={d_current:.2} -> q={q} v={v} -> T_calc={t_segment:.2}m",
                num = i + 1,
                w = seg.width(),
                len = seg.length(),
                ty = seg.path_type(),
                q = params.q,
                v = params.v,
            ));
        }

        CalculationResult {
            method: Method::Q,
            total_time,
            trace,
        }
    }
}
