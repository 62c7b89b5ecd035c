#![deny(missing_docs)]

//! # egress-geometry — Path Curve Classification
//!
//! The boundary contract with the host modeling environment. The host
//! extracts each egress path curve into a [`PathCurve`] — two 3D
//! endpoints plus the 3D arc length — and this crate turns it into a
//! semantic [`Segment`](egress_core::Segment) by classifying the slope.
//!
//! ## Classification Rule
//!
//! The planar run is `sqrt(max(0, length² − Δz²))`, clamped to a minimum
//! of 0.001 m. The slope angle is `atan2(|Δz|, run)` in degrees. Below
//! 5° the segment is horizontal; otherwise a negative Δz is a descending
//! stair and a positive Δz an ascending one. The `door` path type is
//! never emitted here — it is reserved for geometry that can detect door
//! crossings.

pub mod classify;

// Re-export primary types.
pub use classify::{classify, segment_from_curve, segments_from_path, PathCurve, Point3};
