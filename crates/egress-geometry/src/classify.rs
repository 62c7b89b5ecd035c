//! Slope-based segment classification.
//!
//! Pure arithmetic over curve endpoints; no host types leak past the
//! [`PathCurve`] boundary.

use serde::{Deserialize, Serialize};

use egress_core::{PathType, Segment, ValidationError};

/// Slope angle below which a segment counts as horizontal, degrees.
pub const SLOPE_THRESHOLD_DEG: f64 = 5.0;

/// Minimum planar run, metres. Guards the slope division for curves
/// that are (numerically) vertical.
pub const MIN_PLANAR_RUN: f64 = 0.001;

/// A point in the host model's 3D space, metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate (elevation).
    pub z: f64,
}

/// One extracted egress path curve: endpoints plus 3D arc length.
///
/// The host supplies the arc length directly (the curve between the
/// endpoints need not be straight); this crate only validates that it
/// is positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathCurve {
    /// Curve start point.
    pub start: Point3,
    /// Curve end point.
    pub end: Point3,
    /// 3D arc length, metres.
    pub length: f64,
}

impl PathCurve {
    /// Create a path curve, validating the arc length.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveLength`] if `length <= 0`.
    pub fn new(start: Point3, end: Point3, length: f64) -> Result<Self, ValidationError> {
        if !(length > 0.0) {
            return Err(ValidationError::NonPositiveLength(length));
        }
        Ok(Self { start, end, length })
    }

    /// Elevation change from start to end, metres.
    pub fn rise(&self) -> f64 {
        self.end.z - self.start.z
    }
}

/// Classify a curve's path type from its slope.
pub fn classify(curve: &PathCurve) -> PathType {
    let rise = curve.rise();
    let run_sq = curve.length * curve.length - rise * rise;
    let planar_run = run_sq.max(0.0).sqrt().max(MIN_PLANAR_RUN);
    let slope_deg = rise.abs().atan2(planar_run).to_degrees();

    if slope_deg < SLOPE_THRESHOLD_DEG {
        PathType::Horizontal
    } else if rise < 0.0 {
        PathType::StairDown
    } else {
        PathType::StairUp
    }
}

/// Build a [`Segment`] from one curve, with the default clear width.
///
/// # Errors
///
/// Returns [`ValidationError::NonPositiveLength`] if the curve length is
/// not positive.
pub fn segment_from_curve(curve: &PathCurve) -> Result<Segment, ValidationError> {
    Segment::new(curve.length, classify(curve))
}

/// Convert an ordered egress path into segments, in travel order.
///
/// # Errors
///
/// Fails on the first curve with a non-positive length; no partial
/// segment list is returned.
pub fn segments_from_path(curves: &[PathCurve]) -> Result<Vec<Segment>, ValidationError> {
    let segments = curves
        .iter()
        .map(segment_from_curve)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = segments.len(), "classified egress path");
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64, z: f64) -> Point3 {
        Point3 { x, y, z }
    }

    fn curve(dz: f64, length: f64) -> PathCurve {
        PathCurve::new(point(0.0, 0.0, 0.0), point(1.0, 0.0, dz), length).unwrap()
    }

    #[test]
    fn flat_curve_is_horizontal() {
        assert_eq!(classify(&curve(0.0, 10.0)), PathType::Horizontal);
    }

    #[test]
    fn gentle_ramp_below_five_degrees_is_horizontal() {
        // rise 0.5 over arc 10.0 → slope ≈ 2.9°.
        assert_eq!(classify(&curve(0.5, 10.0)), PathType::Horizontal);
    }

    #[test]
    fn descending_curve_is_stair_down() {
        // rise -3 over arc 6 → slope ≈ 30°.
        assert_eq!(classify(&curve(-3.0, 6.0)), PathType::StairDown);
    }

    #[test]
    fn ascending_curve_is_stair_up() {
        assert_eq!(classify(&curve(3.0, 6.0)), PathType::StairUp);
    }

    #[test]
    fn vertical_curve_classifies_without_dividing_by_zero() {
        // Arc length equals |Δz|: the planar run clamps to 0.001.
        assert_eq!(classify(&curve(-4.0, 4.0)), PathType::StairDown);
    }

    #[test]
    fn slope_just_under_threshold_is_horizontal() {
        // tan(5°) ≈ 0.08749; rise chosen for a slope just below 5°.
        let run = 10.0f64;
        let rise = run * (4.9f64).to_radians().tan();
        let length = (run * run + rise * rise).sqrt();
        assert_eq!(classify(&curve(rise, length)), PathType::Horizontal);
    }

    #[test]
    fn slope_just_over_threshold_is_stair() {
        let run = 10.0f64;
        let rise = run * (5.1f64).to_radians().tan();
        let length = (run * run + rise * rise).sqrt();
        assert_eq!(classify(&curve(rise, length)), PathType::StairUp);
    }

    #[test]
    fn curve_rejects_non_positive_length() {
        assert!(PathCurve::new(point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), 0.0).is_err());
    }

    #[test]
    fn segment_from_curve_carries_length_and_type() {
        let seg = segment_from_curve(&curve(-3.0, 6.0)).unwrap();
        assert_eq!(seg.length(), 6.0);
        assert_eq!(seg.path_type(), PathType::StairDown);
        assert_eq!(seg.width(), 1.0);
    }

    #[test]
    fn segments_from_path_preserves_travel_order() {
        let path = [curve(0.0, 12.0), curve(-3.0, 6.0), curve(0.0, 4.0)];
        let segments = segments_from_path(&path).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].path_type(), PathType::Horizontal);
        assert_eq!(segments[1].path_type(), PathType::StairDown);
        assert_eq!(segments[2].path_type(), PathType::Horizontal);
    }

    #[test]
    fn segments_from_path_empty_is_empty() {
        assert!(segments_from_path(&[]).unwrap().is_empty());
    }
}
