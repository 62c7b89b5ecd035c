//! # Path Types & Segments
//!
//! The closed [`PathType`] enum and the validated [`Segment`] value type.
//! A segment is one leg of an egress path: a length in metres, a clear
//! width in metres, and the path type the flow tables are keyed by.
//!
//! ## Validation
//!
//! [`Segment`] enforces `length > 0` and `width > 0` at construction.
//! [`PathType`] parses only the four supported strings; anything else is
//! [`ValidationError::UnknownPathType`], which aborts a calculation
//! request before the engine runs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_WIDTH_M;
use crate::error::ValidationError;

/// The type of one egress path segment.
///
/// Determined from the 3D rise over the planar run of the segment by the
/// geometry classifier. `Door` is part of the supported set and the flow
/// tables carry parameters for it, but the current classifier never emits
/// it — it is reserved for geometry that can detect door crossings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathType {
    /// Level travel (slope below 5 degrees).
    Horizontal,
    /// Descending stair travel.
    StairDown,
    /// Ascending stair travel.
    StairUp,
    /// Door crossing (reserved — not yet emitted by the classifier).
    Door,
}

impl PathType {
    /// Return the string representation of this path type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::StairDown => "stair_down",
            Self::StairUp => "stair_up",
            Self::Door => "door",
        }
    }

    /// Return all path type variants.
    pub fn all() -> &'static [PathType] {
        &[Self::Horizontal, Self::StairDown, Self::StairUp, Self::Door]
    }
}

impl FromStr for PathType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "stair_down" => Ok(Self::StairDown),
            "stair_up" => Ok(Self::StairUp),
            "door" => Ok(Self::Door),
            other => Err(ValidationError::UnknownPathType(other.to_string())),
        }
    }
}

impl std::fmt::Display for PathType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One leg of an egress path.
///
/// Immutable once constructed; the invariants `length > 0` and
/// `width > 0` hold for every live value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    length: f64,
    width: f64,
    path_type: PathType,
}

impl Segment {
    /// Create a segment with the default clear width of 1.0 m.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveLength`] if `length <= 0`.
    pub fn new(length: f64, path_type: PathType) -> Result<Self, ValidationError> {
        Self::with_width(length, path_type, DEFAULT_WIDTH_M)
    }

    /// Create a segment with an explicit clear width.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveLength`] if `length <= 0`,
    /// or [`ValidationError::NonPositiveWidth`] if `width <= 0`.
    pub fn with_width(
        length: f64,
        path_type: PathType,
        width: f64,
    ) -> Result<Self, ValidationError> {
        if !(length > 0.0) {
            return Err(ValidationError::NonPositiveLength(length));
        }
        if !(width > 0.0) {
            return Err(ValidationError::NonPositiveWidth(width));
        }
        Ok(Self {
            length,
            width,
            path_type,
        })
    }

    /// Path length in metres (3D arc length).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Clear width in metres.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The path type of this segment.
    pub fn path_type(&self) -> PathType {
        self.path_type
    }
}
