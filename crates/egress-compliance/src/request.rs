//! # Calculation Request — Collaborator Boundary Input
//!
//! The request document the host environment (or the CLI) submits for
//! one compliance check. Segment specs arrive as raw strings and
//! optional fields; [`SegmentSpec::into_segment`] validates them into
//! core [`Segment`]s before any arithmetic runs. A request containing an
//! unknown path type or a non-positive dimension fails validation as a
//! whole — no partial calculation is performed.

use serde::{Deserialize, Serialize};

use egress_core::{PathType, Segment, ValidationError};

/// One segment of an egress path as supplied by the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentSpec {
    /// Path length in metres.
    pub length: f64,
    /// Path type string: `horizontal`, `stair_down`, `stair_up`, `door`.
    #[serde(rename = "type")]
    pub path_type: String,
    /// Clear width in metres; defaults to 1.0 when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl SegmentSpec {
    /// Validate this spec into a core [`Segment`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownPathType`] for an unsupported
    /// type string, or the non-positive-dimension variants for a bad
    /// length or width.
    pub fn into_segment(&self) -> Result<Segment, ValidationError> {
        let path_type: PathType = self.path_type.parse()?;
        match self.width {
            Some(width) => Segment::with_width(self.length, path_type, width),
            None => Segment::new(self.length, path_type),
        }
    }
}

/// A complete calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvacuationRequest {
    /// No-op gate: nothing is computed unless this is true.
    #[serde(default)]
    pub run: bool,
    /// Egress path segments in order of travel.
    pub segments: Vec<SegmentSpec>,
    /// Number of occupants evacuating.
    pub occupant_count: u32,
    /// Area of the origin room, m²; defaults to 100.0 when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_area: Option<f64>,
    /// Building-category key for the permissible-time lookup.
    pub category: String,
    /// Optional sub-category refinement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
}

impl EvacuationRequest {
    /// Validate every segment spec, in travel order.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid spec; no partial list is returned.
    pub fn validated_segments(&self) -> Result<Vec<Segment>, ValidationError> {
        self.segments
            .iter()
            .map(SegmentSpec::into_segment)
            .collect()
    }
}
