//! # Regulatory Constants — Single Source of Truth
//!
//! Numeric constants fixed by the evacuation regulation and by the
//! component contract with the host modeling environment. Defined once
//! here so the data store, the engine, and the request layer cannot
//! silently diverge.

/// Saturation occupant density, persons per square metre.
///
/// Densities are clamped to this value everywhere: in the density
/// derivation `N / A` and before every Table 11 lookup. The regulation's
/// flow model is not defined beyond this crowding level.
pub const MAX_DENSITY: f64 = 9.2;

/// Floor substituted for a non-positive flow speed or throughput
/// denominator.
///
/// Valid regulation data never carries a non-positive speed; the floor
/// guards the division when a caller supplies a malformed dataset. The
/// substitution is silent apart from a log event — it is a documented
/// degenerate-input policy, not an error.
pub const SPEED_FLOOR: f64 = 0.1;

/// Sentinel permissible time, in minutes, for an unknown building
/// category or sub-category.
///
/// Effectively unlimited: compliance against the sentinel passes unless
/// the computed total time is absurd. A permissive default rather than a
/// lookup error.
pub const UNLIMITED_TIME_MIN: f64 = 999.0;

/// Default clear width, in metres, for a segment whose request omits it.
pub const DEFAULT_WIDTH_M: f64 = 1.0;

/// Default room area, in square metres, when a request omits it.
pub const DEFAULT_ROOM_AREA_M2: f64 = 100.0;

/// Occupant-count threshold for calculation method selection.
///
/// `N <= 50` selects Method L; `N > 50` selects Method Q. A hard policy
/// boundary inherited from the source regulation — there is no
/// interpolation between the methods.
pub const OCCUPANT_METHOD_THRESHOLD: u32 = 50;
