#![deny(missing_docs)]

//! # egress-core — Foundational Types for the Egress Workspace
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde` and `thiserror`
//! from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Closed [`PathType`] enum.** One definition of the supported egress
//!    path types, exhaustive `match` everywhere. Strings from external
//!    requests are validated into the enum at the boundary; an unknown
//!    path type never reaches the calculation engine.
//!
//! 2. **Validated construction for domain values.** A [`Segment`] cannot
//!    exist with a non-positive length or width, and a [`BuildingCategory`]
//!    cannot be empty. Downstream code operates on values whose invariants
//!    already hold.
//!
//! 3. **Regulatory constants in one place.** The saturation density, the
//!    speed floor, and the unlimited-time sentinel are defined once in
//!    [`constants`] and shared by the data store and the engine.
//!
//! 4. **[`ValidationError`] hierarchy.** Structured errors with `thiserror`
//!    — no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod category;
pub mod constants;
pub mod error;
pub mod path;

// Re-export primary types at crate root for ergonomic imports.
pub use category::{BuildingCategory, SubCategory};
pub use constants::{
    DEFAULT_ROOM_AREA_M2, DEFAULT_WIDTH_M, MAX_DENSITY, OCCUPANT_METHOD_THRESHOLD, SPEED_FLOOR,
    UNLIMITED_TIME_MIN,
};
pub use error::ValidationError;
pub use path::{PathType, Segment};
