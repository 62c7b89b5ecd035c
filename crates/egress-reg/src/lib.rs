#![deny(missing_docs)]

//! # egress-reg — Regulatory Data Store
//!
//! Loads the packaged regulation dataset (flow-parameter Table 11, the
//! reserved narrow-door Table 12, reserved flow limits, and the
//! permissible-time map) and exposes read-only lookups over it.
//!
//! ## Load-Then-Freeze
//!
//! [`RegulationStore::load`] is an explicit initialization step that
//! parses and validates the dataset once, producing an immutable handle.
//! There is no mutation API and no lazy global state: once loaded, the
//! store may be shared by reference across concurrent calculations.
//!
//! ## Failure Model
//!
//! A missing or malformed dataset is a fatal startup condition reported
//! as a structured [`RegError`] — never retried, never defaulted.
//! Lookups on a loaded store are total: the path-type set is closed by
//! the [`PathType`](egress_core::PathType) enum, table emptiness and
//! ordering are rejected at load, and unknown permissible-time keys
//! resolve to the permissive sentinel by design.

pub mod error;
pub mod store;
pub mod tables;

// Re-export primary types.
pub use error::{RegError, RegResult};
pub use store::RegulationStore;
pub use tables::{FlowParams, FlowRow, LimitParams, NarrowDoorRow, PermissibleEntry};
