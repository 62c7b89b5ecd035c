//! # Building Category Identifiers
//!
//! Newtypes for the permissible-time lookup keys. A building category
//! (e.g. `buildings_under_25m`) may carry a sub-category refinement
//! (e.g. `fire_resistance_I_II`). The permissible-time table in the
//! regulation data store is keyed by these values.
//!
//! ## Validation
//!
//! Both newtypes are validated to be non-empty at construction time.
//! Beyond that no format is imposed — category naming follows the
//! regulation dataset, not a fixed scheme.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A building-category key for the permissible-time lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildingCategory(String);

impl BuildingCategory {
    /// Create a building category from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCategory`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(Self(s))
    }

    /// Access the category key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BuildingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sub-category key refining a [`BuildingCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubCategory(String);

impl SubCategory {
    /// Create a sub-category from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCategory`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(Self(s))
    }

    /// Access the sub-category key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
