//! Draft validation schemas.

use crate::category::WorkoutCategory;
use crate::filter_state::DraftFilterState;
use std::fmt;

/// Why a draft was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error on {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks a draft before it is committed.
pub trait Validator {
    fn validate(&self, draft: &DraftFilterState) -> Result<(), ValidationError>;
}

/// Accepts any string (or nothing) for the category and any boolean for `aerobic`.
///
/// This is the schema the filter bar ships with; it never rejects.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveSchema;

impl Validator for PermissiveSchema {
    fn validate(&self, _draft: &DraftFilterState) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Only lets known category wire values through. Absent or empty is fine.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySchema;

impl Validator for CategorySchema {
    fn validate(&self, draft: &DraftFilterState) -> Result<(), ValidationError> {
        match draft.committable_category() {
            None => Ok(()),
            Some(value) => value
                .parse::<WorkoutCategory>()
                .map(|_| ())
                .map_err(|e| ValidationError {
                    field: "workoutCategory",
                    message: e.to_string(),
                }),
        }
    }
}
