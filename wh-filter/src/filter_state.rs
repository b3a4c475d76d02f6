//! Committed and draft filter values.

use crate::category::WorkoutCategory;
use crate::query_params::QueryParamStore;
use serde::{Deserialize, Serialize};

/// The committed, shareable filter as read from the URL.
///
/// `workout_category` is `None` when the query key is absent, which means
/// the same thing as `all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub workout_category: Option<String>,
}

impl FilterState {
    /// Read the committed filter from a query-param store.
    pub fn read<S: QueryParamStore + ?Sized>(store: &S, key: &str) -> Self {
        Self {
            workout_category: store.get(key),
        }
    }

    /// The effective category, treating an absent key as `all`.
    ///
    /// Returns `None` for a value that isn't one of the known categories
    /// (a hand-edited URL, for example).
    pub fn category(&self) -> Option<WorkoutCategory> {
        match self.workout_category.as_deref() {
            None => Some(WorkoutCategory::All),
            Some(value) => value.parse().ok(),
        }
    }
}

/// In-progress form value, before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftFilterState {
    pub workout_category: Option<String>,
    /// Part of the form schema; no widget edits it and it is never committed.
    pub aerobic: Option<bool>,
}

impl Default for DraftFilterState {
    fn default() -> Self {
        Self::with_category(WorkoutCategory::All.as_str())
    }
}

impl DraftFilterState {
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            workout_category: Some(category.into()),
            aerobic: None,
        }
    }

    /// Seed a draft from the committed filter; an absent key seeds `all`.
    pub fn seeded_from(committed: &FilterState) -> Self {
        match &committed.workout_category {
            Some(value) => Self::with_category(value.clone()),
            None => Self::default(),
        }
    }

    /// The category value to commit, or `None` when the field is absent or empty.
    pub fn committable_category(&self) -> Option<&str> {
        self.workout_category.as_deref().filter(|v| !v.is_empty())
    }
}
