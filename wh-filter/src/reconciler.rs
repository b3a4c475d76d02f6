//! Maps form submissions and resets onto query-param mutations.

use crate::config::FilterConfig;
use crate::filter_state::{DraftFilterState, FilterState};
use crate::form::FormController;
use crate::query_params::QueryParamStore;
use crate::validation::Validator;

/// Glue between the [`FormController`] and a [`QueryParamStore`].
///
/// Every public mutation performs exactly one store write.
pub struct FilterReconciler<S> {
    store: S,
    config: FilterConfig,
}

impl<S: QueryParamStore> FilterReconciler<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, FilterConfig::default())
    }

    pub fn with_config(store: S, config: FilterConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The filter currently committed to the store.
    pub fn committed(&self) -> FilterState {
        FilterState::read(&self.store, &self.config.query_key)
    }

    /// Write the draft's category to the store, or remove the key when the
    /// category is absent or empty. `all` is written as-is.
    pub fn apply_filter(&mut self, draft: &DraftFilterState) {
        let key = self.config.query_key.as_str();
        match draft.committable_category() {
            Some(category) => {
                log::debug!("setting query param {key}={category}");
                self.store.set(key, category);
            }
            None => {
                log::debug!("removing query param {key}");
                self.store.delete(key);
            }
        }
    }

    /// Remove the category from the store, then reset the draft to `all`.
    pub fn clear_filter(&mut self, form: &mut FormController) {
        log::info!("clearing workout filters");
        self.store.delete(&self.config.query_key);
        form.reset(DraftFilterState::default());
    }

    /// Validate the form and apply it. Returns whether the store was written.
    pub fn submit<V: Validator + ?Sized>(&mut self, form: &FormController, validator: &V) -> bool {
        let accepted = form.submit(validator, |draft| self.apply_filter(draft));
        if accepted {
            log::info!(
                "applied workout filter: {:?}",
                self.committed().workout_category
            );
        }
        accepted
    }
}
