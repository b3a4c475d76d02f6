//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once with `use_context_provider`; the filter bar
//! and the list it filters retrieve it with `use_context::<AppState>()`.

use crate::browser_query::{BrowserQueryParams, HistoryListener};
use dioxus::prelude::*;
use wh_filter::{FilterConfig, FilterState, QueryParamStore};

/// Shared state for the workout history page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Filter tunables (query key, date range lookback)
    pub config: Signal<FilterConfig>,
    /// Filter committed to the URL, re-read after submit/clear and Back/Forward
    pub applied_filter: Signal<FilterState>,
}

impl AppState {
    /// Create the state, reading the committed filter from the current URL.
    pub fn new(config: FilterConfig) -> Self {
        let applied = FilterState::read(&BrowserQueryParams, &config.query_key);
        Self {
            config: Signal::new(config),
            applied_filter: Signal::new(applied),
        }
    }

    /// Keep `applied_filter` in step with history navigation.
    ///
    /// The listener stops when the returned handle is dropped.
    pub fn follow_history(mut self) -> Option<HistoryListener> {
        HistoryListener::new(move || {
            let key = self.config.peek().query_key.clone();
            let current = self.applied_filter.peek().clone();
            if let Some(next) = refreshed_filter(&current, &BrowserQueryParams, &key) {
                log::debug!("history navigation changed the filter to {next:?}");
                self.applied_filter.set(next);
            }
        })
    }
}

/// The filter now in `store`, or `None` when it still matches `current`.
fn refreshed_filter<S: QueryParamStore + ?Sized>(
    current: &FilterState,
    store: &S,
    key: &str,
) -> Option<FilterState> {
    let latest = FilterState::read(store, key);
    (latest != *current).then_some(latest)
}

#[cfg(test)]
mod tests {
    use super::refreshed_filter;
    use wh_filter::{FilterReconciler, FilterState, FormController, MemoryQueryParams, PermissiveSchema};

    const KEY: &str = "workoutCategory";

    #[test]
    fn back_after_two_submits_restores_earlier_filter() {
        let store = MemoryQueryParams::new();
        let mut form = FormController::from_store(&store, KEY);
        let mut reconciler = FilterReconciler::new(store);

        form.category_field().set_value("lower");
        reconciler.submit(&form, &PermissiveSchema);
        let after_lower = reconciler.store().clone();

        form.category_field().set_value("upper");
        reconciler.submit(&form, &PermissiveSchema);
        let shown = reconciler.committed();
        assert_eq!(shown.workout_category.as_deref(), Some("upper"));

        // Back lands on the URL as it was after the first submit.
        let next = refreshed_filter(&shown, &after_lower, KEY).unwrap();
        assert_eq!(next.workout_category.as_deref(), Some("lower"));
    }

    #[test]
    fn back_to_unfiltered_url_clears_applied_filter() {
        let shown = FilterState {
            workout_category: Some("upper".to_string()),
        };
        let next = refreshed_filter(&shown, &MemoryQueryParams::new(), KEY).unwrap();
        assert_eq!(next, FilterState::default());
    }

    #[test]
    fn unchanged_url_needs_no_refresh() {
        let store = MemoryQueryParams::from_pairs([(KEY, "lower"), ("page", "3")]);
        let shown = FilterState {
            workout_category: Some("lower".to_string()),
        };
        assert_eq!(refreshed_filter(&shown, &store, KEY), None);
    }
}
