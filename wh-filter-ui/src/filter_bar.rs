//! State behind `HomeFilter`, kept free of signals so it can be driven natively.

use wh_filter::{
    DateRange, FilterConfig, FilterReconciler, FilterState, FormController, QueryParamStore,
    Validator,
};

/// Category draft plus the display-only date range of one mounted filter bar.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBar {
    form: FormController,
    date_range: Option<DateRange>,
}

impl FilterBar {
    pub fn new(form: FormController, date_range: Option<DateRange>) -> Self {
        Self { form, date_range }
    }

    /// Seed the draft from the URL and start the range at `lookback` days ago.
    pub fn mount<S: QueryParamStore + ?Sized>(store: &S, config: &FilterConfig) -> Self {
        Self::new(
            FormController::from_store(store, &config.query_key),
            Some(DateRange::default_for_today(config.default_lookback_days)),
        )
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn date_range(&self) -> Option<DateRange> {
        self.date_range
    }

    pub fn set_category(&mut self, value: String) {
        self.form.category_field().set_value(value);
    }

    /// Replace the range. Never touches the URL.
    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        self.date_range = range;
    }

    /// Commit the category. Returns the filter read back from the store,
    /// or `None` when validation rejected the draft.
    pub fn submit<S, V>(&self, reconciler: &mut FilterReconciler<S>, validator: &V) -> Option<FilterState>
    where
        S: QueryParamStore,
        V: Validator + ?Sized,
    {
        reconciler
            .submit(&self.form, validator)
            .then(|| reconciler.committed())
    }

    /// Remove the category from the URL and reset the draft. The range is kept.
    pub fn clear<S: QueryParamStore>(&mut self, reconciler: &mut FilterReconciler<S>) -> FilterState {
        reconciler.clear_filter(&mut self.form);
        reconciler.committed()
    }
}
