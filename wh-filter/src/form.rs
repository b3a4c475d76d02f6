//! Form controller holding the uncommitted draft.

use crate::filter_state::{DraftFilterState, FilterState};
use crate::query_params::QueryParamStore;
use crate::validation::Validator;

/// Form field name of the category select.
pub const CATEGORY_FIELD: &str = "workoutCategory";

/// Owns the draft filter and validates it on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    draft: DraftFilterState,
    category_disabled: bool,
}

impl FormController {
    pub fn initialize(seed: DraftFilterState) -> Self {
        Self {
            draft: seed,
            category_disabled: false,
        }
    }

    /// Seed the draft from whatever the store currently holds under `key`.
    pub fn from_store<S: QueryParamStore + ?Sized>(store: &S, key: &str) -> Self {
        let committed = FilterState::read(store, key);
        Self::initialize(DraftFilterState::seeded_from(&committed))
    }

    pub fn draft(&self) -> &DraftFilterState {
        &self.draft
    }

    /// Validate the draft and hand it to `on_valid`.
    ///
    /// Returns `false` when validation fails; `on_valid` is not called and
    /// nothing is reported to the user.
    pub fn submit<V, F>(&self, validator: &V, on_valid: F) -> bool
    where
        V: Validator + ?Sized,
        F: FnOnce(&DraftFilterState),
    {
        match validator.validate(&self.draft) {
            Ok(()) => {
                on_valid(&self.draft);
                true
            }
            Err(e) => {
                log::debug!("ignoring invalid filter submission: {e}");
                false
            }
        }
    }

    pub fn reset(&mut self, new_value: DraftFilterState) {
        self.draft = new_value;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.category_disabled = disabled;
    }

    pub fn is_category_disabled(&self) -> bool {
        self.category_disabled
    }

    /// Controlled-input binding for the category select.
    pub fn category_field(&mut self) -> FieldBinding<'_> {
        FieldBinding {
            name: CATEGORY_FIELD,
            disabled: self.category_disabled,
            slot: &mut self.draft.workout_category,
        }
    }
}

/// Binds one draft field to a controlled input widget.
#[derive(Debug)]
pub struct FieldBinding<'a> {
    pub name: &'static str,
    pub disabled: bool,
    slot: &'a mut Option<String>,
}

impl FieldBinding<'_> {
    /// Current value, empty when the field is unset.
    pub fn value(&self) -> &str {
        self.slot.as_deref().unwrap_or_default()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        if self.disabled {
            return;
        }
        *self.slot = Some(value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_params::MemoryQueryParams;
    use crate::validation::{CategorySchema, PermissiveSchema};

    #[test]
    fn seeds_lower_from_url() {
        let store = MemoryQueryParams::from_pairs([("workoutCategory", "lower")]);
        let form = FormController::from_store(&store, "workoutCategory");
        assert_eq!(form.draft().workout_category.as_deref(), Some("lower"));
    }

    #[test]
    fn seeds_all_when_url_has_no_key() {
        let store = MemoryQueryParams::from_pairs([("page", "3")]);
        let form = FormController::from_store(&store, "workoutCategory");
        assert_eq!(form.draft().workout_category.as_deref(), Some("all"));
    }

    #[test]
    fn binding_reads_and_writes_draft() {
        let mut form = FormController::initialize(DraftFilterState::default());
        {
            let mut field = form.category_field();
            assert_eq!(field.name, "workoutCategory");
            assert_eq!(field.value(), "all");
            assert!(!field.disabled);
            field.set_value("upper");
        }
        assert_eq!(form.draft().workout_category.as_deref(), Some("upper"));
    }

    #[test]
    fn disabled_binding_ignores_writes() {
        let mut form = FormController::initialize(DraftFilterState::default());
        form.set_disabled(true);
        let mut field = form.category_field();
        assert!(field.disabled);
        field.set_value("lower");
        assert_eq!(field.value(), "all");
    }

    #[test]
    fn submit_passes_draft_to_callback() {
        let form = FormController::initialize(DraftFilterState::with_category("lower"));
        let mut seen = None;
        let accepted = form.submit(&PermissiveSchema, |draft| seen = Some(draft.clone()));
        assert!(accepted);
        assert_eq!(seen, Some(DraftFilterState::with_category("lower")));
    }

    #[test]
    fn rejected_submit_skips_callback() {
        let form = FormController::initialize(DraftFilterState::with_category("cardio"));
        let mut called = false;
        let accepted = form.submit(&CategorySchema, |_| called = true);
        assert!(!accepted);
        assert!(!called);
    }

    #[test]
    fn reset_overwrites_draft() {
        let mut form = FormController::initialize(DraftFilterState::with_category("upper"));
        form.reset(DraftFilterState::default());
        assert_eq!(form.draft(), &DraftFilterState::with_category("all"));
    }
}
