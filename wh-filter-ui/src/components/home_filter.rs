//! Filter bar above the workout history list.
//!
//! The category draft and the date range live in a `FilterBar` signal seeded
//! from the URL at mount. Submit and clear go through a `FilterReconciler`
//! over the browser URL, then refresh `AppState::applied_filter` from it.
//! The date range never reaches the URL.

use crate::browser_query::BrowserQueryParams;
use crate::components::{CategorySelect, DateRangePicker, FilterActions};
use crate::filter_bar::FilterBar;
use crate::state::AppState;
use dioxus::prelude::*;
use wh_filter::{FilterReconciler, PermissiveSchema};

#[component]
pub fn HomeFilter() -> Element {
    let mut state = use_context::<AppState>();

    let mut bar =
        use_signal(move || FilterBar::mount(&BrowserQueryParams, &state.config.read()));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut reconciler =
            FilterReconciler::with_config(BrowserQueryParams, state.config.read().clone());
        if let Some(committed) = bar.read().submit(&mut reconciler, &PermissiveSchema) {
            state.applied_filter.set(committed);
        }
    };

    let on_clear = move |_: MouseEvent| {
        let mut reconciler =
            FilterReconciler::with_config(BrowserQueryParams, state.config.read().clone());
        let committed = bar.write().clear(&mut reconciler);
        state.applied_filter.set(committed);
    };

    let (name, value, disabled, range) = {
        let bar = bar.read();
        let form = bar.form();
        (
            wh_filter::form::CATEGORY_FIELD.to_string(),
            form.draft().workout_category.clone().unwrap_or_default(),
            form.is_category_disabled(),
            bar.date_range(),
        )
    };

    rsx! {
        form {
            style: "display: flex; flex-direction: row; align-items: center; justify-content: space-between; gap: 8px;",
            onsubmit: on_submit,
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                span {
                    style: "font-size: 16px; font-weight: 600;",
                    "Filtros"
                }
                CategorySelect {
                    name,
                    value,
                    disabled,
                    on_change: move |value: String| {
                        bar.write().set_category(value);
                    },
                }
                DateRangePicker {
                    range,
                    on_change: move |range| bar.write().set_date_range(range),
                }
            }
            FilterActions { on_clear }
        }
    }
}
