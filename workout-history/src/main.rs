//! Workout history page.
//!
//! Mounts the filter bar above a summary of the filter currently committed
//! to the URL. The category filter round-trips through `?workoutCategory=`,
//! so a filtered view can be bookmarked or shared.

use dioxus::prelude::*;
use std::rc::Rc;
use wh_filter::FilterConfig;
use wh_filter_ui::components::HomeFilter;
use wh_filter_ui::state::AppState;

const FILTER_CONFIG_JSON: &str = include_str!("../config/filter.json");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("workout-history-root"))
        .launch(App);
}

fn load_config() -> FilterConfig {
    FilterConfig::from_json(FILTER_CONFIG_JSON).unwrap_or_else(|e| {
        log::warn!("invalid filter config, using defaults: {e}");
        FilterConfig::default()
    })
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(load_config()));
    // Held for the page's lifetime; dropping it detaches the popstate listener.
    use_hook(move || Rc::new(state.follow_history()));

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            h3 {
                style: "margin: 0 0 12px 0; font-size: 18px;",
                "Histórico de treinos"
            }
            HomeFilter {}
            AppliedFilterSummary {}
        }
    }
}

/// Shows which category the list below is filtered by.
#[component]
fn AppliedFilterSummary() -> Element {
    let state = use_context::<AppState>();
    let applied = state.applied_filter.read().clone();
    let label = match applied.category() {
        Some(category) => category.label().to_string(),
        None => applied.workout_category.unwrap_or_default(),
    };

    rsx! {
        p {
            style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0; font-size: 12px; color: #666;",
            "Categoria: {label}"
        }
    }
}
