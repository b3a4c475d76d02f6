//! Core filter logic for the workout history list.
//!
//! This crate is framework-free so it can be tested natively and reused by
//! the Dioxus components in `wh-filter-ui`.
//!
//! # Architecture
//!
//! - The URL query string is the single source of truth for the committed
//!   category filter. It is reached only through the [`QueryParamStore`]
//!   trait (`get` / `set` / `delete`).
//! - [`FormController`] owns the uncommitted draft and validates it on submit.
//! - [`FilterReconciler`] maps submissions and resets onto store mutations.
//! - [`DateRange`] is display-only state and never touches the store.
//!
//! # Usage
//!
//! ```rust
//! use wh_filter::{FilterReconciler, FormController, MemoryQueryParams, PermissiveSchema};
//!
//! let store = MemoryQueryParams::from_pairs([("workoutCategory", "lower")]);
//! let mut form = FormController::from_store(&store, "workoutCategory");
//! assert_eq!(form.draft().workout_category.as_deref(), Some("lower"));
//!
//! let mut reconciler = FilterReconciler::new(store);
//! form.category_field().set_value("upper");
//! assert!(reconciler.submit(&form, &PermissiveSchema));
//! assert_eq!(reconciler.store().to_query_string(), "workoutCategory=upper");
//!
//! reconciler.clear_filter(&mut form);
//! assert_eq!(reconciler.store().to_query_string(), "");
//! assert_eq!(form.draft().workout_category.as_deref(), Some("all"));
//! ```

pub mod category;
pub mod config;
pub mod date_range;
pub mod filter_state;
pub mod form;
pub mod query_params;
pub mod reconciler;
pub mod validation;

pub use category::WorkoutCategory;
pub use config::FilterConfig;
pub use date_range::DateRange;
pub use filter_state::{DraftFilterState, FilterState};
pub use form::{FieldBinding, FormController};
pub use query_params::{MemoryQueryParams, QueryParamStore};
pub use reconciler::FilterReconciler;
pub use validation::{CategorySchema, PermissiveSchema, ValidationError, Validator};
