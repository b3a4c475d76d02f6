//! Reusable Dioxus RSX components for the workout history filter bar.

mod category_select;
mod date_range_picker;
mod filter_actions;
mod home_filter;

pub use category_select::CategorySelect;
pub use date_range_picker::DateRangePicker;
pub use filter_actions::FilterActions;
pub use home_filter::HomeFilter;
