//! Dropdown selector for the workout category.

use dioxus::prelude::*;
use wh_filter::WorkoutCategory;

#[derive(Props, Clone, PartialEq)]
pub struct CategorySelectProps {
    /// Form field name
    pub name: String,
    /// Current wire value ("all", "lower", "upper")
    pub value: String,
    #[props(default = false)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// Controlled select listing every workout category.
#[component]
pub fn CategorySelect(props: CategorySelectProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        select {
            name: "{props.name}",
            value: "{props.value}",
            disabled: props.disabled,
            style: "height: 32px; width: 200px; padding: 0 8px; border: 1px solid #ccc; border-radius: 4px;",
            onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
            for category in WorkoutCategory::ALL {
                option {
                    value: category.as_str(),
                    selected: category.as_str() == props.value,
                    {category.label()}
                }
            }
        }
    }
}
