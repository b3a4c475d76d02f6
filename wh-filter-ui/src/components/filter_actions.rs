//! Submit and clear buttons.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FilterActionsProps {
    pub on_clear: EventHandler<MouseEvent>,
}

/// "Filtrar resultados" submits the enclosing form; "Remover Filtros" clears it.
#[component]
pub fn FilterActions(props: FilterActionsProps) -> Element {
    let on_clear = props.on_clear;

    rsx! {
        div {
            style: "display: flex; gap: 8px;",
            button {
                r#type: "submit",
                style: "padding: 4px 10px; font-size: 12px; border-radius: 4px; border: none; background: #18181b; color: #fff; cursor: pointer;",
                "Filtrar resultados"
            }
            button {
                r#type: "button",
                style: "padding: 4px 10px; font-size: 12px; border-radius: 4px; border: 1px solid #ccc; background: #fff; cursor: pointer;",
                onclick: move |evt| on_clear.call(evt),
                span { style: "margin-right: 6px;", "✕" }
                "Remover Filtros"
            }
        }
    }
}
