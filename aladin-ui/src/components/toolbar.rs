//! Toolbar with hotspot toggle, language toggle and help.

use crate::state::ViewerState;
use dioxus::prelude::*;

const BUTTON_STYLE: &str = "padding: 4px 10px; border: 1px solid #546E7A; border-radius: 4px; background: #37474F; color: #ECEFF1; font-size: 13px;";

#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<ViewerState>();
    let lang = (state.language)();
    let strings = lang.strings();
    let hotspot = state.in_hotspot_mode();
    let hotspot_style = if hotspot {
        format!("{BUTTON_STYLE} background: #0277BD;")
    } else {
        BUTTON_STYLE.to_string()
    };
    let other_lang = lang.toggle().code().to_uppercase();

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center; padding: 6px 10px; background: #263238;",
            strong { style: "color: #ECEFF1; font-size: 14px; margin-right: auto;", "{strings.title}" }
            button {
                style: "{hotspot_style}",
                title: "{strings.hotspots}",
                onclick: move |_| {
                    state.toggle_hotspot();
                },
                "{strings.wind_10m}"
            }
            button {
                style: "{BUTTON_STYLE}",
                onclick: move |_| state.toggle_language(),
                "{other_lang}"
            }
            button {
                style: "{BUTTON_STYLE}",
                onclick: move |_| state.help_open.set(true),
                "?"
            }
        }
    }
}
