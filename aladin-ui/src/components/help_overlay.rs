//! Help overlay listing the navigation gestures.

use crate::state::ViewerState;
use dioxus::prelude::*;

#[component]
pub fn HelpOverlay() -> Element {
    let mut state = use_context::<ViewerState>();
    if !(state.help_open)() {
        return rsx! {};
    }
    let strings = state.language.read().strings();

    rsx! {
        div {
            style: "position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.6); z-index: 50;",
            onclick: move |_| state.help_open.set(false),
            div {
                style: "max-width: 360px; padding: 16px; background: #fff; color: #263238; border-radius: 6px;",
                onclick: move |evt| evt.stop_propagation(),
                h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "{strings.help_title}" }
                ul {
                    style: "margin: 0 0 12px 0; padding-left: 18px; font-size: 14px;",
                    for line in strings.help_lines.iter() {
                        li { "{line}" }
                    }
                }
                button {
                    onclick: move |_| state.help_open.set(false),
                    "{strings.close}"
                }
            }
        }
    }
}
