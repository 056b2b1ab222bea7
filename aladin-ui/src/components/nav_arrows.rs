//! On-screen arrow buttons mirroring swipes and arrow keys.

use crate::state::ViewerState;
use aladin_core::catalog::OFFSET_STEP;
use dioxus::prelude::*;

const ARROW_STYLE: &str = "position: absolute; width: 44px; height: 44px; border: none; border-radius: 22px; background: rgba(0,0,0,0.35); color: #fff; font-size: 20px; z-index: 10;";

#[component]
pub fn NavArrows() -> Element {
    let mut state = use_context::<ViewerState>();
    let hotspot = state.in_hotspot_mode();
    let step = OFFSET_STEP as i32;

    rsx! {
        button {
            style: "{ARROW_STYLE} left: 8px; top: 50%;",
            onclick: move |_| {
                state.change_offset(-step);
            },
            "◀"
        }
        button {
            style: "{ARROW_STYLE} right: 8px; top: 50%;",
            onclick: move |_| {
                state.change_offset(step);
            },
            "▶"
        }
        if hotspot {
            // Up/down cycle the hotspot regions instead of altitude
            button {
                style: "{ARROW_STYLE} left: 50%; top: 8px;",
                onclick: move |_| {
                    state.change_hotspot(-1);
                },
                "◁"
            }
            button {
                style: "{ARROW_STYLE} left: 50%; bottom: 8px;",
                onclick: move |_| {
                    state.change_hotspot(1);
                },
                "▷"
            }
        } else {
            button {
                style: "{ARROW_STYLE} left: 50%; top: 8px;",
                onclick: move |_| {
                    state.change_altitude(1);
                },
                "▲"
            }
            button {
                style: "{ARROW_STYLE} left: 50%; bottom: 8px;",
                onclick: move |_| {
                    state.change_altitude(-1);
                },
                "▼"
            }
        }
    }
}
