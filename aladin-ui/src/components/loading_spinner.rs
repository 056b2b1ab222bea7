//! Loading indicator component.

use crate::state::ViewerState;
use dioxus::prelude::*;

/// Centered loading label over the image viewport.
#[component]
pub fn LoadingSpinner() -> Element {
    let state = use_context::<ViewerState>();
    let label = state.language.read().strings().loading;

    rsx! {
        div {
            style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); padding: 8px 14px; background: rgba(0,0,0,0.6); color: #fff; border-radius: 4px; pointer-events: none;",
            "{label}"
        }
    }
}
