//! Site markers drawn over the wind image in hotspot mode.

use crate::state::ViewerState;
use dioxus::prelude::*;

/// Markers follow the pinch/pan transform; positions are recomputed whenever
/// the transform, geometry or hotspot changes.
#[component]
pub fn HotspotOverlay() -> Element {
    let state = use_context::<ViewerState>();
    let markers = use_memo(move || state.markers());
    let selected = (state.selected_marker)();

    rsx! {
        div {
            style: "position: absolute; inset: 0; pointer-events: none; overflow: hidden;",
            for (i, marker) in markers().into_iter().enumerate() {
                div {
                    key: "{marker.name}",
                    style: "position: absolute; left: {marker.position.x}px; top: {marker.position.y}px; transform: translate(-50%, -50%); width: 12px; height: 12px; border-radius: 6px; border: 2px solid #fff; background: #E53935;",
                    if selected == Some(i) {
                        span {
                            style: "position: absolute; left: 14px; top: -4px; white-space: nowrap; padding: 1px 4px; font-size: 12px; background: rgba(0,0,0,0.7); color: #fff; border-radius: 3px;",
                            "{marker.name}"
                        }
                    }
                }
            }
        }
    }
}
