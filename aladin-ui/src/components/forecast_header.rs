//! Header with run, valid time, lead time and layer.

use crate::state::ViewerState;
use aladin_core::header::{present, Header};
use dioxus::prelude::*;

/// Header line above the image. Past frames are dimmed and tagged.
#[component]
pub fn ForecastHeader() -> Element {
    let state = use_context::<ViewerState>();

    // Memoised so unchanged fields do not re-render
    let header = use_memo(move || -> Option<Header> {
        let nav = state.navigator.read();
        let anchor = (state.anchor)()?;
        let tz = state.config.read().display_tz;
        Some(present(nav.as_ref()?, anchor, tz, (state.language)()))
    });

    let Some(header) = header() else {
        return rsx! {};
    };
    let past_label = state.language.read().strings().past;
    let valid_style = if header.past {
        "font-weight: bold; color: #9E9E9E;"
    } else {
        "font-weight: bold; color: #fff;"
    };

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 10px; align-items: baseline; padding: 6px 10px; background: #263238; color: #ECEFF1; font-size: 14px;",
            span { style: "{valid_style}", "{header.valid}" }
            if header.past {
                span {
                    style: "font-size: 11px; padding: 1px 5px; border-radius: 3px; background: #757575; color: #fff;",
                    "{past_label}"
                }
            }
            span { "{header.offset}" }
            span { "{header.layer}" }
            if let Some(region) = header.region.as_ref() {
                span { style: "color: #81D4FA;", "{region}" }
            }
            span { style: "margin-left: auto; font-size: 12px; color: #90A4AE;", "{header.run}" }
        }
    }
}
