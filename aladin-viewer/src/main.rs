//! ALADIN forecast viewer
//!
//! Browses the pre-rendered ALADIN model images on the ARSO image server by
//! forecast run, lead time and altitude layer, with a 10 m wind hotspot mode.
//!
//! Data flow:
//! 1. On mount: probe the image server for the published runs (newest first)
//!    and start the session on the newest run at +3h.
//! 2. Swipes, arrow buttons and keys move the `Navigator`; the image URL and
//!    header are memos over it, so each change reloads the image.
//! 3. Two-finger gestures drive the pinch/pan transform, clamped against the
//!    measured viewport; hotspot markers are projected through it.

use aladin_core::config::ViewerConfig;
use aladin_core::discovery::discover_runs;
use aladin_core::error::ViewerError;
use aladin_core::gesture::SwipeAction;
use aladin_core::keys::{key_command, KeyCommand, KeyContext};
use aladin_core::navigation::Navigator;
use aladin_core::transform::Point;
use aladin_core::url::UrlBuilder;
use aladin_ui::components::{
    ErrorDisplay, ForecastHeader, HelpOverlay, HotspotOverlay, LoadingSpinner, NavArrows, Toolbar,
};
use aladin_ui::state::ViewerState;
use aladin_ui::web_bridge::{self, ImageProber};
use dioxus::prelude::*;
use log::{debug, warn};

/// DOM id of the element the image is fitted into.
const VIEWPORT_ID: &str = "forecast-viewport";
/// DOM id of the forecast `<img>`.
const IMAGE_ID: &str = "forecast-image";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("aladin-root"))
        .launch(App);
}

fn touch_points(touches: &[TouchPoint]) -> Vec<Point> {
    touches
        .iter()
        .map(|t| {
            let c = t.client_coordinates();
            Point::new(c.x, c.y)
        })
        .collect()
}

/// Re-measure the viewport/image and re-clamp the transform.
fn remeasure(state: &mut ViewerState) {
    if let Some(geometry) = web_bridge::read_geometry(VIEWPORT_ID, IMAGE_ID) {
        state.update_geometry(geometry);
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| ViewerState::new(ViewerConfig::default()));

    // ─── Run discovery, once on mount ───
    use_future(move || async move {
        let config = state.config.peek().clone();
        let urls = UrlBuilder::from_config(&config);
        let today = chrono::Utc::now().date_naive();
        let result = discover_runs(&ImageProber, &urls, today, config.max_runs)
            .await
            .and_then(Navigator::new);
        match result {
            Ok(navigator) => state.start_session(navigator.with_max_offset(config.max_offset)),
            Err(err) => state.fail_session(err),
        }
    });

    let image_url = use_memo(move || {
        let urls = UrlBuilder::from_config(&state.config.read());
        state.navigator.read().as_ref().map(|n| n.current_url(&urls))
    });

    // ─── Image request bookkeeping: delayed spinner per generation ───
    use_effect(move || {
        let Some(url) = image_url() else {
            return;
        };
        debug!("Loading {}", url);
        let ticket = state.loads.write().begin(&url);
        let delay = state.config.peek().loading_delay_ms;
        let loads = state.loads;
        let mut spinner = state.show_spinner;
        spawn(async move {
            web_bridge::sleep_ms(delay).await;
            if loads.peek().is_pending(ticket) {
                spinner.set(true);
            }
        });
    });

    let mut on_image_settled = move |loaded: bool| {
        let Some(src) = web_bridge::image_current_src(IMAGE_ID) else {
            return;
        };
        if !state.loads.write().finish_src(&src) {
            debug!("Ignoring completion of overtaken request {}", src);
            return;
        }
        state.show_spinner.set(false);
        if loaded {
            remeasure(&mut state);
        } else {
            warn!("Image not available: {}", src);
        }
    };

    let on_key = move |evt: Event<KeyboardData>| {
        let ctx = KeyContext {
            hotspot: state.in_hotspot_mode(),
            help_open: *state.help_open.peek(),
            fatal: state.error.peek().is_some(),
        };
        let Some(command) = key_command(&evt.key().to_string(), ctx) else {
            return;
        };
        match command {
            KeyCommand::Offset(delta) => {
                state.change_offset(delta);
            }
            KeyCommand::Altitude(direction) => {
                state.change_altitude(direction);
            }
            KeyCommand::ToggleHotspot => {
                state.toggle_hotspot();
            }
            KeyCommand::OpenHelp => state.help_open.set(true),
            KeyCommand::CloseHelp => state.help_open.set(false),
            KeyCommand::Swallow => {}
        }
        evt.prevent_default();
    };

    let on_touch_start = move |evt: Event<TouchData>| {
        let touches = touch_points(&evt.touches());
        state.swipe.write().touch_start(&touches);
        if let [a, b] = touches[..] {
            state.pinch.write().begin(a, b);
        }
    };

    let on_touch_move = move |evt: Event<TouchData>| {
        let touches = touch_points(&evt.touches());
        let suppress_scroll = state.swipe.write().touch_move(touches.len());
        if let [a, b] = touches[..] {
            evt.prevent_default();
            let geometry = *state.geometry.peek();
            state.pinch.write().update(a, b, &geometry);
        } else if suppress_scroll {
            evt.prevent_default();
        }
    };

    let on_touch_end = move |evt: Event<TouchData>| {
        let remaining = evt.touches().len();
        let lifted = touch_points(&evt.touches_changed()).first().copied();
        state.pinch.write().end(remaining);
        let hotspot = state.in_hotspot_mode();
        let action = state.swipe.write().touch_end(remaining, lifted, hotspot);
        if let Some(action) = action {
            if matches!(action, SwipeAction::Tap(_)) && !hotspot {
                return;
            }
            let origin = web_bridge::client_origin(VIEWPORT_ID).unwrap_or_default();
            state.apply_swipe(action, origin);
        }
    };

    let on_touch_cancel = move |_: Event<TouchData>| {
        state.swipe.write().touch_cancel();
        state.pinch.write().end(0);
    };

    // ─── Render ───
    let strings = state.language.read().strings();
    let notice = state.error.read().as_ref().map(|err| match err {
        ViewerError::NoForecastAvailable => strings.no_forecast.to_string(),
        other => other.to_string(),
    });
    let transform_css = state.pinch.read().transform().css();

    rsx! {
        div {
            tabindex: "0",
            style: "position: fixed; inset: 0; display: flex; flex-direction: column; background: #111; outline: none; font-family: system-ui, -apple-system, sans-serif;",
            onmounted: move |evt| async move {
                if let Err(e) = evt.set_focus(true).await {
                    debug!("Could not focus viewer root: {:?}", e);
                }
            },
            onkeydown: on_key,

            if let Some(message) = notice {
                ErrorDisplay { message }
            }

            Toolbar {}
            ForecastHeader {}

            div {
                id: VIEWPORT_ID,
                style: "position: relative; flex: 1; overflow: hidden; touch-action: none;",
                onresize: move |_| remeasure(&mut state),
                ontouchstart: on_touch_start,
                ontouchmove: on_touch_move,
                ontouchend: on_touch_end,
                ontouchcancel: on_touch_cancel,

                if let Some(url) = image_url() {
                    img {
                        id: IMAGE_ID,
                        src: "{url}",
                        draggable: "false",
                        style: "width: 100%; height: 100%; object-fit: contain; transform-origin: center center; transform: {transform_css}; user-select: none;",
                        onload: move |_| on_image_settled(true),
                        onerror: move |_| on_image_settled(false),
                    }
                }

                HotspotOverlay {}

                if (state.discovering)() || (state.show_spinner)() {
                    LoadingSpinner {}
                }

                if state.navigator.read().is_some() {
                    NavArrows {}
                }
            }

            HelpOverlay {}
        }
    }
}
