//! Thin wrappers over `web-sys` for the pieces Dioxus does not cover.
//!
//! Everything here degrades quietly outside a browser: probes report
//! "absent", storage reads return the default, geometry reads return `None`.

use aladin_core::i18n::{Language, LANGUAGE_STORAGE_KEY};
use aladin_core::probe::RunProber;
use aladin_core::transform::{Geometry, Point, Size};
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlImageElement, Storage};

/// Probes by loading the URL into a detached `<img>`.
pub struct ImageProber;

impl RunProber for ImageProber {
    async fn exists(&self, url: &str) -> bool {
        probe_image(url).await
    }
}

/// Resolve `true` on the image `load` event, `false` on `error`.
pub async fn probe_image(url: &str) -> bool {
    let Ok(img) = HtmlImageElement::new() else {
        return false;
    };
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_load = Closure::once_into_js({
            let resolve = resolve.clone();
            move || {
                let _ = resolve.call1(&JsValue::NULL, &JsValue::TRUE);
            }
        });
        let on_error = Closure::once_into_js(move || {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::FALSE);
        });
        img.set_onload(Some(on_load.unchecked_ref()));
        img.set_onerror(Some(on_error.unchecked_ref()));
    });
    img.set_src(url);
    let found = JsFuture::from(promise)
        .await
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    img.set_onload(None);
    img.set_onerror(None);
    debug!("Probe {} -> {}", url, found);
    found
}

/// Resolve after `ms` milliseconds on the browser timer queue.
pub async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
                    .is_ok()
            })
            .unwrap_or(false);
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Stored language preference, English if unset or unavailable.
pub fn load_language() -> Language {
    local_storage()
        .and_then(|s| s.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .map(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn store_language(lang: Language) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(LANGUAGE_STORAGE_KEY, lang.code()).is_err() {
        warn!("Could not persist language preference");
    }
}

/// Viewport box and the natural size of the image inside it.
pub fn read_geometry(viewport_id: &str, image_id: &str) -> Option<Geometry> {
    let document = web_sys::window()?.document()?;
    let viewport = document.get_element_by_id(viewport_id)?;
    let image: HtmlImageElement = document.get_element_by_id(image_id)?.dyn_into().ok()?;
    Some(Geometry::new(
        Size::new(viewport.client_width() as f64, viewport.client_height() as f64),
        Size::new(image.natural_width() as f64, image.natural_height() as f64),
    ))
}

/// Top-left corner of an element in client coordinates.
pub fn client_origin(element_id: &str) -> Option<Point> {
    let element = web_sys::window()?.document()?.get_element_by_id(element_id)?;
    let rect = element.get_bounding_client_rect();
    Some(Point::new(rect.left(), rect.top()))
}

/// URL of the resource the image element last selected, `None` if unset.
///
/// Falls back to the `src` attribute when the browser has not filled in
/// `currentSrc` yet.
pub fn image_current_src(image_id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let image: HtmlImageElement = document.get_element_by_id(image_id)?.dyn_into().ok()?;
    let current = image.current_src();
    let src = if current.is_empty() { image.src() } else { current };
    (!src.is_empty()).then_some(src)
}
