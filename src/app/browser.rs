//! Thin wrappers over browser APIs. Everything here touches `window()` and
//! must only be called from event handlers, effects, or animation loops.

use js_sys::{Function, Reflect};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::effects::Viewport;

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

pub fn window_viewport() -> Viewport {
    let w = window();
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height)
}

/// Document height and viewport height, for the header progress bar.
pub fn page_metrics() -> (f64, f64) {
    let doc_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    (doc_height, window_viewport().height)
}

pub fn scroll_to_section(id: &str) {
    match document().get_element_by_id(id) {
        Some(el) => el.scroll_into_view(),
        None => log::debug!("no section with id {id}"),
    }
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

/// Sizes the canvas backing store to the viewport and returns its 2d context.
pub fn fit_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) -> Option<CanvasRenderingContext2d> {
    let (width, height) = (viewport.width as u32, viewport.height as u32);
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Looks up a global constructor by any of its (possibly vendor-prefixed) names.
pub fn global_constructor(names: &[&str]) -> Option<Function> {
    let global: JsValue = window().into();
    names.iter().find_map(|name| {
        Reflect::get(&global, &JsValue::from_str(name))
            .ok()
            .filter(|v| v.is_function())
            .map(|v| v.unchecked_into::<Function>())
    })
}

pub fn call_method(target: &JsValue, name: &str) -> Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Function>()?
        .call0(target)
}
