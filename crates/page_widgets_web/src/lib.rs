//! [`page_widgets`] bindings for web pages (compiling to WASM).
//!
//! Call [`start`] (or the exported `startPageWidgets` from JavaScript) once the
//! document has loaded. The widgets whose elements are present are bound, and
//! stay bound until [`PageRunner::destroy`] is called.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![allow(clippy::missing_errors_doc)] // So many `-> Result<_, JsValue>`

#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod runner;
#[cfg(target_arch = "wasm32")]
mod surface;
#[cfg(any(target_arch = "wasm32", test))]
mod web_logger;

#[cfg(target_arch = "wasm32")]
pub use runner::PageRunner;
#[cfg(target_arch = "wasm32")]
pub use surface::WebSurface;
#[cfg(target_arch = "wasm32")]
pub use web_logger::WebLogger;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub(crate) fn string_from_js_value(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:#?}"))
}

/// Bind the widgets described by `options` to the current document.
#[cfg(target_arch = "wasm32")]
pub fn start(options: &page_widgets::PageOptions) -> Result<PageRunner, JsValue> {
    let runner = PageRunner::new(options)?;
    log::debug!("page widgets started");
    Ok(runner)
}

/// Bind the widgets with their default element ids.
///
/// Installs a [`WebLogger`] at `Warn` level if no logger is set yet.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = startPageWidgets)]
pub fn start_page_widgets() -> Result<PageRunner, JsValue> {
    WebLogger::init(log::LevelFilter::Warn).ok();
    start(&page_widgets::PageOptions::default())
}

/// Bind the widgets with options parsed from JSON, e.g. `{ "drawer": { "breakpoint": 1024 } }`.
///
/// Missing fields keep their defaults.
#[cfg(all(target_arch = "wasm32", feature = "json"))]
#[wasm_bindgen(js_name = startPageWidgetsWithJson)]
pub fn start_with_json(json: &str) -> Result<PageRunner, JsValue> {
    WebLogger::init(log::LevelFilter::Warn).ok();
    let options: page_widgets::PageOptions = serde_json::from_str(json)
        .map_err(|err| JsValue::from_str(&format!("invalid page widget options: {err}")))?;
    start(&options)
}
