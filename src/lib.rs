pub mod bounds;
pub mod converter;
pub mod error;
pub mod filter;
pub mod model;
pub mod options;
pub mod parser;
pub mod render;
pub mod selection;
pub mod summary;
pub mod viewer;
pub mod web;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::options::{RenderOptions, ViewerOptions};
use crate::render::Provider;
use crate::selection::ItemKind;
use crate::viewer::Viewer;
use crate::web::{DomHost, with_viewer};

/// Parse a GPX string into the document model, returned as a JS object.
#[wasm_bindgen(js_name = parseGpx)]
pub fn parse_gpx(gpx_string: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let doc = parser::parse_gpx(gpx_string)?;
    to_js(&doc)
}

/// Convert GPX string to GeoJSON, returned as a JS object.
#[wasm_bindgen(js_name = gpxToGeoJson)]
pub fn gpx_to_geojson(gpx_string: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let doc = parser::parse_gpx(gpx_string)?;
    to_js(&converter::to_feature_collection(&doc))
}

/// Convert GPX string to GeoJSON, returned as a JSON string.
#[wasm_bindgen(js_name = gpxToGeoJsonString)]
pub fn gpx_to_geojson_string(gpx_string: &str) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let doc = parser::parse_gpx(gpx_string)?;
    serde_json::to_string(&converter::to_feature_collection(&doc))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Create the page's viewer and start loading the configured map provider.
/// Any previously started viewer is replaced.
#[wasm_bindgen(js_name = startViewer)]
pub fn start_viewer(options: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let opts: ViewerOptions = parse_options(options)?;
    init_logging(opts.log_level());
    let provider = opts.provider;
    web::install(Viewer::new(DomHost::new(opts), provider));
    viewer(|v| v.start())
}

/// Load a GPX file's text into the viewer and return the sidebar summary.
/// A file that is not GPX clears the viewer and rejects.
#[wasm_bindgen(js_name = loadGpx)]
pub fn load_gpx(gpx_string: &str) -> Result<JsValue, JsValue> {
    let summary = viewer(|v| {
        v.load(gpx_string)?;
        Ok::<_, JsValue>(v.summary())
    })??;
    to_js(&summary)
}

/// Summary of the loaded document, or `null` when nothing is loaded.
#[wasm_bindgen(js_name = documentSummary)]
pub fn document_summary() -> Result<JsValue, JsValue> {
    let summary = viewer(|v| v.summary())?;
    to_js(&summary)
}

/// Toggle one row and return the new header checkbox state for its table.
#[wasm_bindgen(js_name = setItemSelected)]
pub fn set_item_selected(kind: JsValue, index: usize, selected: bool) -> Result<JsValue, JsValue> {
    let kind: ItemKind = from_js(kind)?;
    let header = viewer(|v| {
        v.set_selected(kind, index, selected);
        v.selection().header_state(kind)
    })?;
    to_js(&header)
}

/// Select or clear a whole table.
#[wasm_bindgen(js_name = setAllSelected)]
pub fn set_all_selected(kind: JsValue, selected: bool) -> Result<JsValue, JsValue> {
    let kind: ItemKind = from_js(kind)?;
    let header = viewer(|v| {
        v.set_all_selected(kind, selected);
        v.selection().header_state(kind)
    })?;
    to_js(&header)
}

/// Header checkbox state for one table.
#[wasm_bindgen(js_name = headerState)]
pub fn header_state(kind: JsValue) -> Result<JsValue, JsValue> {
    let kind: ItemKind = from_js(kind)?;
    let header = viewer(|v| v.selection().header_state(kind))?;
    to_js(&header)
}

/// Redraw the current selection, optionally refitting the viewport.
#[wasm_bindgen]
pub fn redraw(options: JsValue) -> Result<(), JsValue> {
    let opts: RenderOptions = parse_options(options)?;
    viewer(|v| v.redraw(opts))
}

/// Centre the map on one row of the unfiltered document.
#[wasm_bindgen(js_name = panToItem)]
pub fn pan_to_item(kind: JsValue, index: usize) -> Result<(), JsValue> {
    let kind: ItemKind = from_js(kind)?;
    viewer(|v| v.pan_to_item(kind, index))
}

/// Switch to `"naver"` or `"kakao"`. Resolves to false if it was already active.
#[wasm_bindgen(js_name = switchProvider)]
pub fn switch_provider(provider: JsValue) -> Result<bool, JsValue> {
    let provider: Provider = from_js(provider)?;
    viewer(|v| v.switch_provider(provider))
}

/// The currently visible items as GeoJSON, or `null` when nothing is loaded.
#[wasm_bindgen(js_name = filteredGeoJson)]
pub fn filtered_geojson() -> Result<JsValue, JsValue> {
    let fc = viewer(|v| v.filtered().map(|doc| converter::to_feature_collection(&doc)))?;
    to_js(&fc)
}

fn viewer<R>(f: impl FnOnce(&mut Viewer<DomHost>) -> R) -> Result<R, JsValue> {
    with_viewer(f).ok_or_else(|| JsValue::from_str("viewer not started; call startViewer first"))
}

fn parse_options<T: DeserializeOwned + Default>(options: JsValue) -> Result<T, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(T::default())
    } else {
        from_js(options)
    }
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Plain JS objects and arrays rather than `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn init_logging(level: log::Level) {
    // Only the first call installs the logger.
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(level: log::Level) {
    log::set_max_level(level.to_level_filter());
}
