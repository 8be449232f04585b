use js_sys::{Array, Function, Object};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::error::BackendError;
use crate::render::kakao::KakaoApi;
use crate::render::{DASH_STYLE, Provider, Stroke, WaypointLabel};

use super::{JsOptions, global_value, label_element};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    #[derive(Clone)]
    pub type LatLng;

    #[wasm_bindgen(constructor, js_namespace = ["kakao", "maps"])]
    fn new(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    type LatLngBounds;

    #[wasm_bindgen(constructor, js_namespace = ["kakao", "maps"])]
    fn new(south_west: &LatLng, north_east: &LatLng) -> LatLngBounds;

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    #[derive(Clone)]
    pub type Map;

    #[wasm_bindgen(constructor, catch, js_namespace = ["kakao", "maps"])]
    fn new(container: &HtmlElement, options: &Object) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setBounds)]
    fn set_bounds(this: &Map, bounds: &LatLngBounds, top: u32, right: u32, bottom: u32, left: u32);

    #[wasm_bindgen(method, js_name = setCenter)]
    fn set_center(this: &Map, center: &LatLng);

    #[wasm_bindgen(method, js_name = setLevel)]
    fn set_level(this: &Map, level: u8);

    /// Polylines and custom overlays.
    pub type Overlay;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &Overlay, map: &JsValue);

    #[wasm_bindgen(js_namespace = ["kakao", "maps"], extends = Overlay)]
    type Polyline;

    #[wasm_bindgen(constructor, catch, js_namespace = ["kakao", "maps"])]
    fn new(options: &Object) -> Result<Polyline, JsValue>;

    #[wasm_bindgen(js_namespace = ["kakao", "maps"], extends = Overlay)]
    type CustomOverlay;

    #[wasm_bindgen(constructor, catch, js_namespace = ["kakao", "maps"])]
    fn new(options: &Object) -> Result<CustomOverlay, JsValue>;

    /// With `autoload=false` the SDK finishes loading only after this.
    #[wasm_bindgen(js_namespace = ["kakao", "maps"], js_name = load)]
    fn sdk_load(callback: &Function);
}

fn sdk_error(e: JsValue) -> BackendError {
    BackendError::from_js(Provider::Kakao, e)
}

/// Finish loading the SDK, then run `ready`.
pub(super) fn finish_loading(ready: impl FnOnce() + 'static) -> Result<(), BackendError> {
    let loadable = global_value(&["kakao", "maps", "load"]).is_some_and(|f| f.is_function());
    if !loadable {
        return Err(BackendError::SdkUnavailable(Provider::Kakao));
    }
    let callback = Closure::once_into_js(move || ready());
    sdk_load(callback.unchecked_ref());
    Ok(())
}

/// `kakao.maps` bound to one map container element.
pub struct JsKakao {
    container: HtmlElement,
}

impl JsKakao {
    pub fn new(container: HtmlElement) -> Result<Self, BackendError> {
        if global_value(&["kakao", "maps", "Map"]).is_none() {
            return Err(BackendError::SdkUnavailable(Provider::Kakao));
        }
        Ok(Self { container })
    }
}

impl KakaoApi for JsKakao {
    type LatLng = LatLng;
    type Map = Map;
    type Overlay = Overlay;

    fn lat_lng(&self, lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng)
    }

    fn create_map(&self, center: LatLng, level: u8) -> Result<Map, BackendError> {
        let options = JsOptions::new()
            .set("center", center)
            .set("level", level)
            .build();
        Map::new(&self.container, &options).map_err(sdk_error)
    }

    fn polyline(&self, path: Vec<LatLng>, stroke: &Stroke) -> Result<Overlay, BackendError> {
        let path: Array = path.into_iter().collect();
        let mut options = JsOptions::new()
            .set("path", path)
            .set("strokeColor", stroke.color)
            .set("strokeWeight", stroke.weight)
            .set("strokeOpacity", stroke.opacity);
        if stroke.dashed {
            options = options.set("strokeStyle", DASH_STYLE);
        }
        Polyline::new(&options.build())
            .map(Overlay::from)
            .map_err(sdk_error)
    }

    fn custom_overlay(&self, position: LatLng, label: &WaypointLabel) -> Result<Overlay, BackendError> {
        let content = label_element(label).map_err(sdk_error)?;
        let options = JsOptions::new()
            .set("content", content)
            .set("position", position)
            .build();
        CustomOverlay::new(&options)
            .map(Overlay::from)
            .map_err(sdk_error)
    }

    fn set_map(&self, overlay: &Overlay, map: Option<&Map>) {
        match map {
            Some(map) => overlay.set_map(map),
            None => overlay.set_map(&JsValue::NULL),
        }
    }

    fn set_bounds(&self, map: &Map, south_west: LatLng, north_east: LatLng, padding: u32) {
        let bounds = LatLngBounds::new(&south_west, &north_east);
        map.set_bounds(&bounds, padding, padding, padding, padding);
    }

    fn set_center(&self, map: &Map, center: LatLng) {
        map.set_center(&center);
    }

    fn set_level(&self, map: &Map, level: u8) {
        map.set_level(level);
    }
}
