use js_sys::{Array, Object};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::error::BackendError;
use crate::render::naver::NaverApi;
use crate::render::{DASH_STYLE, Provider, Stroke, WaypointLabel};

use super::{JsOptions, global_value, label_element};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    #[derive(Clone)]
    pub type LatLng;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"])]
    fn new(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    type LatLngBounds;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"])]
    fn new(south_west: &LatLng, north_east: &LatLng) -> LatLngBounds;

    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    #[derive(Clone)]
    pub type Map;

    #[wasm_bindgen(constructor, catch, js_namespace = ["naver", "maps"])]
    fn new(container: &HtmlElement, options: &Object) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &Map, bounds: &LatLngBounds, margin: &Object);

    #[wasm_bindgen(method, js_name = setCenter)]
    fn set_center(this: &Map, center: &LatLng);

    #[wasm_bindgen(method, js_name = setZoom)]
    fn set_zoom(this: &Map, zoom: u8, use_effect: bool);

    #[wasm_bindgen(method)]
    fn destroy(this: &Map);

    /// Anything with `setMap`: polylines and markers.
    pub type Overlay;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &Overlay, map: &JsValue);

    #[wasm_bindgen(js_namespace = ["naver", "maps"], extends = Overlay)]
    type Polyline;

    #[wasm_bindgen(constructor, catch, js_namespace = ["naver", "maps"])]
    fn new(options: &Object) -> Result<Polyline, JsValue>;

    #[wasm_bindgen(js_namespace = ["naver", "maps"], extends = Overlay)]
    type Marker;

    #[wasm_bindgen(constructor, catch, js_namespace = ["naver", "maps"])]
    fn new(options: &Object) -> Result<Marker, JsValue>;
}

fn sdk_error(e: JsValue) -> BackendError {
    BackendError::from_js(Provider::Naver, e)
}

/// `naver.maps` bound to one map container element.
pub struct JsNaver {
    container: HtmlElement,
}

impl JsNaver {
    /// Fails unless the SDK script has defined `naver.maps`.
    pub fn new(container: HtmlElement) -> Result<Self, BackendError> {
        if global_value(&["naver", "maps"]).is_none() {
            return Err(BackendError::SdkUnavailable(Provider::Naver));
        }
        Ok(Self { container })
    }
}

impl NaverApi for JsNaver {
    type LatLng = LatLng;
    type Map = Map;
    type Overlay = Overlay;

    fn lat_lng(&self, lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng)
    }

    fn create_map(&self, center: LatLng, zoom: u8) -> Result<Map, BackendError> {
        let options = JsOptions::new()
            .set("center", center)
            .set("zoom", zoom)
            .build();
        Map::new(&self.container, &options).map_err(sdk_error)
    }

    fn polyline(
        &self,
        map: &Map,
        path: Vec<LatLng>,
        stroke: &Stroke,
    ) -> Result<Overlay, BackendError> {
        let path: Array = path.into_iter().collect();
        let mut options = JsOptions::new()
            .set("map", map.clone())
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

    fn label_marker(
        &self,
        map: &Map,
        position: LatLng,
        label: &WaypointLabel,
    ) -> Result<Overlay, BackendError> {
        let content = label_element(label).map_err(sdk_error)?;
        let icon = JsOptions::new().set("content", content).build();
        let options = JsOptions::new()
            .set("map", map.clone())
            .set("position", position)
            .set("icon", icon)
            .build();
        Marker::new(&options).map(Overlay::from).map_err(sdk_error)
    }

    fn detach(&self, overlay: &Overlay) {
        overlay.set_map(&JsValue::NULL);
    }

    fn fit_bounds(&self, map: &Map, south_west: LatLng, north_east: LatLng, padding: u32) {
        let bounds = LatLngBounds::new(&south_west, &north_east);
        let margin = JsOptions::new()
            .set("top", padding)
            .set("right", padding)
            .set("bottom", padding)
            .set("left", padding)
            .build();
        map.fit_bounds(&bounds, &margin);
    }

    fn set_center(&self, map: &Map, center: LatLng) {
        map.set_center(&center);
    }

    fn set_zoom(&self, map: &Map, zoom: u8) {
        map.set_zoom(zoom, true);
    }

    fn destroy(&self, map: Map) {
        map.destroy();
    }
}
