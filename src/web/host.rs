use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlScriptElement};

use crate::error::BackendError;
use crate::options::ViewerOptions;
use crate::render::kakao::KakaoBackend;
use crate::render::naver::NaverBackend;
use crate::render::{MapBackend, Provider};
use crate::viewer::{MapHost, MapStatus};

use super::kakao::{self, JsKakao};
use super::naver::JsNaver;
use super::{document, global_value, with_viewer};

const MAP_ID: &str = "map";
const MAP_CLASS: &str = "map";
const PLACEHOLDER_ID: &str = "mapPlaceholder";
const HIDDEN_CLASS: &str = "hidden";

const NAVER_SDK: &str = "https://oapi.map.naver.com/openapi/v3/maps.js";
const KAKAO_SDK: &str = "https://dapi.kakao.com/v2/maps/sdk.js";

/// The viewer page: `#map` inside its wrapper, the `#mapPlaceholder`
/// status area and the vendor SDK `<script>` tags.
pub struct DomHost {
    options: ViewerOptions,
}

impl DomHost {
    pub fn new(options: ViewerOptions) -> Self {
        Self { options }
    }
}

impl MapHost for DomHost {
    fn reset_container(&mut self) {
        if let Err(e) = replace_container() {
            warn!("could not replace map container: {e:?}");
        }
    }

    fn request_backend(&mut self, provider: Provider, ticket: u64) {
        let url = match self.options.credential(provider) {
            Ok(key) => sdk_url(provider, key),
            Err(e) => {
                fail_later(ticket, e);
                return;
            }
        };
        if let Err(e) = load_script(&url, provider, ticket) {
            fail_later(ticket, BackendError::from_js(provider, e));
        }
    }

    fn report_status(&mut self, status: &MapStatus) {
        let Some(placeholder) = document()
            .ok()
            .and_then(|d| d.get_element_by_id(PLACEHOLDER_ID))
        else {
            return;
        };
        let ready = matches!(status, MapStatus::Ready(_));
        if !ready {
            placeholder.set_text_content(Some(&status.message()));
        }
        if let Err(e) = placeholder.class_list().toggle_with_force(HIDDEN_CLASS, ready) {
            warn!("could not update map placeholder: {e:?}");
        }
    }
}

fn sdk_url(provider: Provider, key: &str) -> String {
    match provider {
        Provider::Naver => format!("{NAVER_SDK}?ncpKeyId={}", encode(key)),
        Provider::Kakao => format!("{KAKAO_SDK}?appkey={}&autoload=false", encode(key)),
    }
}

fn encode(component: &str) -> String {
    js_sys::encode_uri_component(component).into()
}

/// Failures are delivered from a fresh task so they never re-enter a
/// viewer call that is still on the stack.
fn fail_later(ticket: u64, error: BackendError) {
    spawn_local(async move {
        with_viewer(|v| v.backend_failed(ticket, error));
    });
}

/// Append the SDK `<script>` unless one for the same SDK is already on the
/// page, then build the backend once it has loaded.
fn load_script(url: &str, provider: Provider, ticket: u64) -> Result<(), JsValue> {
    let document = document()?;
    let base = url.split('?').next().unwrap_or(url);
    if let Some(existing) = document.query_selector(&format!("script[src^=\"{base}\"]"))? {
        if sdk_present(provider) {
            debug!("{provider} SDK already on the page");
            spawn_local(async move { sdk_loaded(provider, ticket) });
        } else {
            // Still loading for an earlier request: this request takes over
            // the pending callbacks.
            debug!("{provider} SDK still loading");
            let existing: HtmlScriptElement = existing.dyn_into()?;
            arm(&existing, provider, ticket);
        }
        return Ok(());
    }

    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(url);
    script.set_async(true);
    arm(&script, provider, ticket);
    document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?
        .append_child(&script)?;
    debug!("loading {provider} SDK");
    Ok(())
}

/// Point the script's load and error handlers at `ticket`. A script that
/// failed is removed so the next request inserts a fresh one.
fn arm(script: &HtmlScriptElement, provider: Provider, ticket: u64) {
    let on_load = Closure::once_into_js(move || sdk_loaded(provider, ticket));
    script.set_onload(Some(on_load.unchecked_ref()));
    let failed = script.clone();
    let on_error = Closure::once_into_js(move || {
        failed.remove();
        with_viewer(|v| v.backend_failed(ticket, BackendError::SdkUnavailable(provider)));
    });
    script.set_onerror(Some(on_error.unchecked_ref()));
}

fn sdk_present(provider: Provider) -> bool {
    match provider {
        Provider::Naver => global_value(&["naver", "maps", "Map"]).is_some(),
        Provider::Kakao => global_value(&["kakao", "maps", "load"]).is_some_and(|f| f.is_function()),
    }
}

/// Build the backend for `ticket` unless the viewer has moved on.
fn sdk_loaded(provider: Provider, ticket: u64) {
    if with_viewer(|v| v.is_current(provider, ticket)) != Some(true) {
        debug!("{provider} SDK loaded for stale ticket {ticket}");
        return;
    }
    match provider {
        Provider::Naver => {
            with_viewer(|v| v.complete_request(provider, ticket, build_naver));
        }
        Provider::Kakao => {
            let loading = kakao::finish_loading(move || {
                with_viewer(|v| v.complete_request(provider, ticket, build_kakao));
            });
            if let Err(e) = loading {
                with_viewer(|v| v.backend_failed(ticket, e));
            }
        }
    }
}

fn build_naver() -> Result<Box<dyn MapBackend>, BackendError> {
    let api = JsNaver::new(map_container(Provider::Naver)?)?;
    Ok(Box::new(NaverBackend::initialize(api)?))
}

fn build_kakao() -> Result<Box<dyn MapBackend>, BackendError> {
    let api = JsKakao::new(map_container(Provider::Kakao)?)?;
    Ok(Box::new(KakaoBackend::initialize(api)?))
}

fn map_container(provider: Provider) -> Result<HtmlElement, BackendError> {
    document()
        .ok()
        .and_then(|d| d.get_element_by_id(MAP_ID))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| BackendError::Sdk {
            provider,
            message: format!("no #{MAP_ID} element on the page"),
        })
}

/// Swap `#map` for a new empty element so no vendor DOM or listeners
/// survive a provider switch.
fn replace_container() -> Result<(), JsValue> {
    let document = document()?;
    let old = document
        .get_element_by_id(MAP_ID)
        .ok_or_else(|| JsValue::from_str("no #map element"))?;
    let parent = old
        .parent_node()
        .ok_or_else(|| JsValue::from_str("#map is detached"))?;
    let fresh = document.create_element("div")?;
    fresh.set_id(MAP_ID);
    fresh.set_class_name(MAP_CLASS);
    parent.replace_child(&fresh, &old)?;
    Ok(())
}
