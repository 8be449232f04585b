use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::render::Provider;

/// The only structured parse failure. Unparseable XML and XML with a
/// root other than <gpx> are deliberately not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("not a GPX document")]
    NotGpx,
}

/// A map backend could not be brought up. Never fatal: reported to the
/// placeholder area while the loaded document stays in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("{0} map: no credentials configured")]
    MissingCredentials(Provider),
    #[error("{0} map: SDK is not available")]
    SdkUnavailable(Provider),
    #[error("{provider} map: {message}")]
    Sdk { provider: Provider, message: String },
}

impl BackendError {
    pub fn provider(&self) -> Provider {
        match self {
            Self::MissingCredentials(p) | Self::SdkUnavailable(p) => *p,
            Self::Sdk { provider, .. } => *provider,
        }
    }

    pub(crate) fn from_js(provider: Provider, value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Sdk { provider, message }
    }
}

impl From<ParseError> for JsValue {
    fn from(e: ParseError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

impl From<BackendError> for JsValue {
    fn from(e: BackendError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
