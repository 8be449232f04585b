use serde::Deserialize;

use crate::error::BackendError;
use crate::render::Provider;

/// Options for a single render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Move the viewport to the document bounds after drawing (default: true)
    #[serde(default = "default_true")]
    pub fit_bounds: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { fit_bounds: true }
    }
}

/// Page-level viewer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerOptions {
    /// Map engine shown on start-up (default: naver)
    #[serde(default)]
    pub provider: Provider,

    /// Naver Cloud Platform map client id
    #[serde(default)]
    pub naver_client_id: String,

    /// Kakao JavaScript app key
    #[serde(default)]
    pub kakao_app_key: String,

    /// `log` level name for the browser console (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            naver_client_id: String::new(),
            kakao_app_key: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl ViewerOptions {
    /// Trimmed credential for `provider`, or the error to report instead.
    pub fn credential(&self, provider: Provider) -> Result<&str, BackendError> {
        let key = match provider {
            Provider::Naver => &self.naver_client_id,
            Provider::Kakao => &self.kakao_app_key,
        }
        .trim();
        if key.is_empty() {
            Err(BackendError::MissingCredentials(provider))
        } else {
            Ok(key)
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
