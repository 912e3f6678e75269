// src/context.rs

pub const APP_ID: &str = "lexiform";

/// Default base URL of the document service in local development.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct AppCtx {
    pub service_base_url: String,
    pub debug_ui: bool,
}

impl AppCtx {
    pub fn new(service_base_url: impl Into<String>) -> Self {
        let debug_ui = std::env::var("LEXIFORM_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            service_base_url: service_base_url.into(),
            debug_ui,
        }
    }

    /// Base URL from `LEXIFORM_SERVICE_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        let url =
            std::env::var("LEXIFORM_SERVICE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.into());
        Self::new(url)
    }
}

impl Default for AppCtx {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_URL)
    }
}
