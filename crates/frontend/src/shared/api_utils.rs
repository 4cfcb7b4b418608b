//! API utilities for frontend-backend communication
//!
//! The backend origin comes from the embedded client config with build-time
//! overrides (`DEGREE_COMPASS_BACKEND_URL`, `DEGREE_COMPASS_BACKEND_PORT`).

use contracts::shared::config::ClientConfig;
use once_cell::sync::Lazy;

static CONFIG: Lazy<ClientConfig> = Lazy::new(|| {
    ClientConfig::load(
        option_env!("DEGREE_COMPASS_BACKEND_URL"),
        option_env!("DEGREE_COMPASS_BACKEND_PORT"),
    )
    .unwrap_or_else(|e| {
        log::error!("Falling back to default client config: {:#}", e);
        ClientConfig::default()
    })
});

/// Client configuration for the running bundle.
pub fn client_config() -> &'static ClientConfig {
    &CONFIG
}

/// Get the base URL for API requests
///
/// Uses the configured origin, or the current page's protocol and hostname
/// combined with the configured backend port.
///
/// # Example
/// ```ignore
/// let url = format!("{}/api/majors/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    let location = web_sys::window().map(|w| w.location());
    let parts = location.as_ref().map(|location| {
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        (protocol, hostname)
    });
    CONFIG.backend_origin(parts.as_ref().map(|(p, h)| (p.as_str(), h.as_str())))
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
