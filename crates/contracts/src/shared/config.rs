use anyhow::{bail, Context};
use serde::Deserialize;

/// Client configuration, parsed from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Origin of the API, e.g. `http://localhost`. Derived from the page
    /// location when absent. A port written in the URL wins over `port`.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_port")]
    pub port: Option<u16>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            port: default_port(),
        }
    }
}

fn default_port() -> Option<u16> {
    Some(8000)
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ListingConfig {
    pub page_size: u32,
    pub related_page_size: u32,
    pub search_debounce_ms: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: 18,
            related_page_size: 12,
            search_debounce_ms: 300,
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[backend]
port = 8000

[listing]
page_size = 18
related_page_size = 12
search_debounce_ms = 300
"#;

impl ClientConfig {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let config: ClientConfig = toml::from_str(raw).context("invalid client config")?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded defaults with optional build-time overrides applied.
    pub fn load(url_override: Option<&str>, port_override: Option<&str>) -> anyhow::Result<Self> {
        let mut config = Self::from_toml_str(DEFAULT_CONFIG)?;
        config.apply_overrides(url_override, port_override)?;
        Ok(config)
    }

    pub fn apply_overrides(
        &mut self,
        url: Option<&str>,
        port: Option<&str>,
    ) -> anyhow::Result<()> {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.backend.url = Some(url.to_string());
        }
        if let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) {
            let port: u16 = port
                .parse()
                .with_context(|| format!("invalid backend port: {port}"))?;
            self.backend.port = Some(port);
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.listing.page_size == 0 {
            bail!("listing.page_size must be at least 1");
        }
        if self.listing.related_page_size == 0 {
            bail!("listing.related_page_size must be at least 1");
        }
        Ok(())
    }

    /// Origin all API paths are appended to.
    ///
    /// `location` is the `(protocol, hostname)` of the current page, used
    /// when no URL is configured. Without either an empty string is returned
    /// and requests go to the serving origin.
    pub fn backend_origin(&self, location: Option<(&str, &str)>) -> String {
        let port = self.backend.port.map(|p| format!(":{p}")).unwrap_or_default();
        match (&self.backend.url, location) {
            (Some(url), _) => {
                let url = url.trim_end_matches('/');
                if has_explicit_port(url) {
                    url.to_string()
                } else {
                    format!("{url}{port}")
                }
            }
            (None, Some((protocol, hostname))) => format!("{protocol}//{hostname}{port}"),
            (None, None) => String::new(),
        }
    }
}

/// True when the authority part of `url` already carries `:port`.
fn has_explicit_port(url: &str) -> bool {
    let rest = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let authority = rest.split('/').next().unwrap_or_default();
    // skip the brackets of an IPv6 literal
    let host_end = authority.rfind(']').map(|i| i + 1).unwrap_or(0);
    authority[host_end..].contains(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ClientConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.backend.url, None);
        assert_eq!(config.backend.port, Some(8000));
        assert_eq!(config.listing.page_size, 18);
        assert_eq!(config.listing.search_debounce_ms, 300);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = ClientConfig::from_toml_str("[backend]\nurl = \"http://api.local\"\n").unwrap();
        assert_eq!(config.backend.url.as_deref(), Some("http://api.local"));
        assert_eq!(config.backend.port, Some(8000));
        assert_eq!(config.listing.related_page_size, 12);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(ClientConfig::from_toml_str("[listing]\npage_size = 0\n").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::load(Some("http://10.0.0.2/"), Some("5000")).unwrap();
        assert_eq!(config.backend_origin(None), "http://10.0.0.2:5000");

        let untouched = ClientConfig::load(Some("  "), None).unwrap();
        assert_eq!(untouched.backend.url, None);

        assert!(ClientConfig::load(None, Some("not-a-port")).is_err());
    }

    #[test]
    fn test_origin_from_location() {
        let config = ClientConfig::default();
        assert_eq!(
            config.backend_origin(Some(("https:", "compass.example.com"))),
            "https://compass.example.com:8000"
        );
        assert_eq!(config.backend_origin(None), "");
    }

    #[test]
    fn test_url_with_port_is_not_given_a_second_one() {
        let config = ClientConfig::load(Some("http://api.local:9000/"), None).unwrap();
        assert_eq!(config.backend_origin(None), "http://api.local:9000");

        let config = ClientConfig::load(Some("http://[::1]:9000"), Some("5000")).unwrap();
        assert_eq!(config.backend_origin(None), "http://[::1]:9000");

        let config = ClientConfig::load(Some("http://[::1]"), None).unwrap();
        assert_eq!(config.backend_origin(None), "http://[::1]:8000");
    }
}
