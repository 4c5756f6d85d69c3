use phishsim_core::config::StoreSettings;
use tracing::warn;
use url::Url;

/// Resolved store mode. Decided once at startup from [`StoreSettings`] and
/// threaded through explicitly; no per-call environment checks.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Connected { endpoint: Url, service_key: String },
    Unconfigured,
}

impl StoreConfig {
    /// Resolve the raw settings into a mode. The connected path activates
    /// only when both the endpoint and the access key are present; a
    /// malformed endpoint is treated as unconfigured rather than an error.
    pub fn resolve(settings: &StoreSettings) -> Self {
        if !settings.is_configured() {
            return StoreConfig::Unconfigured;
        }
        match Url::parse(settings.url.trim()) {
            Ok(endpoint) => StoreConfig::Connected {
                endpoint,
                service_key: settings.service_key.trim().to_string(),
            },
            Err(e) => {
                warn!(error = %e, url = %settings.url, "Store endpoint is not a valid URL, running on sample data");
                StoreConfig::Unconfigured
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, StoreConfig::Connected { .. })
    }

    /// Label surfaced to the dashboard so it can warn when the app is
    /// running on sample data.
    pub fn mode_label(&self) -> &'static str {
        match self {
            StoreConfig::Connected { .. } => "connected",
            StoreConfig::Unconfigured => "sample-data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: &str, key: &str) -> StoreSettings {
        StoreSettings {
            url: url.into(),
            service_key: key.into(),
            connect_timeout_ms: 5000,
        }
    }

    #[test]
    fn test_resolve_connected() {
        let config = StoreConfig::resolve(&settings("https://project.example.co", "svc-key"));
        assert!(config.is_connected());
        assert_eq!(config.mode_label(), "connected");
    }

    #[test]
    fn test_resolve_missing_either_value() {
        assert!(!StoreConfig::resolve(&settings("https://project.example.co", "")).is_connected());
        assert!(!StoreConfig::resolve(&settings("", "svc-key")).is_connected());
        assert!(!StoreConfig::resolve(&settings("", "")).is_connected());
    }

    #[test]
    fn test_resolve_malformed_url_falls_back() {
        let config = StoreConfig::resolve(&settings("not a url", "svc-key"));
        assert!(!config.is_connected());
        assert_eq!(config.mode_label(), "sample-data");
    }
}
