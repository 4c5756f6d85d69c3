use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `PHISHSIM__` and a `__` section separator.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_instance_id")]
    pub instance_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

/// Raw external-store settings as provided by the environment. Both values
/// must be non-empty for the connected path to activate; the gateway runs
/// on sample data otherwise. Resolution into a connected/unconfigured mode
/// happens once at startup, not per call.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub service_key: String,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

// Default functions
fn default_instance_id() -> String {
    "phishsim-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_connect_timeout_ms() -> u64 {
    5000
}
fn default_metrics_port() -> u16 {
    9091
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            instance_id: default_instance_id(),
            api: ApiConfig::default(),
            store: StoreSettings::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl StoreSettings {
    /// True when both the endpoint and the access key are present.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.service_key.trim().is_empty()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("PHISHSIM")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
