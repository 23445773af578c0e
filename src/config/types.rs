use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub backend: BackendConfig,
}

/// Country-data provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the REST country-data provider.
    pub base_url: String,
    /// Connect timeout in seconds.
    pub connect_timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://restcountries.com/v3.1".to_string(),
            connect_timeout_seconds: 10,
        }
    }
}

/// Auth/favorites backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the auth/favorites backend.
    pub base_url: String,
    /// Connect timeout in seconds.
    pub connect_timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5002/api".to_string(),
            connect_timeout_seconds: 5,
        }
    }
}
