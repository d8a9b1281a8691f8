//! Server configuration.

use serde::Deserialize;

/// Default upstream holiday source.
const DEFAULT_HOLIDAY_URL: &str = "https://content.capta.co/Recruitment/WorkingDays.json";

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Upstream holiday API URL.
    #[serde(default = "default_holiday_url")]
    pub holiday_url: String,
}

fn default_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_holiday_url() -> String {
    DEFAULT_HOLIDAY_URL.to_string()
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let addr = std::env::var("WORKDAY_ADDR").unwrap_or_else(|_| default_addr());
        let holiday_url =
            std::env::var("WORKDAY_HOLIDAY_URL").unwrap_or_else(|_| default_holiday_url());
        Self { addr, holiday_url }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            holiday_url: default_holiday_url(),
        }
    }
}
