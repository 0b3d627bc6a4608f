use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Default config file, looked up with any extension the `config` crate knows
pub const DEFAULT_CONFIG_PATH: &str = "config/call-intake";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub telephony: TelephonyConfig,
    pub callback: CallbackConfig,
    pub storage: StorageConfig,
    pub sessions: SessionsConfig,
    pub web: WebConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct TelephonyConfig {
    pub api_base: String,
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    /// Caller ID for outbound calls
    pub from_number: Option<String>,
    /// Destination used when `/call-me` is posted without a number
    pub default_to_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CallbackConfig {
    /// Public URL the provider can reach this service on
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    pub log_path: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionsConfig {
    pub idle_ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

impl SessionsConfig {
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        // tokio intervals must be non-zero
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

#[derive(Debug, Deserialize)]
pub struct WebConfig {
    pub public_dir: String,
}

/// Flat environment names used by existing deployments
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("PORT", "service.http.port"),
    ("BASE_URL", "callback.base_url"),
    ("TWILIO_ACCOUNT_SID", "telephony.account_sid"),
    ("TWILIO_AUTH_TOKEN", "telephony.auth_token"),
    ("TWILIO_PHONE_NUMBER", "telephony.from_number"),
    ("TEST_PHONE_NUMBER", "telephony.default_to_number"),
];

impl Config {
    /// Load defaults, then the optional file at `path`, then environment
    ///
    /// Environment variables use the `CALL_INTAKE__SECTION__KEY` form, plus
    /// the flat names in `ENV_OVERRIDES`.
    pub fn load(path: &str) -> Result<Self> {
        Self::load_with_env(path, |name| std::env::var(name).ok())
    }

    fn load_with_env(path: &str, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("service.name", "call-intake")?
            .set_default("service.http.bind", "0.0.0.0")?
            .set_default("service.http.port", 5500)?
            .set_default("telephony.api_base", "https://api.twilio.com")?
            .set_default("callback.base_url", "http://localhost:5500")?
            .set_default("storage.log_path", "logs.json")?
            .set_default("sessions.idle_ttl_secs", 1800)?
            .set_default("sessions.sweep_interval_secs", 60)?
            .set_default("web.public_dir", "public")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("CALL_INTAKE")
                    .prefix_separator("__")
                    .separator("__"),
            );

        for (name, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, env(*name))?;
        }

        let settings = builder
            .build()
            .with_context(|| format!("Failed to load configuration from {}", path))?;

        Ok(settings.try_deserialize()?)
    }
}
