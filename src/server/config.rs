//! Environment configuration.
//!
//! Runtime toggles such as company restrictions live in the host's `settings` table and are
//! read per request; this module only covers what is needed to boot the service.

use crate::server::error::config::ConfigError;

pub static DEFAULT_VATSIM_FEED_URL: &str = "https://data.vatsim.net/v3/vatsim-data.json";
pub static DEFAULT_IVAO_FEED_URL: &str = "https://api.ivao.aero/v2/tracker/whazzup";
pub static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Number of matched flights/PIREPs at which detailed map popups are switched off.
pub const DEFAULT_POPUP_THRESHOLD: usize = 1000;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub listen_addr: String,
    pub user_agent: String,
    pub vatsim_feed_url: String,
    pub ivao_feed_url: String,
    pub popup_threshold: usize,
    pub assignments_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            listen_addr: optional("LISTEN_ADDR")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            user_agent: optional("USER_AGENT")
                .unwrap_or_else(|| format!("flightdeck/{}", env!("CARGO_PKG_VERSION"))),
            vatsim_feed_url: optional("VATSIM_FEED_URL")
                .unwrap_or_else(|| DEFAULT_VATSIM_FEED_URL.to_string()),
            ivao_feed_url: optional("IVAO_FEED_URL")
                .unwrap_or_else(|| DEFAULT_IVAO_FEED_URL.to_string()),
            popup_threshold: match optional("MAP_POPUP_THRESHOLD") {
                Some(value) => parse_threshold(&value)?,
                None => DEFAULT_POPUP_THRESHOLD,
            },
            assignments_enabled: match optional("ASSIGNMENTS_ENABLED") {
                Some(value) => parse_flag("ASSIGNMENTS_ENABLED", &value)?,
                None => false,
            },
        })
    }
}

/// Options the request handlers need from the environment configuration.
#[derive(Clone, Debug)]
pub struct ServiceOptions {
    pub vatsim_feed_url: String,
    pub ivao_feed_url: String,
    pub popup_threshold: usize,
    pub assignments_enabled: bool,
}

impl From<&Config> for ServiceOptions {
    fn from(config: &Config) -> Self {
        Self {
            vatsim_feed_url: config.vatsim_feed_url.clone(),
            ivao_feed_url: config.ivao_feed_url.clone(),
            popup_threshold: config.popup_threshold,
            assignments_enabled: config.assignments_enabled,
        }
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn parse_threshold(value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(threshold) if threshold > 0 => Ok(threshold),
        Ok(_) => Err(ConfigError::InvalidEnvValue {
            var: "MAP_POPUP_THRESHOLD".to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: "MAP_POPUP_THRESHOLD".to_string(),
            reason: e.to_string(),
        }),
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}
