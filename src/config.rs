//! Site configuration, read from the process environment.
//!
//! Lookup order per key: process environment (including a `.env` file that
//! `main` loads on native builds), then the bundled `assets/config.env`, then
//! the built-in default.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Bundled config, also the only source on wasm where there is no process environment.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_BOOKING_EMAIL: &str = "ehsanmohajer.fi@gmail.com";
pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(250);
pub const DEFAULT_PROMPT_DELAY: Duration = Duration::from_millis(200);

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Address the booking form's mailto link is sent to.
    pub booking_email: String,
    /// Storage key holding the theme preference.
    pub theme_key: String,
    /// Delay before the bot answers a typed question.
    pub reply_delay: Duration,
    /// Delay before the bot answers a quick-prompt button.
    pub prompt_delay: Duration,
    /// Native stand-in for the browser's `prefers-color-scheme: dark`.
    pub prefers_dark: bool,
    pub log_level: tracing::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            booking_email: DEFAULT_BOOKING_EMAIL.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            reply_delay: DEFAULT_REPLY_DELAY,
            prompt_delay: DEFAULT_PROMPT_DELAY,
            prefers_dark: false,
            log_level: tracing::Level::INFO,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(email) = non_empty(lookup("PORTFOLIO_BOOKING_EMAIL")) {
            config.booking_email = email;
        }
        if let Some(key) = non_empty(lookup("PORTFOLIO_THEME_KEY")) {
            config.theme_key = key;
        }
        if let Some(raw) = non_empty(lookup("PORTFOLIO_REPLY_DELAY_MS")) {
            config.reply_delay = parse_millis(&raw).context("PORTFOLIO_REPLY_DELAY_MS")?;
        }
        if let Some(raw) = non_empty(lookup("PORTFOLIO_PROMPT_DELAY_MS")) {
            config.prompt_delay = parse_millis(&raw).context("PORTFOLIO_PROMPT_DELAY_MS")?;
        }
        if let Some(raw) = non_empty(lookup("PORTFOLIO_PREFERS_DARK")) {
            config.prefers_dark = parse_flag(&raw);
        }
        if let Some(raw) = non_empty(lookup("PORTFOLIO_LOG")) {
            config.log_level = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid log level: {raw}"))
                .context("PORTFOLIO_LOG")?;
        }

        Ok(config)
    }

    /// Like [`SiteConfig::from_lookup`], but an invalid value is logged and
    /// the whole config falls back to defaults.
    pub fn from_lookup_or_default(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup(lookup).unwrap_or_else(|err| {
            tracing::warn!("invalid site configuration, using defaults: {err:#}");
            Self::default()
        })
    }
}

/// Log level for the subscriber installed at startup. Reads only `PORTFOLIO_LOG`
/// so the rest of the config is resolved after logging is up.
pub fn startup_log_level() -> tracing::Level {
    log_level_from(env_lookup)
}

fn log_level_from(lookup: impl Fn(&str) -> Option<String>) -> tracing::Level {
    non_empty(lookup("PORTFOLIO_LOG"))
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(tracing::Level::INFO)
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok().or_else(|| bundled_value(key))
}

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| SiteConfig::from_lookup_or_default(env_lookup));

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

fn bundled_value(key: &str) -> Option<String> {
    BUNDLED_CONFIG.lines().find_map(|line| {
        let line = line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (name, value) = line.split_once('=')?;
        (name.trim() == key).then(|| value.trim().to_string())
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_millis(raw: &str) -> Result<Duration> {
    let millis: u64 = raw
        .parse()
        .with_context(|| format!("expected milliseconds, got '{raw}'"))?;
    Ok(Duration::from_millis(millis))
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
