//! Base config: typing delay, logging, theme preference path, WhatsApp target. Loaded from env.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use tracing::level_filters::LevelFilter;

/// Runtime settings for the assistant and the site shell around it.
#[derive(Debug, Clone)]
pub struct ChatbotConfig {
    /// CHATBOT_TYPING_MIN_MS
    pub typing_min_ms: u64,
    /// CHATBOT_TYPING_MAX_MS
    pub typing_max_ms: u64,
    /// Log file path
    pub log_file: String,
    /// LOG_CONSOLE_LEVEL: highest level echoed to stdout (`off`, `error`, ..., `trace`)
    pub log_console_level: String,
    /// Persisted light/dark preference (JSON file)
    pub theme_pref_path: String,
    /// Digits-only number the contact form deep-links to
    pub whatsapp_number: String,
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl ChatbotConfig {
    /// Load from environment variables; absent or unparsable values fall back to defaults.
    pub fn load() -> Result<Self> {
        let typing_min_ms = env_u64("CHATBOT_TYPING_MIN_MS", 1000);
        let typing_max_ms = env_u64("CHATBOT_TYPING_MAX_MS", 2000);
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/brelinx.log".to_string());
        let log_console_level =
            env::var("LOG_CONSOLE_LEVEL").unwrap_or_else(|_| "warn".to_string());
        let theme_pref_path =
            env::var("THEME_PREF_PATH").unwrap_or_else(|_| "./data/theme.json".to_string());
        let whatsapp_number =
            env::var("WHATSAPP_NUMBER").unwrap_or_else(|_| "27785002274".to_string());

        Ok(Self {
            typing_min_ms,
            typing_max_ms,
            log_file,
            log_console_level,
            theme_pref_path,
            whatsapp_number,
        })
    }

    /// Validate config (delay bounds ordered, console level known, WhatsApp number digits only).
    pub fn validate(&self) -> Result<()> {
        self.console_level()?;
        if self.typing_min_ms > self.typing_max_ms {
            anyhow::bail!(
                "CHATBOT_TYPING_MIN_MS ({}) must not exceed CHATBOT_TYPING_MAX_MS ({})",
                self.typing_min_ms,
                self.typing_max_ms
            );
        }
        if self.whatsapp_number.is_empty()
            || !self.whatsapp_number.chars().all(|c| c.is_ascii_digit())
        {
            anyhow::bail!(
                "WHATSAPP_NUMBER must be digits only (international format, no '+'): {:?}",
                self.whatsapp_number
            );
        }
        Ok(())
    }

    pub fn console_level(&self) -> Result<LevelFilter> {
        self.log_console_level
            .parse()
            .with_context(|| format!("LOG_CONSOLE_LEVEL is not a level: {:?}", self.log_console_level))
    }

    pub fn typing_min(&self) -> Duration {
        Duration::from_millis(self.typing_min_ms)
    }

    pub fn typing_max(&self) -> Duration {
        Duration::from_millis(self.typing_max_ms)
    }
}
