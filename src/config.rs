//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Every variable is optional; the defaults serve short links from
//! `http://localhost:8000`.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `BASE_URL` - Public origin used to build short links (default: `http://localhost:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_VALIDITY_MINUTES` - Link lifetime when a request omits it (default: 30)
//! - `SHORTCODE_LENGTH` - Length of generated shortcodes (default: 6, range: 4-32)
//!
//! No state is persisted: links and click logs live only as long as the process.

use anyhow::Result;
use std::env;

use crate::application::services::LinkSettings;
use crate::application::services::link_service::{DEFAULT_VALIDITY_MINUTES, MAX_VALIDITY_MINUTES};
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MIN_CODE_LENGTH};

/// Longest generated shortcode accepted by [`Config::validate`].
const MAX_CODE_LENGTH: usize = 32;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub default_validity_minutes: i64,
    pub shortcode_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            base_url: "http://localhost:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
            shortcode_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let base_url = env::var("BASE_URL").unwrap_or(defaults.base_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let default_validity_minutes = env::var("DEFAULT_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.default_validity_minutes);

        let shortcode_length = env::var("SHORTCODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.shortcode_length);

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            default_validity_minutes,
            shortcode_length,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an `http://` or `https://` origin
    /// - `default_validity_minutes` is not positive or exceeds ten years
    /// - `shortcode_length` is outside 4-32
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.default_validity_minutes <= 0 || self.default_validity_minutes > MAX_VALIDITY_MINUTES {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be between 1 and {}, got {}",
                MAX_VALIDITY_MINUTES,
                self.default_validity_minutes
            );
        }

        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.shortcode_length) {
            anyhow::bail!(
                "SHORTCODE_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.shortcode_length
            );
        }

        Ok(())
    }

    /// Settings handed to the link service.
    pub fn link_settings(&self) -> LinkSettings {
        LinkSettings {
            base_url: self.base_url.clone(),
            default_validity_minutes: self.default_validity_minutes,
            code_length: self.shortcode_length,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Default validity: {} min", self.default_validity_minutes);
        tracing::info!("  Shortcode length: {}", self.shortcode_length);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
