//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export API_BASE_URL="http://127.0.0.1:5000"
//! export LISTEN="0.0.0.0:3000"
//! export FALLBACK_PLACES_PATH="./data/places.json"
//! ```
//!
//! ## Optional Variables
//!
//! - `API_BASE_URL` - Upstream REST API (default: `http://127.0.0.1:5000`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_BASE` - Prefix of static asset URLs (default: `/static/`)
//! - `DISPLAY_UTC_OFFSET_MINUTES` - Offset used to display dates (default: 0)
//! - `BLOG_PAGE_SIZE` - Cards per blog list page (default: 6, 1..=100)
//! - `CAROUSEL_INTERVAL_MS` - Read-next auto-advance period (default: 5000, min: 500)
//! - `FALLBACK_PLACES_PATH` - JSON file of places used when the API is down

use anyhow::{Context, Result};
use chrono::FixedOffset;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::render::RenderContext;

const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_base: String,
    pub display_offset_minutes: i32,
    pub blog_page_size: u32,
    pub carousel_interval_ms: u64,
    pub fallback_places_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_base: "/static/".to_string(),
            display_offset_minutes: 0,
            blog_page_size: 6,
            carousel_interval_ms: 5000,
            fallback_places_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = env::var("API_BASE_URL").unwrap_or(defaults.api_base_url);
        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let static_base = env::var("STATIC_BASE").unwrap_or(defaults.static_base);

        let display_offset_minutes = parse_var("DISPLAY_UTC_OFFSET_MINUTES")?
            .unwrap_or(defaults.display_offset_minutes);
        let blog_page_size = parse_var("BLOG_PAGE_SIZE")?.unwrap_or(defaults.blog_page_size);
        let carousel_interval_ms =
            parse_var("CAROUSEL_INTERVAL_MS")?.unwrap_or(defaults.carousel_interval_ms);

        let fallback_places_path = env::var("FALLBACK_PLACES_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_base_url,
            listen_addr,
            log_level,
            log_format,
            static_base,
            display_offset_minutes,
            blog_page_size,
            carousel_interval_ms,
            fallback_places_path,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base_url` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - a numeric setting is out of range
    pub fn validate(&self) -> Result<()> {
        let api = url::Url::parse(&self.api_base_url)
            .with_context(|| format!("API_BASE_URL is not a valid URL: '{}'", self.api_base_url))?;
        if api.scheme() != "http" && api.scheme() != "https" {
            anyhow::bail!(
                "API_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.api_base_url
            );
        }

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

        if self.display_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            anyhow::bail!(
                "DISPLAY_UTC_OFFSET_MINUTES must be within ±{}, got {}",
                MAX_OFFSET_MINUTES,
                self.display_offset_minutes
            );
        }

        if !(1..=100).contains(&self.blog_page_size) {
            anyhow::bail!(
                "BLOG_PAGE_SIZE must be between 1 and 100, got {}",
                self.blog_page_size
            );
        }

        if self.carousel_interval_ms < 500 {
            anyhow::bail!(
                "CAROUSEL_INTERVAL_MS must be at least 500, got {}",
                self.carousel_interval_ms
            );
        }

        Ok(())
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    /// Rendering settings shared by every page service.
    pub fn render_context(&self) -> Result<RenderContext> {
        let display_offset = FixedOffset::east_opt(self.display_offset_minutes * 60)
            .context("DISPLAY_UTC_OFFSET_MINUTES is out of range")?;
        Ok(RenderContext {
            static_base: self.static_base.clone(),
            display_offset,
            csrf_token: None,
        })
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream API: {}", self.api_base_url);
        tracing::info!("  Static base: {}", self.static_base);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Blog page size: {}", self.blog_page_size);
        match &self.fallback_places_path {
            Some(path) => tracing::info!("  Fallback places: {}", path.display()),
            None => tracing::info!("  Fallback places: disabled"),
        }
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        _ => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable does not parse or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 9] = [
        "API_BASE_URL",
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "STATIC_BASE",
        "DISPLAY_UTC_OFFSET_MINUTES",
        "BLOG_PAGE_SIZE",
        "CAROUSEL_INTERVAL_MS",
        "FALLBACK_PLACES_PATH",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.api_base_url = "ftp://api.local".to_string();
        assert!(config.validate().is_err());
        config.api_base_url = "not a url".to_string();
        assert!(config.validate().is_err());
        config.api_base_url = "https://api.local".to_string();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.display_offset_minutes = 15 * 60;
        assert!(config.validate().is_err());
        config.display_offset_minutes = -5 * 60;
        assert!(config.validate().is_ok());

        config.blog_page_size = 0;
        assert!(config.validate().is_err());
        config.blog_page_size = 6;

        config.carousel_interval_ms = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_render_context_offset() {
        let config = Config {
            display_offset_minutes: -240,
            ..Config::default()
        };
        let ctx = config.render_context().unwrap();
        assert_eq!(ctx.display_offset.local_minus_utc(), -240 * 60);
        assert_eq!(ctx.static_base, "/static/");
    }

    #[test]
    #[serial]
    fn test_defaults_from_empty_env() {
        clear_env();
        let config = load_from_env().unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.blog_page_size, 6);
        assert_eq!(config.carousel_interval(), Duration::from_secs(5));
        assert!(config.fallback_places_path.is_none());
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("API_BASE_URL", "https://api.example.com");
            env::set_var("BLOG_PAGE_SIZE", " 12 ");
            env::set_var("DISPLAY_UTC_OFFSET_MINUTES", "-300");
            env::set_var("FALLBACK_PLACES_PATH", "/srv/places.json");
        }

        let config = load_from_env().unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.blog_page_size, 12);
        assert_eq!(config.display_offset_minutes, -300);
        assert_eq!(
            config.fallback_places_path,
            Some(PathBuf::from("/srv/places.json"))
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparsable_number_is_error() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CAROUSEL_INTERVAL_MS", "fast");
        }

        let err = load_from_env().unwrap_err();
        assert!(err.to_string().contains("CAROUSEL_INTERVAL_MS"));

        clear_env();
    }
}
