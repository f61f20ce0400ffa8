// storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Compact,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" => Ok(LogFormat::Pretty),
      "compact" => Ok(LogFormat::Compact),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!(
        "Invalid LOG_FORMAT '{}': expected pretty, compact or json",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // JSON seed file; the built-in demo catalog is used when unset.
  pub catalog_path: Option<PathBuf>,

  pub session_cookie_name: String,
  // Server-side session bounds, see `shopcart::SessionLimits`.
  pub max_sessions: usize,
  pub session_idle_timeout: Duration,
  pub log_format: LogFormat,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 5000,
      catalog_path: None,
      session_cookie_name: "cart_session".to_string(),
      max_sessions: 10_000,
      session_idle_timeout: Duration::from_secs(30 * 60),
      log_format: LogFormat::Pretty,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from any key lookup, falling back to defaults for unset keys.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let defaults = Self::default();

    let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match lookup("SERVER_PORT") {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT '{}': {}", raw, e)))?,
      None => defaults.server_port,
    };
    let catalog_path = lookup("CATALOG_PATH")
      .filter(|raw| !raw.trim().is_empty())
      .map(PathBuf::from);
    let session_cookie_name = lookup("SESSION_COOKIE_NAME").unwrap_or(defaults.session_cookie_name);
    if session_cookie_name.is_empty() || session_cookie_name.contains(|c: char| matches!(c, ';' | '=' | ',' | ' ')) {
      return Err(AppError::Config(format!(
        "Invalid SESSION_COOKIE_NAME '{}'",
        session_cookie_name
      )));
    }
    let max_sessions = match lookup("MAX_SESSIONS") {
      Some(raw) => parse_positive("MAX_SESSIONS", &raw)? as usize,
      None => defaults.max_sessions,
    };
    let session_idle_timeout = match lookup("SESSION_IDLE_SECS") {
      Some(raw) => Duration::from_secs(parse_positive("SESSION_IDLE_SECS", &raw)?),
      None => defaults.session_idle_timeout,
    };
    let log_format = match lookup("LOG_FORMAT") {
      Some(raw) => raw.parse::<LogFormat>()?,
      None => defaults.log_format,
    };

    Ok(Self {
      server_host,
      server_port,
      catalog_path,
      session_cookie_name,
      max_sessions,
      session_idle_timeout,
      log_format,
    })
  }
}

fn parse_positive(key: &str, raw: &str) -> Result<u64> {
  match raw.trim().parse::<u64>() {
    Ok(value) if value > 0 => Ok(value),
    Ok(_) => Err(AppError::Config(format!("Invalid {} '{}': must be greater than zero", key, raw))),
    Err(e) => Err(AppError::Config(format!("Invalid {} '{}': {}", key, raw, e))),
  }
}
