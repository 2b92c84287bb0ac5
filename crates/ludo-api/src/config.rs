//! Server configuration.

use serde::{Deserialize, Serialize};

use ludo_core::{Error, Result};

/// CORS configuration.
///
/// The frontend is served from an arbitrary origin, so the default allows any
/// origin while still honoring credentialed requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins. `["*"]` allows any origin.
    pub allowed_origins: Vec<String>,
    /// Preflight cache duration in seconds.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            max_age_seconds: 3600,
        }
    }
}

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listen port.
    pub http_port: u16,
    /// Debug mode: pretty logs and an in-memory store fallback.
    pub debug: bool,
    /// MongoDB connection string.
    pub mongo_url: Option<String>,
    /// MongoDB database name.
    pub db_name: Option<String>,
    /// CORS settings.
    pub cors: CorsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 8080,
            debug: false,
            mongo_url: None,
            db_name: None,
            cors: CorsConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Recognized variables:
    ///
    /// - `LUDO_HTTP_PORT` - HTTP listen port (default 8080)
    /// - `LUDO_DEBUG` - debug mode (default false)
    /// - `LUDO_MONGO_URL` - MongoDB connection string
    /// - `LUDO_DB_NAME` - MongoDB database name
    /// - `LUDO_CORS_ALLOWED_ORIGINS` - comma-separated origins or `*`
    /// - `LUDO_CORS_MAX_AGE_SECONDS` - preflight cache duration
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but unparseable.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = env_u16("LUDO_HTTP_PORT")? {
            config.http_port = port;
        }
        if let Some(debug) = env_bool("LUDO_DEBUG")? {
            config.debug = debug;
        }
        config.mongo_url = env_string("LUDO_MONGO_URL");
        config.db_name = env_string("LUDO_DB_NAME");

        if let Some(origins) = env_string("LUDO_CORS_ALLOWED_ORIGINS") {
            config.cors.allowed_origins = parse_cors_allowed_origins(&origins);
        }
        if let Some(max_age) = env_u64("LUDO_CORS_MAX_AGE_SECONDS")? {
            config.cors.max_age_seconds = max_age;
        }

        Ok(config)
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_u16(name: &str) -> Result<Option<u16>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    v.parse::<u16>()
        .map(Some)
        .map_err(|e| Error::InvalidInput(format!("{name} must be a u16: {e}")))
}

fn env_u64(name: &str) -> Result<Option<u64>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    v.parse::<u64>()
        .map(Some)
        .map_err(|e| Error::InvalidInput(format!("{name} must be a u64: {e}")))
}

fn env_bool(name: &str) -> Result<Option<bool>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    parse_bool(name, &v).map(Some)
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    let value = value.trim().to_ascii_lowercase();
    match value.as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(Error::InvalidInput(format!(
            "{name} must be a boolean (true/false/1/0)"
        ))),
    }
}

fn parse_cors_allowed_origins(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed == "*" {
        return vec!["*".to_string()];
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
