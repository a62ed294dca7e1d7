// src/config.rs
use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_MODEL_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.0-flash";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("CORS_ALLOWED_ORIGINS entry {0:?} is not a valid header value")]
    InvalidOrigin(String),
}

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// Parses a comma separated list. `*` anywhere means any origin.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if entries.is_empty() || entries.contains(&"*") {
            return Ok(Self::Any);
        }

        entries
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_key: Option<String>,
    pub model_base_url: String,
    pub model_name: String,
    pub allowed_origins: AllowedOrigins,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // blank counts as unset
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(raw) => AllowedOrigins::parse(&raw)?,
            None => AllowedOrigins::Any,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_key: get("GEMINI_API_KEY"),
            model_base_url: get("MODEL_BASE_URL").unwrap_or_else(|| DEFAULT_MODEL_BASE_URL.to_string()),
            model_name: get("MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string()),
            allowed_origins,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
        assert_eq!(cfg.api_key, None);
        assert_eq!(cfg.model_base_url, DEFAULT_MODEL_BASE_URL);
        assert_eq!(cfg.model_name, "gemini-2.0-flash");
        assert_eq!(cfg.allowed_origins, AllowedOrigins::Any);
    }

    #[test]
    fn reads_overrides() {
        let cfg = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("GEMINI_API_KEY", "key-123"),
            ("MODEL_BASE_URL", "http://localhost:9999/v1"),
            ("MODEL_NAME", "gemini-2.5-pro"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.api_key.as_deref(), Some("key-123"));
        assert_eq!(cfg.model_base_url, "http://localhost:9999/v1");
        assert_eq!(cfg.model_name, "gemini-2.5-pro");
    }

    #[test]
    fn blank_api_key_is_unset() {
        let cfg = load(&[("GEMINI_API_KEY", "   ")]).unwrap();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));
    }

    #[test]
    fn origin_list_parsing() {
        assert_eq!(AllowedOrigins::parse("*").unwrap(), AllowedOrigins::Any);
        assert_eq!(
            AllowedOrigins::parse("https://a.example, *").unwrap(),
            AllowedOrigins::Any
        );
        assert_eq!(
            AllowedOrigins::parse("https://a.example, https://b.example,").unwrap(),
            AllowedOrigins::List(vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ])
        );
        assert!(matches!(
            AllowedOrigins::parse("https://bad\nexample"),
            Err(ConfigError::InvalidOrigin(_))
        ));
    }
}
