//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

use triangle_auth::{SESSION_COOKIE_NAME, SessionSecret};
use triangle_observability::LogFormat;

pub const ENV_BIND_ADDR: &str = "TRIANGLE_BIND_ADDR";
pub const ENV_SESSION_SECRET: &str = "TRIANGLE_SESSION_SECRET";
pub const ENV_SESSION_COOKIE: &str = "TRIANGLE_SESSION_COOKIE";
pub const ENV_LOG_FORMAT: &str = "TRIANGLE_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: invalid socket address '{value}'")]
    BindAddr { key: &'static str, value: String },

    #[error("{key}: invalid cookie name '{value}'")]
    CookieName { key: &'static str, value: String },

    #[error("{key}: {message}")]
    LogFormat { key: &'static str, message: String },
}

/// Startup configuration.
///
/// A missing session secret is *not* a configuration error: the server starts
/// and the verifier rejects every credential until the secret is provided.
#[derive(Debug, Clone)]
pub struct AppConfig {
    bind_addr: SocketAddr,
    session_secret: SessionSecret,
    cookie_name: String,
    log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = non_empty(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::BindAddr {
                key: ENV_BIND_ADDR,
                value: bind_raw.clone(),
            })?;

        let cookie_name =
            non_empty(ENV_SESSION_COOKIE).unwrap_or_else(|| SESSION_COOKIE_NAME.to_string());
        if !is_cookie_token(&cookie_name) {
            return Err(ConfigError::CookieName {
                key: ENV_SESSION_COOKIE,
                value: cookie_name,
            });
        }

        let log_format = match non_empty(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse::<LogFormat>().map_err(|e| ConfigError::LogFormat {
                key: ENV_LOG_FORMAT,
                message: e.to_string(),
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            session_secret: SessionSecret::from_optional(lookup(ENV_SESSION_SECRET)),
            cookie_name,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    pub fn session_secret(&self) -> &SessionSecret {
        &self.session_secret
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

/// RFC 6265 cookie-name token characters.
fn is_cookie_token(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
        })
}
