// src/config.rs

use std::{env, fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use dotenv::dotenv;
use log::{info, warn};
use thiserror::Error;

const DEFAULT_SESSION_SECRET: &str = "secretValue";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Cookie session settings, built once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secret: String,
    pub max_age: Duration,
    /// Marks the cookie `Secure`; turn on whenever the service sits behind HTTPS.
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "session".to_string(),
            secret: DEFAULT_SESSION_SECRET.to_string(),
            max_age: Duration::from_secs(24 * 60 * 60),
            secure: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub session: SessionConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let session = SessionConfig {
            cookie_name: try_load("SESSION_COOKIE", "session")?,
            secret: try_load("SESSION_SECRET", DEFAULT_SESSION_SECRET)?,
            max_age: Duration::from_secs(try_load("SESSION_MAX_AGE_SECS", "86400")?),
            secure: try_load("SESSION_COOKIE_SECURE", "false")?,
        };
        if session.secret == DEFAULT_SESSION_SECRET {
            warn!("SESSION_SECRET is the built-in default, set it before deploying");
        }

        Ok(Self {
            host: try_load("HOST", "0.0.0.0")?,
            port: try_load("PORT", "3005")?,
            database_url: var("DATABASE_URL"),
            database_max_connections: try_load("DATABASE_MAX_CONNECTIONS", "5")?,
            session,
        })
    }

    pub fn address(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            key: "HOST",
            value: raw.clone(),
            reason: e.to_string(),
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_lasts_a_day() {
        let session = SessionConfig::default();
        assert_eq!(session.cookie_name, "session");
        assert_eq!(session.max_age, Duration::from_secs(86_400));
        assert!(!session.secure);
    }

    #[test]
    fn address_joins_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 3005,
            database_url: None,
            database_max_connections: 5,
            session: SessionConfig::default(),
        };
        assert_eq!(config.address().unwrap(), "127.0.0.1:3005".parse().unwrap());
    }

    #[test]
    fn bad_host_is_reported() {
        let config = Config {
            host: "not a host".to_string(),
            port: 3005,
            database_url: None,
            database_max_connections: 5,
            session: SessionConfig::default(),
        };
        assert!(matches!(
            config.address(),
            Err(ConfigError::Invalid { key: "HOST", .. })
        ));
    }
}
