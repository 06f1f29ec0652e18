use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";
pub const DEFAULT_DUPLICATE_WINDOW_SECS: u64 = 86_400;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct SmtpSettings {
    pub host: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub smtp: SmtpSettings,
    /// Recruiting inbox every application is forwarded to.
    pub contact_recipient: String,
    pub contact_sender: String,
    pub duplicate_window: Duration,
    /// Built frontend served for every non-API path, when set.
    pub frontend_dist: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value,
            })?,
            None => DEFAULT_BIND_ADDR.parse().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: DEFAULT_BIND_ADDR.to_string(),
            })?,
        };

        let duplicate_window = match lookup("DUPLICATE_WINDOW_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid {
                    name: "DUPLICATE_WINDOW_SECS",
                    value,
                })?,
            None => Duration::from_secs(DEFAULT_DUPLICATE_WINDOW_SECS),
        };

        Ok(Self {
            bind_addr,
            smtp: SmtpSettings {
                host: required("SMTP_HOST")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            },
            contact_recipient: required("CONTACT_RECIPIENT")?,
            contact_sender: required("CONTACT_SENDER")?,
            duplicate_window,
            frontend_dist: lookup("FRONTEND_DIST")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const SMTP: &[(&str, &str)] = &[
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_USERNAME", "salon"),
        ("SMTP_PASSWORD", "secret"),
        ("CONTACT_RECIPIENT", "recruit@example.com"),
        ("CONTACT_SENDER", "noreply@example.com"),
    ];

    #[test]
    fn defaults_apply_when_optional_values_are_absent() {
        let config = Config::from_lookup(env(SMTP)).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3001".parse::<SocketAddr>().unwrap());
        assert_eq!(config.duplicate_window, Duration::from_secs(86_400));
        assert!(config.frontend_dist.is_none());
    }

    #[test]
    fn missing_smtp_host_is_reported_by_name() {
        let pairs: Vec<_> = SMTP.iter().copied().filter(|(k, _)| *k != "SMTP_HOST").collect();
        let err = Config::from_lookup(env(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("SMTP_HOST"));
    }

    #[test]
    fn malformed_window_is_rejected() {
        let mut pairs = SMTP.to_vec();
        pairs.push(("DUPLICATE_WINDOW_SECS", "a day"));
        let err = Config::from_lookup(env(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "DUPLICATE_WINDOW_SECS", .. }));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let mut pairs = SMTP.to_vec();
        pairs.extend([
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("DUPLICATE_WINDOW_SECS", "60"),
            ("FRONTEND_DIST", "frontend/dist"),
        ]);
        let config = Config::from_lookup(env(&pairs)).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.duplicate_window, Duration::from_secs(60));
        assert_eq!(config.frontend_dist, Some(PathBuf::from("frontend/dist")));
    }
}
