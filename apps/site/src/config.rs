use anyhow::{Context, Result};

const MEGABYTE: usize = 1024 * 1024;

/// Site configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for the demo form body, resume upload included.
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8501,
            rust_log: "info".to_string(),
            max_upload_bytes: 200 * MEGABYTE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_MB") {
            Some(raw) => raw
                .parse::<usize>()
                .context("MAX_UPLOAD_MB must be a whole number of megabytes")?
                .checked_mul(MEGABYTE)
                .context("MAX_UPLOAD_MB is too large")?,
            None => defaults.max_upload_bytes,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8501);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.max_upload_bytes, 200 * 1024 * 1024);
    }

    #[test]
    fn test_unset_vars_use_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8501);
        assert_eq!(config.max_upload_bytes, 200 * 1024 * 1024);
    }

    #[test]
    fn test_vars_override_defaults() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
            ("MAX_UPLOAD_MB", "5"),
        ])
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid port number"));

        let err = config_from(&[("PORT", "70000")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_upload_limit_is_an_error() {
        let err = config_from(&[("MAX_UPLOAD_MB", "lots")]).unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_MB must be a whole number"));
    }

    #[test]
    fn test_overflowing_upload_limit_is_an_error_not_a_panic() {
        let err = config_from(&[("MAX_UPLOAD_MB", "18446744073709551615")]).unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_MB is too large"));
    }
}
