// src/core/config.rs
use std::env;
use actix_web::cookie::Key;
use base64::Engine;
use log::LevelFilter;

// Configuration for the password service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Session
    pub session_secret: Option<String>,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 5000,

            // Session
            session_secret: None,

            // Password Generation
            default_password_length: 12,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        // Session
        if let Ok(secret) = env::var("SESSION_SECRET_KEY") {
            if !secret.trim().is_empty() {
                config.session_secret = Some(secret);
            }
        }

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    // Signing key for the session cookie. The secret is taken as base64 when
    // it decodes, raw bytes otherwise, and must provide at least 32 bytes of
    // material; anything else falls back to a fresh random key, which means
    // sessions do not survive a restart.
    pub fn session_key(&self) -> Key {
        match &self.session_secret {
            Some(secret) => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(secret)
                    .unwrap_or_else(|_| secret.as_bytes().to_vec());

                if bytes.len() >= 32 {
                    Key::derive_from(&bytes)
                } else {
                    log::warn!(
                        "SESSION_SECRET_KEY provides fewer than 32 bytes, using a random key"
                    );
                    Key::generate()
                }
            }
            None => {
                log::warn!("SESSION_SECRET_KEY not set, sessions will not survive restarts");
                Key::generate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_service_defaults() {
        let config = Config::default();
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.default_password_length, 12);
        assert!(config.session_secret.is_none());
    }

    #[test]
    fn session_key_accepts_long_raw_secret() {
        let config = Config {
            session_secret: Some("an-entirely-unremarkable-32+byte-secret-value".to_string()),
            ..Config::default()
        };
        // Derivation must be deterministic for a fixed secret.
        let first = config.session_key();
        let second = config.session_key();
        assert_eq!(first.master(), second.master());
    }

    #[test]
    fn session_key_without_secret_is_random() {
        let config = Config::default();
        let first = config.session_key();
        let second = config.session_key();
        assert_ne!(first.master(), second.master());
    }
}
