// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Front-end origin allowed by CORS
    pub frontend_url: String,
    /// Base URL of the activities API, used by the HTTP client
    pub api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honoured if present. Every variable has a default
    /// suitable for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            api_url: env::var("ACTIVITIES_API_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        })
    }

    /// Fixed configuration for tests.
    pub fn test_default() -> Self {
        Self {
            port: 0,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment is process-global; keep every env assertion in one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("FRONTEND_URL");
        env::remove_var("ACTIVITIES_API_URL");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.frontend_url, DEFAULT_FRONTEND_URL);
        assert_eq!(config.api_url, DEFAULT_API_URL);

        env::set_var("PORT", "8081");
        env::set_var("ACTIVITIES_API_URL", "http://api.test/api/");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 8081);
        assert_eq!(config.api_url, "http://api.test/api");

        env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));

        env::remove_var("PORT");
        env::remove_var("ACTIVITIES_API_URL");
    }
}
