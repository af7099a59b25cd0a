//! API server configuration

use std::env;

use anyhow::{bail, Result};

/// Default port when `CURIO_PORT` is unset
const DEFAULT_PORT: u16 = 8080;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port (default: 8080)
    pub port: u16,

    /// Catalog service base URL
    pub catalog_api_url: String,

    /// Catalog service access token
    pub catalog_api_token: String,

    /// Deployment environment name (development, production, ...)
    pub environment: String,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// `CATALOG_API_URL` and `CATALOG_API_TOKEN` are always required;
    /// the catalog is the only data source this gateway has.
    pub fn from_env() -> Result<Self> {
        let environment =
            env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let port = match env::var("CURIO_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("CURIO_PORT must be a port number, got '{value}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let catalog_api_url = match env::var("CATALOG_API_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => bail!("CATALOG_API_URL must be set"),
        };

        let catalog_api_token = match env::var("CATALOG_API_TOKEN") {
            Ok(token) if !token.trim().is_empty() => token,
            _ => bail!("CATALOG_API_TOKEN must be set"),
        };

        let cors_allowed_origins = env::var("CORS_ORIGINS").ok().map(|origins| {
            origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect()
        });

        Ok(Self {
            port,
            catalog_api_url,
            catalog_api_token,
            environment,
            cors_allowed_origins,
        })
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_production() {
        let config = Config {
            port: DEFAULT_PORT,
            catalog_api_url: "https://catalog.example.com".into(),
            catalog_api_token: "token".into(),
            environment: "Production".into(),
            cors_allowed_origins: None,
        };
        assert!(config.is_production());

        let config = Config {
            environment: "development".into(),
            ..config
        };
        assert!(!config.is_production());
    }
}
