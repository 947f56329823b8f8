//! Configuration management for the Job Board backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: JOBBOARD__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Database URL that selects the in-memory store
pub const MEMORY_DATABASE_URL: &str = "memory://";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn is_memory(&self) -> bool {
        self.url.starts_with(MEMORY_DATABASE_URL)
    }
}

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of a session token issued at login
    pub token_expiry_secs: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 4000,
            },
            database: DatabaseConfig {
                url: MEMORY_DATABASE_URL.to_string(),
                max_connections: 10,
            },
            jwt: JwtConfig {
                secret: "development-secret-change-in-production".to_string(),
                token_expiry_secs: 60,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with JOBBOARD__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., JOBBOARD__JWT__SECRET=... sets jwt.secret
            .add_source(config::Environment::with_prefix("JOBBOARD").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Collect problems that make this configuration unfit for production
    pub fn production_problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();

        if self.jwt.secret.contains("development") || self.jwt.secret.len() < 32 {
            problems.push("JWT secret must be at least 32 characters and not contain 'development'");
        }
        if self.database.is_memory() {
            problems.push("In-memory database cannot be used in production");
        }
        if self.jwt.token_expiry_secs <= 0 {
            problems.push("JWT token expiry must be positive");
        }

        problems
    }
}
