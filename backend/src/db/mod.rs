//! Database connection and pool management
//!
//! This module provides database connection pooling and selects the store
//! backend named by `database.url`.

use crate::config::DatabaseConfig;
use crate::repositories::Stores;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Database configuration for pool creation
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,      // 10 minutes
            max_lifetime_secs: 1800,     // 30 minutes
        }
    }
}

/// Collection tables and indexes, created if absent
const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        mobile BIGINT,
        password TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS users_email_key ON users (email)",
    r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id UUID PRIMARY KEY,
        seq BIGSERIAL NOT NULL,
        company_name TEXT NOT NULL,
        add_logo_url TEXT NOT NULL,
        job_position TEXT NOT NULL,
        monthly_salary DOUBLE PRECISION NOT NULL,
        job_type TEXT NOT NULL,
        remote_office TEXT NOT NULL,
        location TEXT NOT NULL,
        job_description TEXT NOT NULL,
        about_company TEXT NOT NULL,
        skills_required TEXT[] NOT NULL DEFAULT '{}',
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS jobs_skills_required_idx ON jobs USING GIN (skills_required)",
];

/// Connect the store backend selected by the configured URL
pub async fn connect_stores(config: &DatabaseConfig) -> Result<Stores> {
    if config.is_memory() {
        warn!("Using in-memory store; data is lost on restart");
        return Ok(Stores::in_memory());
    }

    if !(config.url.starts_with("postgres://") || config.url.starts_with("postgresql://")) {
        anyhow::bail!("Unsupported database URL scheme (expected postgres:// or memory://)");
    }

    let pool = create_pool(&config.url, config.max_connections).await?;
    ensure_schema(&pool).await?;
    Ok(Stores::postgres(pool))
}

/// Create a PostgreSQL connection pool with production-ready settings
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let config = DbConfig {
        url: database_url.to_string(),
        max_connections,
        ..Default::default()
    };
    create_pool_with_config(&config).await
}

/// Create a PostgreSQL connection pool with custom configuration
pub async fn create_pool_with_config(config: &DbConfig) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&config.url)?.application_name("job-board");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    info!(
        "Database pool created: max={}, min={}",
        config.max_connections, config.min_connections
    );

    Ok(pool)
}

/// Create the collection tables if they do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema ready");
    Ok(())
}
