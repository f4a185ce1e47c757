//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// When off (the default), DELETE requests report success without
    /// touching storage. See the delete handler.
    pub deletion_enabled: bool,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            deletion_enabled: env::var("DELETION_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            database,
        }
    }
}
