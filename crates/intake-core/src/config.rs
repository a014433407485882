//! Configuration module
//!
//! This module provides the application configuration loaded from environment
//! variables, including database, document upload, and notification settings.

use std::env;

// Common constants
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Document upload configuration
    pub max_document_size_bytes: usize,
    pub document_allowed_content_types: Vec<String>,
    // Confirmation notifications
    pub notifications_enabled: bool,
    pub confirmation_channel: String,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_from: Option<String>,
    pub smtp_tls: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        const MAX_DOCUMENT_SIZE_MB: usize = 5;

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            max_document_size_bytes: env::var("MAX_DOCUMENT_SIZE_MB")
                .unwrap_or_else(|_| MAX_DOCUMENT_SIZE_MB.to_string())
                .parse::<usize>()
                .unwrap_or(MAX_DOCUMENT_SIZE_MB)
                * 1024
                * 1024,
            document_allowed_content_types: env::var("DOCUMENT_ALLOWED_CONTENT_TYPES")
                .unwrap_or_else(|_| "image/jpeg,image/jpg,image/png,application/pdf".to_string())
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .collect(),
            notifications_enabled: env::var("NOTIFICATIONS_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(true),
            confirmation_channel: env::var("CONFIRMATION_CHANNEL")
                .unwrap_or_else(|_| "email".to_string())
                .to_lowercase(),
            smtp_host: env::var("SMTP_HOST").ok().filter(|s| !s.is_empty()),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&p| p > 0),
            smtp_user: env::var("SMTP_USER").ok().filter(|s| !s.is_empty()),
            smtp_password: env::var("SMTP_PASSWORD").ok().filter(|s| !s.is_empty()),
            smtp_from: env::var("SMTP_FROM").ok().filter(|s| !s.is_empty()),
            smtp_tls: env::var("SMTP_TLS")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(true),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.database_url.starts_with("postgresql://")
            && !self.database_url.starts_with("postgres://")
        {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if self.max_document_size_bytes == 0 {
            return Err(anyhow::anyhow!(
                "MAX_DOCUMENT_SIZE_MB must be greater than zero"
            ));
        }

        if self.document_allowed_content_types.is_empty() {
            return Err(anyhow::anyhow!(
                "DOCUMENT_ALLOWED_CONTENT_TYPES must list at least one content type"
            ));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
            || self.environment.to_lowercase() == "prod"
    }
}
