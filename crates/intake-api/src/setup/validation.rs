//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::{Context, Result};
use intake_core::Config;

/// Validate critical configuration values
///
/// This function checks that critical configuration is set correctly and will
/// fail fast if there are issues that could cause security problems or runtime errors.
pub fn validate_config(config: &Config) -> Result<()> {
    config
        .validate()
        .context("Core configuration validation failed")?;

    // Validate production mode detection
    let is_production = config.is_production();
    let env_var = std::env::var("ENVIRONMENT")
        .or_else(|_| std::env::var("APP_ENV"))
        .ok();

    if is_production && env_var.is_none() {
        tracing::warn!(
            "Production mode detected but ENVIRONMENT/APP_ENV not set - error details may leak"
        );
    }

    // Validate database connection settings
    if config.db_max_connections == 0 {
        return Err(anyhow::anyhow!("Database max connections cannot be 0"));
    }

    if config.db_timeout_seconds == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    // Confirmation dispatch sanity checks; these degrade at runtime rather
    // than fail, so surface them at startup.
    if config.notifications_enabled {
        if config.confirmation_channel == "email" && config.smtp_host.is_none() {
            tracing::warn!(
                "Email confirmations enabled but SMTP_HOST not set - confirmation sends will fail"
            );
        }
        if !["email", "sms"].contains(&config.confirmation_channel.as_str()) {
            tracing::warn!(
                confirmation_channel = %config.confirmation_channel,
                "Unknown confirmation channel - confirmations will be dropped unless a notifier is registered for it"
            );
        }
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}
