//! Service initialization and application state setup

use anyhow::Result;
use intake_core::{document_chain, Config, NotifierRegistry};
use intake_db::PatientRepository;
use sqlx::PgPool;
use std::sync::Arc;

use crate::state::{AppState, DbState, RegistrationState};

/// Initialize all services and repositories, returning the application state
pub async fn initialize_services(config: &Config, pool: PgPool) -> Result<Arc<AppState>> {
    let store = PatientRepository::new(pool.clone());

    let chain = document_chain(
        config.max_document_size_bytes,
        config.document_allowed_content_types.clone(),
    );
    tracing::info!(
        stages = ?chain.stage_names(),
        max_document_size_bytes = config.max_document_size_bytes,
        "Document validation chain assembled"
    );

    let notifiers = NotifierRegistry::new();
    crate::notifiers::register_builtin(&notifiers, config).await;
    tracing::info!(
        channels = ?notifiers.channels().await,
        confirmation_channel = %config.confirmation_channel,
        "Notifier registry initialized"
    );

    let is_production = config.is_production();
    tracing::info!(
        environment = %config.environment,
        is_production = is_production,
        "Environment configuration loaded"
    );

    let state = AppState {
        db: DbState { pool: Some(pool) },
        registration: RegistrationState {
            store: Arc::new(store),
            validation: Arc::new(chain),
            notifiers,
            confirmation_channel: config.confirmation_channel.clone(),
            notifications_enabled: config.notifications_enabled,
        },
        config: config.clone(),
        is_production,
    };

    Ok(Arc::new(state))
}
