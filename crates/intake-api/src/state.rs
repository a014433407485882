//! Application state and sub-state extractors.
//!
//! AppState is split into domain sub-states so handlers can extract only what they need
//! via Axum's `FromRef`, and to avoid a single god object.

use intake_core::{Config, NotifierRegistry, PatientStore, ValidationChain};
use sqlx::PgPool;
use std::sync::Arc;

// ----- Sub-state types -----

/// Database pool for readiness probes. `None` when running without a database
/// (the in-memory store used by the HTTP test suite).
#[derive(Clone)]
pub struct DbState {
    pub pool: Option<PgPool>,
}

/// Everything the registration flow needs: the patient store, the document
/// validation chain, and the notifier registry for confirmation dispatch.
#[derive(Clone)]
pub struct RegistrationState {
    pub store: Arc<dyn PatientStore>,
    pub validation: Arc<ValidationChain>,
    pub notifiers: NotifierRegistry,
    pub confirmation_channel: String,
    pub notifications_enabled: bool,
}

// ----- AppState -----

/// Main application state: aggregates sub-states for dependency injection.
#[derive(Clone)]
pub struct AppState {
    pub db: DbState,
    pub registration: RegistrationState,
    pub config: Config,
    pub is_production: bool,
}

// ----- FromRef for sub-state extraction -----

impl axum::extract::FromRef<Arc<AppState>> for DbState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for RegistrationState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.registration.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
