//! Patient persistence abstraction
//!
//! This module defines the trait that patient storage backends must implement,
//! so the registration flow and its tests do not couple to a concrete database.

use async_trait::async_trait;
use thiserror::Error;

use crate::error::AppError;
use crate::models::{NewPatient, Patient};

/// Persistence operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A patient with this email address is already registered.
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[cfg(not(feature = "sqlx"))]
    #[error("Database error: {0}")]
    Database(String),

    #[error("Store error: {0}")]
    Other(String),
}

/// Result type for persistence operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Patient persistence abstraction
///
/// Backends must report an email collision as `StoreError::DuplicateEmail`,
/// never as a generic database failure.
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Insert a new patient and return the stored row.
    async fn insert(&self, patient: NewPatient) -> StoreResult<Patient>;

    /// Whether a patient with this email address is already registered.
    async fn email_exists(&self, email: &str) -> StoreResult<bool>;
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(email) => AppError::DuplicateEmail(email),
            StoreError::Database(e) => AppError::Database(e),
            StoreError::Other(message) => AppError::Internal(message),
        }
    }
}
