//! Intake Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! document validation chain shared across all Intake components.

pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod store;
pub mod upload;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{NewPatient, Patient, PatientResponse, RegisterPatient};
pub use notify::{NotificationContent, Notifier, NotifierRegistry, NotifyError};
pub use store::{PatientStore, StoreError, StoreResult};
pub use upload::{
    document_chain, UploadMetadata, UploadPayload, UploadRejection, ValidationChain,
};
