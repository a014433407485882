//! Intake API Library
//!
//! This crate provides the HTTP API handlers, notifiers, and application setup.

// Module declarations
mod api_doc;
mod handlers;
mod telemetry;

// Public modules
pub mod error;
pub mod notifiers;
pub mod services;
pub mod setup;
pub mod state;
pub mod utils;

// Re-exports
pub use error::ErrorResponse;
