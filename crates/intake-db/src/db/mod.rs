//! Database repositories for data access layer
//!
//! Each repository owns the SQL for one domain entity and maps low-level
//! database failures onto the store error types.

pub mod patients;

pub use patients::PatientRepository;
