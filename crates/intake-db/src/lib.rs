//! Database repositories for the patient intake service
//!
//! This crate contains the PostgreSQL-backed implementations of the
//! persistence traits defined in `intake-core`.

pub mod db;

pub use db::PatientRepository;
