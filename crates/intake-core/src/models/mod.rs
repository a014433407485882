//! Domain models

pub mod patient;

pub use patient::{NewPatient, Patient, PatientResponse, RegisterPatient, PHONE_NUMBER_MESSAGE};
