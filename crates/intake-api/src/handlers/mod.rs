pub mod register_patient;
pub mod welcome;
