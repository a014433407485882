use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Accepts digits with optional leading '+' and common separators, 8 to 20 characters.
static PHONE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{8,20}$").unwrap());

pub const PHONE_NUMBER_MESSAGE: &str =
    "Invalid phone number format. Examples: +1234567890, 123-456-7890, (123) 456-7890";

/// A stored patient row, including the uploaded document photo bytes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub document_photo: Vec<u8>,
    pub document_photo_filename: String,
    pub document_photo_content_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for a patient row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub document_photo: Vec<u8>,
    pub document_photo_filename: String,
    pub document_photo_content_type: String,
}

/// Text fields of the registration form, validated before anything is stored.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct RegisterPatient {
    /// Patient's full name
    #[validate(length(
        min = 2,
        max = 100,
        message = "Name must be between 2 and 100 characters"
    ))]
    pub name: String,

    /// Patient's email address
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Patient's phone number
    #[validate(regex(path = *PHONE_NUMBER_RE, message = "Invalid phone number format. Examples: +1234567890, 123-456-7890, (123) 456-7890"))]
    pub phone_number: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PatientResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub document_photo_filename: String,
    pub document_photo_content_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        PatientResponse {
            id: patient.id,
            name: patient.name,
            email: patient.email,
            phone_number: patient.phone_number,
            document_photo_filename: patient.document_photo_filename,
            document_photo_content_type: patient.document_photo_content_type,
            created_at: patient.created_at,
            updated_at: patient.updated_at,
        }
    }
}
