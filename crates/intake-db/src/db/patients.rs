use async_trait::async_trait;
use intake_core::models::{NewPatient, Patient};
use intake_core::store::{PatientStore, StoreError, StoreResult};
use sqlx::{PgPool, Postgres};

/// Repository for managing patient records
#[derive(Clone)]
pub struct PatientRepository {
    pool: PgPool,
}

impl PatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A unique violation on insert can only come from the email index, so it is
/// reported as `DuplicateEmail`; everything else stays a database fault.
fn classify_insert_error(err: sqlx::Error, email: &str) -> StoreError {
    if err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
    {
        return StoreError::DuplicateEmail(email.to_string());
    }
    StoreError::Database(err)
}

#[async_trait]
impl PatientStore for PatientRepository {
    #[tracing::instrument(
        skip(self, patient),
        fields(db.table = "patients", db.operation = "insert")
    )]
    async fn insert(&self, patient: NewPatient) -> StoreResult<Patient> {
        let row = sqlx::query_as::<Postgres, Patient>(
            r#"
            INSERT INTO patients (name, email, phone_number, document_photo, document_photo_filename, document_photo_content_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone_number, document_photo, document_photo_filename, document_photo_content_type, created_at, updated_at
            "#,
        )
        .bind(&patient.name)
        .bind(&patient.email)
        .bind(&patient.phone_number)
        .bind(&patient.document_photo)
        .bind(&patient.document_photo_filename)
        .bind(&patient.document_photo_content_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify_insert_error(e, &patient.email))?;

        Ok(row)
    }

    #[tracing::instrument(
        skip(self),
        fields(db.table = "patients", db.operation = "select")
    )]
    async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM patients WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::Database)?;

        Ok(exists)
    }
}
