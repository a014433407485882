//! Patient registration service
//!
//! Orchestrates the registration workflow: validate fields → validate document →
//! persist → dispatch confirmation.

use intake_core::{AppError, NewPatient, NotificationContent, Patient, PatientResponse};
use validator::Validate;

use crate::state::RegistrationState;
use crate::utils::upload::RegistrationForm;

const CONFIRMATION_SUBJECT: &str = "Registration Confirmation";
const CONFIRMATION_MESSAGE: &str =
    "Thank you for registering with our service. Your information has been received.";

pub struct RegistrationService {
    state: RegistrationState,
}

impl RegistrationService {
    pub fn new(state: &RegistrationState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Complete registration workflow.
    ///
    /// Field validation failures surface as 422, document rejections as 400
    /// with the reason of the first failing check, and an already-registered
    /// email as 409. The confirmation is dispatched in the background after
    /// the record is persisted and never affects the response.
    pub async fn register(&self, form: RegistrationForm) -> Result<PatientResponse, AppError> {
        let RegistrationForm { patient, document } = form;

        patient.validate()?;
        self.state.validation.validate(&document)?;

        // Pre-check gives the common case a clean conflict error; the unique
        // index on email still catches concurrent submissions at insert.
        if self.state.store.email_exists(&patient.email).await? {
            return Err(AppError::DuplicateEmail(patient.email));
        }

        let record = NewPatient {
            name: patient.name,
            email: patient.email,
            phone_number: patient.phone_number,
            document_photo: document.content,
            document_photo_filename: document.metadata.filename,
            document_photo_content_type: document.metadata.content_type,
        };
        let saved = self.state.store.insert(record).await?;

        tracing::info!(patient_id = %saved.id, "Patient registered");
        self.dispatch_confirmation(&saved);

        Ok(PatientResponse::from(saved))
    }

    /// Fire-and-forget confirmation on the configured channel.
    fn dispatch_confirmation(&self, patient: &Patient) {
        if !self.state.notifications_enabled {
            tracing::debug!("Notifications disabled; skipping confirmation");
            return;
        }

        let registry = self.state.notifiers.clone();
        let channel = self.state.confirmation_channel.clone();
        let recipient = patient.email.clone();
        let content = NotificationContent {
            name: patient.name.clone(),
            message: CONFIRMATION_MESSAGE.to_string(),
        };

        tokio::spawn(async move {
            let notifier = match registry.resolve(&channel).await {
                Ok(notifier) => notifier,
                Err(e) => {
                    tracing::warn!(
                        channel = %channel,
                        error = %e,
                        "Confirmation dropped: no notifier registered"
                    );
                    return;
                }
            };
            if notifier
                .send(&recipient, CONFIRMATION_SUBJECT, &content)
                .await
            {
                tracing::debug!(channel = %channel, "Confirmation dispatched");
            } else {
                tracing::warn!(channel = %channel, "Confirmation delivery failed");
            }
        });
    }
}
