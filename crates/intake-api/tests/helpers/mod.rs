//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p intake-api`. The suite runs against
//! an in-memory patient store, so no database or SMTP server is required.

#![allow(dead_code)]

pub mod fixtures;

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use chrono::Utc;
use intake_api::setup::routes;
use intake_api::state::{AppState, DbState, RegistrationState};
use intake_core::{
    document_chain, Config, NewPatient, NotificationContent, Notifier, NotifierRegistry, Patient,
    PatientStore, StoreError, StoreResult,
};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use uuid::Uuid;

pub const MAX_DOCUMENT_SIZE_BYTES: usize = 5 * 1024 * 1024;

/// In-memory PatientStore with the same unique-email semantics as Postgres.
pub struct MemoryPatientStore {
    patients: Mutex<Vec<Patient>>,
}

impl MemoryPatientStore {
    pub fn new() -> Self {
        Self {
            patients: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PatientStore for MemoryPatientStore {
    async fn insert(&self, patient: NewPatient) -> StoreResult<Patient> {
        let mut patients = self.patients.lock().await;
        if patients.iter().any(|p| p.email == patient.email) {
            return Err(StoreError::DuplicateEmail(patient.email));
        }
        let now = Utc::now();
        let saved = Patient {
            id: Uuid::new_v4(),
            name: patient.name,
            email: patient.email,
            phone_number: patient.phone_number,
            document_photo: patient.document_photo,
            document_photo_filename: patient.document_photo_filename,
            document_photo_content_type: patient.document_photo_content_type,
            created_at: now,
            updated_at: now,
        };
        patients.push(saved.clone());
        Ok(saved)
    }

    async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        Ok(self.patients.lock().await.iter().any(|p| p.email == email))
    }
}

/// Notification observed by the recording notifier.
#[derive(Debug, Clone)]
pub struct SentNotification {
    pub recipient: String,
    pub subject: String,
    pub name: String,
    pub message: String,
}

/// Notifier that records sends on a channel instead of delivering anything.
#[derive(Debug, Clone)]
pub struct RecordingNotifier {
    sender: mpsc::UnboundedSender<SentNotification>,
}

impl RecordingNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SentNotification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, recipient: &str, subject: &str, content: &NotificationContent) -> bool {
        let _ = self.sender.send(SentNotification {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            name: content.name.clone(),
            message: content.message.clone(),
        });
        true
    }
}

/// Test application: server plus the confirmation notifications it dispatches.
pub struct TestApp {
    pub server: TestServer,
    pub notifications: mpsc::UnboundedReceiver<SentNotification>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Wait for the next dispatched confirmation (dispatch is fire-and-forget).
    pub async fn next_notification(&mut self) -> SentNotification {
        tokio::time::timeout(std::time::Duration::from_secs(2), self.notifications.recv())
            .await
            .expect("Timed out waiting for confirmation dispatch")
            .expect("Notification channel closed")
    }
}

fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        database_url: "postgresql://localhost/unused".to_string(),
        db_max_connections: 5,
        db_timeout_seconds: 5,
        max_document_size_bytes: MAX_DOCUMENT_SIZE_BYTES,
        document_allowed_content_types: vec![
            "image/jpeg".to_string(),
            "image/jpg".to_string(),
            "image/png".to_string(),
            "application/pdf".to_string(),
        ],
        notifications_enabled: true,
        confirmation_channel: "email".to_string(),
        smtp_host: None,
        smtp_port: None,
        smtp_user: None,
        smtp_password: None,
        smtp_from: None,
        smtp_tls: true,
    }
}

/// Setup test app with in-memory store and a recording email notifier.
pub async fn setup_test_app() -> TestApp {
    let config = test_config();

    let (recording, notifications) = RecordingNotifier::channel();
    let notifiers = NotifierRegistry::new();
    notifiers
        .register("email", move || recording.clone())
        .await;

    let chain = document_chain(
        config.max_document_size_bytes,
        config.document_allowed_content_types.clone(),
    );

    let state = AppState {
        db: DbState { pool: None },
        registration: RegistrationState {
            store: Arc::new(MemoryPatientStore::new()),
            validation: Arc::new(chain),
            notifiers,
            confirmation_channel: config.confirmation_channel.clone(),
            notifications_enabled: config.notifications_enabled,
        },
        config: config.clone(),
        is_production: false,
    };

    let router = routes::setup_routes(&config, Arc::new(state)).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        notifications,
    }
}

/// Multipart form for POST /api/patients.
pub fn registration_form(
    name: &str,
    email: &str,
    phone_number: &str,
    filename: &str,
    content_type: &str,
    document: Vec<u8>,
) -> MultipartForm {
    MultipartForm::new()
        .add_text("name", name)
        .add_text("email", email)
        .add_text("phone_number", phone_number)
        .add_part(
            "document_photo",
            Part::bytes(bytes::Bytes::from(document))
                .file_name(filename)
                .mime_type(content_type),
        )
}
