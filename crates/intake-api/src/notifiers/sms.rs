//! SMS confirmation notifier.
//!
//! Placeholder implementation: no carrier integration yet, so sends are
//! logged and reported as delivered.

use async_trait::async_trait;
use intake_core::{NotificationContent, Notifier};

#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotifier;

impl SmsNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    async fn send(&self, recipient: &str, subject: &str, _content: &NotificationContent) -> bool {
        tracing::info!("SMS notification would be sent to {}: {}", recipient, subject);
        true
    }
}
