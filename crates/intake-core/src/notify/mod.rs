//! Confirmation notification channels.
//!
//! Channels implement [`Notifier`] and are looked up by name through the
//! [`NotifierRegistry`]. Delivery is best-effort: `send` reports success as a
//! boolean and never surfaces an error to the registration flow.

mod registry;

pub use registry::NotifierRegistry;

use async_trait::async_trait;

/// Body of a confirmation message. Channels render it in their own format.
#[derive(Debug, Clone)]
pub struct NotificationContent {
    pub name: String,
    pub message: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    #[error("No notifier found for the requested type")]
    NotifierNotFound,
}

/// A delivery channel for patient-facing notifications.
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Deliver one message. Returns whether delivery succeeded. Failures are
    /// logged by the implementation and never propagated as errors.
    async fn send(&self, recipient: &str, subject: &str, content: &NotificationContent) -> bool;
}
