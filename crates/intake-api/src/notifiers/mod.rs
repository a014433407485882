//! Built-in confirmation notifiers.

pub mod email;
pub mod sms;

pub use email::EmailNotifier;
pub use sms::SmsNotifier;

use intake_core::{Config, NotifierRegistry};

/// Register the built-in notifier implementations.
///
/// The email notifier is constructed once so the SMTP transport is shared;
/// each resolve hands out a fresh clone of it.
pub async fn register_builtin(registry: &NotifierRegistry, config: &Config) {
    let email = EmailNotifier::from_config(config);
    registry.register("email", move || email.clone()).await;
    registry.register("sms", SmsNotifier::new).await;
}
