//! Email confirmation notifier backed by SMTP.

use async_trait::async_trait;
use intake_core::{Config, NotificationContent, Notifier};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;

/// Sends registration confirmations over SMTP as HTML mail.
///
/// When SMTP is not configured the notifier still registers; every send then
/// fails, is logged, and reports `false` like any other delivery failure.
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    mailer: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
    from: Option<String>,
}

impl EmailNotifier {
    /// Create the notifier from config. The SMTP transport is built once and shared.
    pub fn from_config(config: &Config) -> Self {
        let Some(host) = config.smtp_host.as_deref() else {
            tracing::debug!("SMTP not configured (SMTP_HOST unset); email sends will fail");
            return Self {
                mailer: None,
                from: None,
            };
        };
        let port = config.smtp_port.unwrap_or(587);
        let from = config.smtp_from.clone().or_else(|| config.smtp_user.clone());

        let builder = if config.smtp_tls {
            match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host) {
                Ok(b) => b,
                Err(e) => {
                    tracing::error!(error = %e, host = %host, "Failed to build SMTP transport");
                    return Self { mailer: None, from };
                }
            }
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        };
        let builder = builder.port(port);
        let builder = if let (Some(user), Some(password)) =
            (config.smtp_user.clone(), config.smtp_password.clone())
        {
            builder.credentials(Credentials::new(user, password))
        } else {
            builder
        };
        tracing::info!(
            host = %host,
            port = port,
            starttls = config.smtp_tls,
            "Email notifier initialized"
        );

        Self {
            mailer: Some(Arc::new(builder.build())),
            from,
        }
    }

    fn render_html(subject: &str, content: &NotificationContent) -> String {
        format!(
            "<html>\n<body>\n<h2>{}</h2>\n<p>Dear {},</p>\n<p>{}</p>\n<p>Best regards,<br>Patient Registration Team</p>\n</body>\n</html>",
            subject, content.name, content.message
        )
    }

    async fn try_send(
        &self,
        recipient: &str,
        subject: &str,
        content: &NotificationContent,
    ) -> Result<(), String> {
        let mailer = self
            .mailer
            .as_ref()
            .ok_or_else(|| "SMTP transport is not configured".to_string())?;
        let from = self
            .from
            .as_deref()
            .ok_or_else(|| "no sender address configured (SMTP_FROM or SMTP_USER)".to_string())?;
        let from_addr: Mailbox = from
            .parse()
            .map_err(|e| format!("invalid sender address: {}", e))?;
        let to_addr: Mailbox = recipient
            .parse()
            .map_err(|e| format!("invalid recipient address: {}", e))?;

        let email = Message::builder()
            .from(from_addr)
            .to(to_addr)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(Self::render_html(subject, content))
            .map_err(|e| e.to_string())?;

        mailer.send(email).await.map_err(|e| e.to_string())?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, recipient: &str, subject: &str, content: &NotificationContent) -> bool {
        match self.try_send(recipient, subject, content).await {
            Ok(()) => {
                tracing::info!("Email notification sent to {}", recipient);
                true
            }
            Err(e) => {
                tracing::error!("Failed to send email notification: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(smtp_host: Option<&str>) -> Config {
        Config {
            server_port: 8000,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            database_url: "postgresql://localhost/test".to_string(),
            db_max_connections: 5,
            db_timeout_seconds: 5,
            max_document_size_bytes: 5 * 1024 * 1024,
            document_allowed_content_types: vec!["image/jpeg".to_string()],
            notifications_enabled: true,
            confirmation_channel: "email".to_string(),
            smtp_host: smtp_host.map(String::from),
            smtp_port: Some(2525),
            smtp_user: Some("mailer@clinic.example".to_string()),
            smtp_password: Some("hunter2".to_string()),
            smtp_from: None,
            smtp_tls: true,
        }
    }

    #[tokio::test]
    async fn send_fails_without_smtp_transport() {
        let notifier = EmailNotifier::from_config(&config(None));
        let content = NotificationContent {
            name: "Jane Doe".to_string(),
            message: "Thank you for registering with our service.".to_string(),
        };
        assert!(!notifier.send("jane@clinic.example", "Registration Confirmation", &content).await);
    }

    #[test]
    fn sender_falls_back_to_smtp_user() {
        let notifier = EmailNotifier::from_config(&config(Some("smtp.clinic.example")));
        assert_eq!(notifier.from.as_deref(), Some("mailer@clinic.example"));
    }

    #[test]
    fn html_body_addresses_the_patient() {
        let content = NotificationContent {
            name: "Jane Doe".to_string(),
            message: "Your information has been received.".to_string(),
        };
        let html = EmailNotifier::render_html("Registration Confirmation", &content);
        assert!(html.contains("<h2>Registration Confirmation</h2>"));
        assert!(html.contains("<p>Dear Jane Doe,</p>"));
        assert!(html.contains("<p>Your information has been received.</p>"));
        assert!(html.contains("Best regards,<br>Patient Registration Team"));
    }
}
