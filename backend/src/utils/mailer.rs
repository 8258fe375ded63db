use chrono::Utc;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use thiserror::Error;

use crate::config::mail_config::MailConfig;

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("email credentials are not configured")]
    MissingCredentials,
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Sends contact messages somewhere a human will read them.
#[cfg_attr(test, mockall::automock)]
pub trait MailTransport: Send + Sync {
    fn deliver(&self, message: &ContactMessage) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    config: MailConfig,
}

impl SmtpMailer {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn build_message(&self, sender: &str, recipient: &str, contact: &ContactMessage) -> Result<Message, MailError> {
        let from: Mailbox = format!("Portfolio Contact <{}>", sender).parse()?;
        let to: Mailbox = recipient.parse()?;

        let mut builder = Message::builder()
            .from(from)
            .to(to)
            .subject(format!("New contact form submission from {}", contact.name))
            .header(ContentType::TEXT_PLAIN);

        // A bad submitter address only loses the Reply-To header.
        match contact.email.parse::<Mailbox>() {
            Ok(reply_to) => builder = builder.reply_to(reply_to),
            Err(e) => tracing::debug!("Skipping Reply-To for submitter address: {}", e),
        }

        let body = format!(
            "Name: {}\nEmail: {}\nReceived: {}\n\n{}\n",
            contact.name,
            contact.email,
            Utc::now().to_rfc3339(),
            contact.message
        );
        Ok(builder.body(body)?)
    }
}

impl MailTransport for SmtpMailer {
    fn deliver(&self, contact: &ContactMessage) -> Result<(), MailError> {
        let (user, password) = match (&self.config.user, &self.config.password) {
            (Some(user), Some(password)) => (user, password),
            _ => return Err(MailError::MissingCredentials),
        };
        let recipient = self.config.recipient().unwrap_or(user);

        let email = self.build_message(user, recipient, contact)?;
        let transport = SmtpTransport::relay(&self.config.smtp_host)?
            .credentials(Credentials::new(user.clone(), password.clone()))
            .build();
        transport.send(&email)?;

        tracing::info!("Forwarded contact message");
        tracing::debug!("Forwarded contact message from {} to {}", contact.email, recipient);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::mail_config::DEFAULT_SMTP_HOST;

    fn contact(email: &str) -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: email.to_string(),
            message: "Hello there".to_string(),
        }
    }

    fn mailer(user: Option<&str>, password: Option<&str>) -> SmtpMailer {
        SmtpMailer::new(MailConfig {
            user: user.map(str::to_string),
            password: password.map(str::to_string),
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            recipient: None,
        })
    }

    #[test]
    fn missing_credentials_fail_before_connecting() {
        let result = mailer(Some("me@example.com"), None).deliver(&contact("ada@example.com"));
        assert!(matches!(result, Err(MailError::MissingCredentials)));

        let result = mailer(None, None).deliver(&contact("ada@example.com"));
        assert!(matches!(result, Err(MailError::MissingCredentials)));
    }

    #[test]
    fn message_carries_subject_and_reply_to() {
        let mailer = mailer(Some("me@example.com"), Some("secret"));
        let message = mailer
            .build_message("me@example.com", "me@example.com", &contact("ada@example.com"))
            .unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: New contact form submission from Ada"));
        assert!(raw.contains("Reply-To: ada@example.com"));
        assert!(raw.contains("Hello there"));
    }

    #[test]
    fn unparseable_submitter_drops_reply_to() {
        let mailer = mailer(Some("me@example.com"), Some("secret"));
        let message = mailer
            .build_message("me@example.com", "me@example.com", &contact("not an address"))
            .unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(!raw.contains("Reply-To"));
    }

    #[test]
    fn bad_recipient_is_an_address_error() {
        let mailer = mailer(Some("me@example.com"), Some("secret"));
        let result = mailer.build_message("me@example.com", "nope", &contact("ada@example.com"));
        assert!(matches!(result, Err(MailError::Address(_))));
    }
}
