//! Email notification service using lettre

use async_trait::async_trait;
use lettre::{SmtpTransport, Transport, transport::smtp::authentication::Credentials};
use serde::Deserialize;

use crate::{Mail, MailSender};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Sender account identity, also used as the `From` address
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    /// Inbox that receives every contact submission
    #[serde(default)]
    pub contact_address: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            contact_address: String::new(),
            from_name: default_from_name(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_name() -> String {
    "JUNGDAM Website".to_string()
}

/// A delivery-critical setting that the operator left empty.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("{0} env missing")]
pub struct MissingSetting(pub &'static str);

/// Addressing resolved from [`EmailConfig`] for one outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub from: String,
    pub to: String,
}

impl EmailConfig {
    /// Resolve sender and recipient, failing on the first missing
    /// delivery-critical value. Nothing here is ever defaulted.
    pub fn envelope(&self) -> Result<Envelope, MissingSetting> {
        if self.contact_address.trim().is_empty() {
            return Err(MissingSetting("TO_EMAIL"));
        }
        if self.smtp_username.trim().is_empty() {
            return Err(MissingSetting("EMAIL_USER"));
        }
        if self.smtp_password.is_empty() {
            return Err(MissingSetting("EMAIL_PASS"));
        }

        Ok(Envelope {
            from: format!("\"{}\" <{}>", self.from_name, self.smtp_username.trim()),
            to: self.contact_address.trim().to_owned(),
        })
    }
}

/// SMTP-backed [`MailSender`]
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::warn!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, submissions will be refused until they are"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.smtp_username,
                "Email service initialized with authentication and TLS"
            );

            // STARTTLS relay, appropriate for port 587
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

#[async_trait]
impl MailSender for EmailService {
    #[tracing::instrument(skip_all, fields(to = %mail.to, subject = %mail.subject, attachments = mail.attachments.len()))]
    async fn send(&self, mail: Mail) -> anyhow::Result<()> {
        tracing::info!("Sending email");

        let message = mail.to_message()?;
        let mailer = self.mailer.clone();

        // lettre's SmtpTransport blocks on network I/O
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmailConfig {
        EmailConfig {
            smtp_username: "site@example.com".to_string(),
            smtp_password: "app-password".to_string(),
            contact_address: "inbox@example.com".to_string(),
            ..EmailConfig::default()
        }
    }

    #[test]
    fn test_envelope_formats_sender() {
        let envelope = config().envelope().unwrap();

        assert_eq!(envelope.from, "\"JUNGDAM Website\" <site@example.com>");
        assert_eq!(envelope.to, "inbox@example.com");
    }

    #[test]
    fn test_envelope_requires_destination() {
        let config = EmailConfig {
            contact_address: " ".to_string(),
            ..config()
        };

        assert_eq!(config.envelope(), Err(MissingSetting("TO_EMAIL")));
    }

    #[test]
    fn test_envelope_requires_credentials() {
        let no_user = EmailConfig {
            smtp_username: String::new(),
            ..config()
        };
        let no_pass = EmailConfig {
            smtp_password: String::new(),
            ..config()
        };

        assert_eq!(no_user.envelope(), Err(MissingSetting("EMAIL_USER")));
        assert_eq!(no_pass.envelope(), Err(MissingSetting("EMAIL_PASS")));
    }

    #[test]
    fn test_service_builds_without_credentials() {
        assert!(EmailService::new(&EmailConfig::default()).is_ok());
    }
}
