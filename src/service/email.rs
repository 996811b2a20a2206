//! Outbound email gateway.
//!
//! All email leaves through the `Mailer` trait so the moderation console and
//! confirmation flow can be tested with a recording implementation instead of
//! a live SMTP connection. The production implementation is a lettre
//! STARTTLS transport configured from the environment.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::{config::Config, error::AppError};

/// Errors from building or sending an email.
#[derive(Error, Debug)]
pub enum MailError {
    /// Recipient or sender address failed to parse.
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("Failed to build email message: {0}")]
    Build(#[from] lettre::error::Error),

    /// The SMTP transport rejected or failed the send.
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Outbound email sender.
///
/// Implementations must be safe to share across tasks; the application holds
/// one instance behind an `Arc`.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends a plain-text email.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

/// Production mailer over an async SMTP transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    /// Builds the mailer from SMTP configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(MailError::from)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        let sender = config
            .smtp_sender
            .parse::<Mailbox>()
            .map_err(MailError::from)?;

        Ok(Self { transport, sender })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.transport.send(message).await?;

        Ok(())
    }
}

#[cfg(test)]
pub mod test_support {
    //! Recording mailer for tests.

    use std::sync::Mutex;

    use super::{async_trait, MailError, Mailer};

    /// One captured outbound email.
    #[derive(Debug, Clone, PartialEq)]
    pub struct SentMail {
        pub to: String,
        pub subject: String,
        pub body: String,
    }

    /// Mailer that records every send instead of talking to SMTP.
    ///
    /// Construct with `failing()` to make every send return an error, for
    /// exercising the best-effort notification paths.
    pub struct RecordingMailer {
        sent: Mutex<Vec<SentMail>>,
        fail: bool,
    }

    impl RecordingMailer {
        pub fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        /// Snapshot of everything sent so far.
        pub fn sent(&self) -> Vec<SentMail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::Address(
                    "not an address".parse::<lettre::Address>().unwrap_err(),
                ));
            }

            self.sent.lock().unwrap().push(SentMail {
                to: to.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });

            Ok(())
        }
    }
}
