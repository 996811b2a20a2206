//! Email confirmation codes.
//!
//! This module provides the `ConfirmationCodeService` for generating and verifying
//! the short-lived codes used to confirm email addresses during registration. Codes
//! are stored in memory keyed by email address with a five-minute TTL and are
//! invalidated after successful verification or expiry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

use crate::{error::AppError, service::email::Mailer};

/// Time-to-live for confirmation codes in seconds.
const CODE_TTL_SECONDS: u64 = 300;

/// Stored confirmation code with expiration timestamp.
#[derive(Clone)]
struct PendingCode {
    code: String,
    expires_at: Instant,
}

impl PendingCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Service for managing email confirmation codes.
///
/// Generates six-digit codes, emails them to the address being confirmed,
/// and verifies submissions. One pending code per address; generating a new
/// code replaces any previous one.
#[derive(Clone)]
pub struct ConfirmationCodeService {
    codes: Arc<RwLock<HashMap<String, PendingCode>>>,
}

impl ConfirmationCodeService {
    /// Creates a new service with no pending codes.
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Generates a code for the address and emails it.
    ///
    /// The email is part of the operation here, not best-effort: if the send
    /// fails the code is not stored and the caller sees the error.
    ///
    /// # Arguments
    /// - `email` - Address to confirm
    /// - `mailer` - Outbound email gateway
    ///
    /// # Returns
    /// - `Ok(())` - Code generated, stored, and sent
    /// - `Err(AppError::MailErr)` - The confirmation email could not be sent
    pub async fn send_code(&self, email: &str, mailer: &dyn Mailer) -> Result<(), AppError> {
        let code = generate_code();

        mailer
            .send(
                email,
                "Confirmation Code",
                &format!("Your confirmation code is: {}", code),
            )
            .await?;

        self.codes
            .write()
            .await
            .insert(email.to_string(), PendingCode::new(code));

        Ok(())
    }

    /// Verifies a submitted code for the address.
    ///
    /// A matching, unexpired code is consumed so it cannot be replayed.
    /// Expired codes are removed and fail verification.
    ///
    /// # Returns
    /// - `true` - Code matched and was consumed
    /// - `false` - No pending code, expired, or mismatch
    pub async fn verify_and_consume(&self, email: &str, code: &str) -> bool {
        let mut codes = self.codes.write().await;

        let Some(pending) = codes.get(email) else {
            return false;
        };

        if pending.is_expired() {
            codes.remove(email);
            return false;
        }

        if pending.code != code {
            return false;
        }

        codes.remove(email);
        true
    }
}

fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::email::test_support::RecordingMailer;

    #[tokio::test]
    async fn sent_code_verifies_once() {
        let service = ConfirmationCodeService::new();
        let mailer = RecordingMailer::new();

        service.send_code("reader@example.com", &mailer).await.unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        let code = sent[0].body.rsplit(' ').next().unwrap().to_string();

        assert!(service.verify_and_consume("reader@example.com", &code).await);
        // Consumed: a second submission of the same code fails.
        assert!(!service.verify_and_consume("reader@example.com", &code).await);
    }

    #[tokio::test]
    async fn wrong_code_is_rejected_and_kept() {
        let service = ConfirmationCodeService::new();
        let mailer = RecordingMailer::new();

        service.send_code("reader@example.com", &mailer).await.unwrap();
        let code = mailer.sent()[0].body.rsplit(' ').next().unwrap().to_string();

        assert!(!service.verify_and_consume("reader@example.com", "000000").await);
        // The right code still works after a wrong guess.
        assert!(service.verify_and_consume("reader@example.com", &code).await);
    }

    #[tokio::test]
    async fn failed_send_stores_nothing() {
        let service = ConfirmationCodeService::new();
        let mailer = RecordingMailer::failing();

        assert!(service.send_code("reader@example.com", &mailer).await.is_err());
        assert!(!service.verify_and_consume("reader@example.com", "123456").await);
    }
}
