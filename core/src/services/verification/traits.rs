//! Traits for email delivery and clock integration

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Trait for the email delivery collaborator
///
/// The wire format of the email is the provider's concern; this seam only
/// carries the contract: deliver a code, report a message id or a reason.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a verification code email
    async fn send_verification_email(
        &self,
        to_email: &str,
        code: &str,
        user_name: &str,
    ) -> Result<String, String>;

    /// Check if the email address format is valid
    fn is_valid_email(&self, email: &str) -> bool;
}

/// Clock seam so expiry checks are deterministic under test
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
