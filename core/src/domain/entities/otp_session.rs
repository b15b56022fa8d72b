//! OTP session entity for email-based signup verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Default maximum number of code resends per verification cycle
pub const DEFAULT_MAX_RESENDS: u32 = 3;

/// State of an OTP session, derived from its fields and the current time.
///
/// `Verified` and `Expired` are terminal for a session instance; a new
/// send always starts a fresh `Issued` session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OtpSessionState {
    /// A code has been issued and may still be verified or resent
    Issued,
    /// The caller accepted a successful verification
    Verified,
    /// The code validity window has elapsed
    Expired,
}

/// OTP session entity for email-based signup verification
///
/// The session is an explicit value owned by the calling flow. All
/// time-dependent checks take `now` as a parameter so behavior is
/// deterministic under test; the service layer supplies its clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpSession {
    /// Unique identifier for this verification session
    pub id: Uuid,

    /// Email address being verified; owns the session
    pub email: String,

    /// Display name used when addressing the verification email
    pub user_name: String,

    /// The current 6-digit verification code
    pub code: String,

    /// Phone number carried for downstream use, not validated here
    pub phone: Option<String>,

    /// Number of resends used in the current cycle
    pub resend_count: u32,

    /// Configured resend ceiling
    pub max_resends: u32,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the current code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the caller accepted a successful verification
    pub verified: bool,
}

impl OtpSession {
    /// Creates a new session for a freshly issued code
    ///
    /// # Arguments
    ///
    /// * `email` - The email address being verified
    /// * `user_name` - Display name used when addressing the email
    /// * `phone` - Optional phone number carried for downstream use
    /// * `code` - The issued 6-digit code
    /// * `now` - Issuance timestamp
    /// * `expiration_minutes` - Minutes until the code expires
    /// * `max_resends` - Resend ceiling for this cycle
    pub fn issue(
        email: String,
        user_name: String,
        phone: Option<String>,
        code: String,
        now: DateTime<Utc>,
        expiration_minutes: i64,
        max_resends: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            user_name,
            code,
            phone,
            resend_count: 0,
            max_resends,
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            verified: false,
        }
    }

    /// Checks if the current code has expired at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Derives the session state at `now`
    pub fn state(&self, now: DateTime<Utc>) -> OtpSessionState {
        if self.verified {
            OtpSessionState::Verified
        } else if self.is_expired(now) {
            OtpSessionState::Expired
        } else {
            OtpSessionState::Issued
        }
    }

    /// Checks whether another resend is allowed in this cycle
    pub fn can_resend(&self) -> bool {
        self.resend_count < self.max_resends
    }

    /// Gets the number of resends left in this cycle (0 if exhausted)
    pub fn resend_attempts_remaining(&self) -> u32 {
        self.max_resends.saturating_sub(self.resend_count)
    }

    /// Compares an input code against the session code in constant time
    ///
    /// This is the match check only; expiry is checked separately by the
    /// service against its clock.
    pub fn code_matches(&self, input_code: &str) -> bool {
        self.code.len() == input_code.len()
            && constant_time_eq(self.code.as_bytes(), input_code.as_bytes())
    }

    /// Replaces the code after a successful resend delivery
    ///
    /// Installs the new code, restarts the expiry window from `now` and
    /// consumes one resend attempt. Callers must check [`can_resend`]
    /// and confirm delivery before invoking this.
    ///
    /// [`can_resend`]: Self::can_resend
    pub fn refresh(&mut self, code: String, now: DateTime<Utc>, expiration_minutes: i64) {
        self.code = code;
        self.expires_at = now + Duration::minutes(expiration_minutes);
        self.resend_count += 1;
    }

    /// Marks the session as verified after the caller accepts the result
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
