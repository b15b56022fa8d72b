//! Main OTP verification service implementation

use std::sync::Arc;

use rand::{rngs::OsRng, RngCore};

use sl_shared::utils::validation::mask_email;

use crate::domain::entities::otp_session::{OtpSession, CODE_LENGTH};
use crate::errors::{OtpError, OtpResult};

use super::config::OtpServiceConfig;
use super::traits::{Clock, EmailServiceTrait, SystemClock};
use super::types::{ResendEligibility, ResendOtpResult, SendOtpResult, VerifyOtpResult};

/// OTP verification service for email-based signup
///
/// Owns no session state: every operation takes or returns the explicit
/// [`OtpSession`] value held by the calling flow. Delivery is delegated to
/// the email collaborator; a session is only created or mutated after the
/// collaborator reports success.
pub struct OtpService<E: EmailServiceTrait, C: Clock = SystemClock> {
    /// Email service for delivering codes
    email_service: Arc<E>,
    /// Clock for issuance and expiry checks
    clock: C,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<E: EmailServiceTrait> OtpService<E, SystemClock> {
    /// Create a service with the wall clock
    pub fn new(email_service: Arc<E>, config: OtpServiceConfig) -> Self {
        Self::with_clock(email_service, SystemClock, config)
    }
}

impl<E: EmailServiceTrait, C: Clock> OtpService<E, C> {
    /// Create a service with an explicit clock (used by tests)
    pub fn with_clock(email_service: Arc<E>, clock: C, config: OtpServiceConfig) -> Self {
        Self {
            email_service,
            clock,
            config,
        }
    }

    /// The configured initial value for the advisory resend countdown
    pub fn countdown_seconds(&self) -> u32 {
        self.config.resend_countdown_seconds
    }

    /// Send a verification code and start a fresh session
    ///
    /// Generates a code, delegates delivery to the email collaborator and,
    /// only if delivery reports success, returns the new session with
    /// `resend_count = 0` and a fresh expiry. The returned session replaces
    /// any prior session the caller holds. Delivery failure leaves no
    /// session behind.
    pub async fn send_otp(
        &self,
        email: &str,
        user_name: &str,
        phone: Option<String>,
    ) -> OtpResult<SendOtpResult> {
        if !self.email_service.is_valid_email(email) {
            tracing::warn!(
                email = %mask_email(email),
                event = "invalid_email",
                "Rejected verification request for malformed email address"
            );
            return Err(OtpError::InvalidEmail {
                email: email.to_string(),
            });
        }

        let code = Self::generate_code();

        let message_id = self
            .email_service
            .send_verification_email(email, &code, user_name)
            .await
            .map_err(|reason| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %reason,
                    event = "otp_delivery_failed",
                    "Failed to deliver verification email"
                );
                OtpError::DeliveryFailure { reason }
            })?;

        let session = OtpSession::issue(
            email.to_string(),
            user_name.to_string(),
            phone,
            code,
            self.clock.now(),
            self.config.code_expiration_minutes,
            self.config.max_resends,
        );

        tracing::info!(
            email = %mask_email(email),
            session_id = %session.id,
            event = "otp_issued",
            "Issued new verification code"
        );

        Ok(SendOtpResult {
            session,
            message_id,
        })
    }

    /// Check whether a resend is currently allowed
    ///
    /// Denied when there is no active session or when the resend ceiling
    /// for the cycle has been reached.
    pub fn can_resend_otp(&self, session: Option<&OtpSession>) -> ResendEligibility {
        match session {
            None => ResendEligibility::denied(OtpError::NoActiveSession),
            Some(s) if !s.can_resend() => {
                ResendEligibility::denied(OtpError::ResendLimitExceeded)
            }
            Some(_) => ResendEligibility::allowed(),
        }
    }

    /// Resend a verification code on the current session
    ///
    /// On delivery success the session's code and expiry are replaced and
    /// the resend counter is incremented. On delivery failure the session
    /// is left untouched, so the previous code remains valid.
    pub async fn resend_otp(
        &self,
        session: Option<&mut OtpSession>,
    ) -> OtpResult<ResendOtpResult> {
        let eligibility = self.can_resend_otp(session.as_deref());
        if let Some(reason) = eligibility.reason {
            tracing::warn!(
                event = "otp_resend_denied",
                reason = %reason,
                "Denied verification code resend"
            );
            return Err(reason);
        }
        // Eligibility implies a session is present
        let session = session.ok_or(OtpError::NoActiveSession)?;

        let code = Self::generate_code();

        let message_id = self
            .email_service
            .send_verification_email(&session.email, &code, &session.user_name)
            .await
            .map_err(|reason| {
                tracing::error!(
                    email = %mask_email(&session.email),
                    session_id = %session.id,
                    error = %reason,
                    event = "otp_delivery_failed",
                    "Failed to deliver resent verification email"
                );
                OtpError::DeliveryFailure { reason }
            })?;

        session.refresh(code, self.clock.now(), self.config.code_expiration_minutes);

        tracing::info!(
            email = %mask_email(&session.email),
            session_id = %session.id,
            resend_count = session.resend_count,
            event = "otp_resent",
            "Resent verification code"
        );

        Ok(ResendOtpResult {
            message_id,
            attempts_remaining: session.resend_attempts_remaining(),
        })
    }

    /// Verify a submitted code against the current session
    ///
    /// Read-only: on acceptance the caller marks the session verified and
    /// drops it. The authoritative expiry check is the session deadline
    /// against this service's clock, never the UI countdown.
    pub fn verify_otp(&self, session: Option<&OtpSession>, input_code: &str) -> VerifyOtpResult {
        let session = match session {
            Some(s) => s,
            None => return VerifyOtpResult::rejected(OtpError::NoActiveSession),
        };

        if session.is_expired(self.clock.now()) {
            tracing::warn!(
                email = %mask_email(&session.email),
                session_id = %session.id,
                event = "otp_expired",
                "Verification attempted on expired code"
            );
            return VerifyOtpResult::rejected(OtpError::Expired);
        }

        if !session.code_matches(input_code) {
            tracing::warn!(
                email = %mask_email(&session.email),
                session_id = %session.id,
                event = "otp_mismatch",
                "Verification code mismatch"
            );
            return VerifyOtpResult::rejected(OtpError::Mismatch);
        }

        tracing::info!(
            email = %mask_email(&session.email),
            session_id = %session.id,
            event = "otp_verified",
            "Verification code accepted"
        );
        VerifyOtpResult::accepted()
    }

    /// Resends left in the current cycle, floored at 0
    pub fn resend_attempts_remaining(&self, session: &OtpSession) -> u32 {
        session.resend_attempts_remaining()
    }

    /// Generate a uniformly random 6-digit verification code
    ///
    /// Uses the OS CSPRNG via rejection sampling, so every code in
    /// `000000..=999999` is equally likely. Leading zeros are preserved.
    pub fn generate_code() -> String {
        let mut rng = OsRng;
        let code = loop {
            let mut bytes = [0u8; 4];
            rng.fill_bytes(&mut bytes);
            let num = u32::from_le_bytes(bytes);
            // Reject values past the largest multiple of 1_000_000 to
            // avoid modulo bias.
            const LIMIT: u32 = (u32::MAX / 1_000_000) * 1_000_000;
            if num < LIMIT {
                break num % 1_000_000;
            }
        };
        debug_assert_eq!(format!("{:06}", code).len(), CODE_LENGTH);
        format!("{:06}", code)
    }
}
