//! Types for verification service results

use crate::domain::entities::otp_session::OtpSession;
use crate::errors::OtpError;

/// Result of a successful send: the fresh session owned by the caller
#[derive(Debug, Clone)]
pub struct SendOtpResult {
    /// The new session; replaces any prior session for this flow
    pub session: OtpSession,
    /// The email message id from the provider
    pub message_id: String,
}

/// Result of a successful resend
#[derive(Debug, Clone)]
pub struct ResendOtpResult {
    /// The email message id from the provider
    pub message_id: String,
    /// Resends left in this cycle after this one
    pub attempts_remaining: u32,
}

/// Outcome of a resend eligibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendEligibility {
    /// Whether another resend is allowed
    pub allowed: bool,
    /// Why it is not allowed, when `allowed` is false
    pub reason: Option<OtpError>,
}

impl ResendEligibility {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn denied(reason: OtpError) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Outcome of a verification check
///
/// Read-only with respect to the session; on `valid` the caller marks the
/// session verified (or drops it) upon acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOtpResult {
    /// Whether the submitted code was accepted
    pub valid: bool,
    /// The rejection reason, when `valid` is false
    pub error: Option<OtpError>,
}

impl VerifyOtpResult {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn rejected(error: OtpError) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }

    /// Short user-facing message for the UI layer, empty when valid
    pub fn message(&self) -> String {
        self.error.as_ref().map(|e| e.to_string()).unwrap_or_default()
    }
}
