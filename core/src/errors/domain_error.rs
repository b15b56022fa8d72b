//! Domain-specific error types for the OTP verification lifecycle
//!
//! Every failure the verification flow can surface is a typed variant the
//! caller inspects; none of these conditions raises an unhandled fault.
//! Catalog lookups never fail and have no error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the OTP verification lifecycle
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OtpError {
    /// Email provider or network error. Recoverable: the caller may retry
    /// by invoking send or resend again.
    #[error("Verification email could not be delivered: {reason}")]
    DeliveryFailure { reason: String },

    /// The resend ceiling for the current cycle has been reached. A new
    /// send starts a fresh cycle.
    #[error("Resend limit reached. Please request a new code")]
    ResendLimitExceeded,

    /// The code validity window has elapsed
    #[error("Verification code has expired. Please request a new code")]
    Expired,

    /// The submitted code does not match the issued code
    #[error("Incorrect verification code. Please try again")]
    Mismatch,

    /// Verify or resend was invoked without a prior successful send
    #[error("No active verification session")]
    NoActiveSession,

    /// The email address failed format validation before dispatch
    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },
}

impl OtpError {
    /// Whether the caller may retry the same operation without starting
    /// a new verification cycle
    pub fn is_recoverable(&self) -> bool {
        matches!(self, OtpError::DeliveryFailure { .. } | OtpError::Mismatch)
    }
}

/// Result type alias for OTP lifecycle operations
pub type OtpResult<T> = Result<T, OtpError>;
