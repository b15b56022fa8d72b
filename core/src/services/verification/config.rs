//! Configuration for the OTP verification service

use sl_shared::config::VerificationConfig;

use crate::domain::entities::otp_session::{DEFAULT_EXPIRATION_MINUTES, DEFAULT_MAX_RESENDS};

/// Configuration for the OTP verification service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of minutes before a verification code expires
    pub code_expiration_minutes: i64,
    /// Maximum number of resends allowed per verification cycle
    pub max_resends: u32,
    /// Initial value of the advisory resend countdown, in seconds
    pub resend_countdown_seconds: u32,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_resends: DEFAULT_MAX_RESENDS,
            resend_countdown_seconds: 60,
        }
    }
}

impl From<VerificationConfig> for OtpServiceConfig {
    fn from(config: VerificationConfig) -> Self {
        Self {
            code_expiration_minutes: config.code_expiration_minutes,
            max_resends: config.max_resends,
            resend_countdown_seconds: config.resend_countdown_seconds,
        }
    }
}
