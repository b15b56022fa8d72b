//! OTP verification configuration

use serde::{Deserialize, Serialize};

/// Configuration for the OTP verification flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of minutes before a verification code expires
    pub code_expiration_minutes: i64,

    /// Maximum number of code resends per verification cycle
    pub max_resends: u32,

    /// Initial value of the advisory resend countdown, in seconds
    #[serde(default = "default_countdown_seconds")]
    pub resend_countdown_seconds: u32,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: 5,
            max_resends: 3,
            resend_countdown_seconds: default_countdown_seconds(),
        }
    }
}

impl VerificationConfig {
    /// Set the code expiration window in minutes
    pub fn with_expiration_minutes(mut self, minutes: i64) -> Self {
        self.code_expiration_minutes = minutes;
        self
    }

    /// Set the resend ceiling per verification cycle
    pub fn with_max_resends(mut self, max_resends: u32) -> Self {
        self.max_resends = max_resends;
        self
    }

    /// Set the advisory countdown duration in seconds
    pub fn with_countdown_seconds(mut self, seconds: u32) -> Self {
        self.resend_countdown_seconds = seconds;
        self
    }

    /// Create from environment variables
    ///
    /// Reads `OTP_EXPIRATION_MINUTES`, `OTP_MAX_RESENDS` and
    /// `OTP_COUNTDOWN_SECONDS`, falling back to defaults when unset
    /// or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_expiration_minutes: std::env::var("OTP_EXPIRATION_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.code_expiration_minutes),
            max_resends: std::env::var("OTP_MAX_RESENDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_resends),
            resend_countdown_seconds: std::env::var("OTP_COUNTDOWN_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.resend_countdown_seconds),
        }
    }
}

fn default_countdown_seconds() -> u32 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_config_default() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_expiration_minutes, 5);
        assert_eq!(config.max_resends, 3);
        assert_eq!(config.resend_countdown_seconds, 60);
    }

    #[test]
    fn test_verification_config_builder() {
        let config = VerificationConfig::default()
            .with_expiration_minutes(10)
            .with_max_resends(5)
            .with_countdown_seconds(30);

        assert_eq!(config.code_expiration_minutes, 10);
        assert_eq!(config.max_resends, 5);
        assert_eq!(config.resend_countdown_seconds, 30);
    }

    #[test]
    fn test_verification_config_serde_defaults() {
        let config: VerificationConfig =
            serde_json::from_str(r#"{"code_expiration_minutes": 2, "max_resends": 1}"#).unwrap();
        assert_eq!(config.code_expiration_minutes, 2);
        assert_eq!(config.resend_countdown_seconds, 60);
    }
}
