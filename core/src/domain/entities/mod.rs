//! Domain entities representing core business objects.

pub mod otp_session;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use otp_session::{
    OtpSession, OtpSessionState, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES, DEFAULT_MAX_RESENDS,
};
