//! OTP verification service for email-based signup
//!
//! This module provides the complete verification code workflow:
//! - Code generation and delivery via an email collaborator
//! - Resend with per-cycle throttling
//! - Verification with expiry checks and constant-time comparison
//! - An advisory resend countdown for the UI layer

mod config;
mod countdown;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use countdown::{spawn_countdown, CountdownHandle, ResendCountdown};
pub use service::OtpService;
pub use traits::{Clock, EmailServiceTrait, SystemClock};
pub use types::{ResendEligibility, ResendOtpResult, SendOtpResult, VerifyOtpResult};
