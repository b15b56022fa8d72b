//! Configuration module with business-specific sub-modules
//!
//! - `verification` - OTP verification lifecycle configuration

pub mod verification;

pub use verification::VerificationConfig;
