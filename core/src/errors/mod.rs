//! Error types for the core domain

pub mod domain_error;

pub use domain_error::{OtpError, OtpResult};
