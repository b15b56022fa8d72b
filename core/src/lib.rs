//! # ServiLink Core
//!
//! Core business logic and domain layer for the ServiLink backend.
//! This crate contains domain entities, business services and error types
//! that form the foundation of the application architecture:
//!
//! - OTP verification lifecycle (send, resend, verify, countdown)
//! - Service catalog search for autocomplete

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
