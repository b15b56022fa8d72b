//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the ServiLink
//! application. It provides concrete implementations for the external
//! collaborators the core domain depends on:
//!
//! - **Email**: verification email delivery (HTTP API provider and a mock
//!   implementation for development and testing), plus adapters onto the
//!   core delivery trait.

use thiserror::Error;

/// Email delivery module - external email providers
pub mod email;

/// Errors raised by infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Email provider error (network, authentication, rejection)
    #[error("Email service error: {0}")]
    Email(String),

    /// Missing or invalid service configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
