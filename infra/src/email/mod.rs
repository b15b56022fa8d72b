//! Email service integrations for verification codes
//!
//! Supports:
//! - HTTP transactional email API (production)
//! - Mock implementation for development and testing

mod email_service;
mod http_email;
mod http_email_trait_adapter;
mod mock_email;
mod mock_email_trait_adapter;

pub use email_service::{verification_email_body, EmailService, VERIFICATION_EMAIL_SUBJECT};
pub use http_email::{HttpEmailConfig, HttpEmailService};
pub use http_email_trait_adapter::HttpEmailServiceAdapter;
pub use mock_email::MockEmailService;
pub use mock_email_trait_adapter::MockEmailServiceAdapter;
