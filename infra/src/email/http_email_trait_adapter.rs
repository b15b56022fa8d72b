//! HTTP Email Service Trait Adapter
//!
//! Adapts the HTTP email provider onto the core `EmailServiceTrait`,
//! bridging the infrastructure implementation with the domain seam.

use async_trait::async_trait;

use sl_core::services::verification::EmailServiceTrait;

use super::email_service::EmailService;
use super::http_email::{HttpEmailConfig, HttpEmailService};

/// Adapter that implements the core EmailServiceTrait for the HTTP provider
pub struct HttpEmailServiceAdapter {
    inner: HttpEmailService,
}

impl HttpEmailServiceAdapter {
    /// Create a new HTTP email service adapter
    pub fn new(config: HttpEmailConfig) -> Result<Self, crate::InfrastructureError> {
        let inner = HttpEmailService::new(config)?;
        Ok(Self { inner })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, crate::InfrastructureError> {
        let config = HttpEmailConfig::from_env()?;
        Self::new(config)
    }
}

#[async_trait]
impl EmailServiceTrait for HttpEmailServiceAdapter {
    async fn send_verification_email(
        &self,
        to_email: &str,
        code: &str,
        user_name: &str,
    ) -> Result<String, String> {
        self.inner
            .send_verification_email(to_email, code, user_name)
            .await
            .map_err(|e| e.to_string())
    }

    fn is_valid_email(&self, email: &str) -> bool {
        sl_shared::utils::validation::is_valid_email(email)
    }
}
