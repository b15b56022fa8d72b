//! Mock Email Service Trait Adapter
//!
//! Adapts the mock email provider onto the core `EmailServiceTrait` so the
//! verification service can run against it in development.

use async_trait::async_trait;

use sl_core::services::verification::EmailServiceTrait;

use super::email_service::EmailService;
use super::mock_email::MockEmailService;

/// Adapter that implements the core EmailServiceTrait for the mock provider
#[derive(Clone, Default)]
pub struct MockEmailServiceAdapter {
    inner: MockEmailService,
}

impl MockEmailServiceAdapter {
    /// Create a new mock email service adapter
    pub fn new() -> Self {
        Self {
            inner: MockEmailService::new(),
        }
    }

    /// Create an adapter over a configured mock service
    pub fn with_inner(inner: MockEmailService) -> Self {
        Self { inner }
    }

    /// Access the underlying mock (message counters etc.)
    pub fn inner(&self) -> &MockEmailService {
        &self.inner
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailServiceAdapter {
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
