//! Email Service Interface
//!
//! Defines the trait for email service implementations that handle
//! delivering verification codes and other transactional messages.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Subject line used for verification emails
pub const VERIFICATION_EMAIL_SUBJECT: &str = "Your ServiLink verification code";

/// Email service trait for sending transactional messages
///
/// Implementations include:
/// - HTTP transactional email APIs
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email message
    ///
    /// # Arguments
    ///
    /// * `to_email` - The recipient's email address
    /// * `subject` - Message subject line
    /// * `body` - Plain-text message body
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Unique identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Send a verification code email
    ///
    /// Convenience method that formats the verification message according
    /// to the application's standard template.
    async fn send_verification_email(
        &self,
        to_email: &str,
        code: &str,
        user_name: &str,
    ) -> Result<String, InfrastructureError> {
        let body = verification_email_body(code, user_name);
        self.send_email(to_email, VERIFICATION_EMAIL_SUBJECT, &body)
            .await
    }

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Standard plain-text body for a verification email
pub fn verification_email_body(code: &str, user_name: &str) -> String {
    let greeting = if user_name.is_empty() {
        "Hi".to_string()
    } else {
        format!("Hi {}", user_name)
    };
    format!(
        "{},\n\nYour ServiLink verification code is: {}. \
         This code will expire in 5 minutes.\n\n\
         If you did not request this code, you can ignore this email.",
        greeting, code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_email_body_with_name() {
        let body = verification_email_body("123456", "Dana");
        assert!(body.starts_with("Hi Dana,"));
        assert!(body.contains("123456"));
        assert!(body.contains("expire in 5 minutes"));
    }

    #[test]
    fn test_verification_email_body_without_name() {
        let body = verification_email_body("000042", "");
        assert!(body.starts_with("Hi,"));
        assert!(body.contains("000042"));
    }
}
