//! HTTP Email Service Implementation
//!
//! This module provides email sending via a transactional email HTTP API
//! (Resend-style JSON endpoint). It implements the EmailService trait for
//! production email delivery.
//!
//! ## Features
//!
//! - Recipient address validation before dispatch
//! - Automatic retry with exponential backoff on transient failures
//! - Request timeouts
//! - Security: email address masking in logs

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use sl_shared::utils::validation::{is_valid_email, mask_email};

use super::email_service::EmailService;
use crate::InfrastructureError;

/// HTTP email service configuration
#[derive(Debug, Clone)]
pub struct HttpEmailConfig {
    /// Base URL of the email API endpoint
    pub api_url: String,
    /// Bearer token for the email API
    pub api_key: String,
    /// Sender address (must be a verified domain with the provider)
    pub from_address: String,
    /// Maximum retry attempts for failed requests
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl HttpEmailConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let api_url = std::env::var("EMAIL_API_URL")
            .map_err(|_| InfrastructureError::Config("EMAIL_API_URL not set".to_string()))?;
        let api_key = std::env::var("EMAIL_API_KEY")
            .map_err(|_| InfrastructureError::Config("EMAIL_API_KEY not set".to_string()))?;
        let from_address = std::env::var("EMAIL_FROM_ADDRESS")
            .map_err(|_| InfrastructureError::Config("EMAIL_FROM_ADDRESS not set".to_string()))?;

        if !is_valid_email(&from_address) {
            return Err(InfrastructureError::Config(
                "EMAIL_FROM_ADDRESS must be a valid email address".to_string(),
            ));
        }

        Ok(Self {
            api_url,
            api_key,
            from_address,
            max_retries: std::env::var("EMAIL_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_delay_ms: std::env::var("EMAIL_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            request_timeout_secs: std::env::var("EMAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Request payload for the email API
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Response payload from the email API
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// HTTP email service implementation
pub struct HttpEmailService {
    client: reqwest::Client,
    config: HttpEmailConfig,
}

impl HttpEmailService {
    /// Create a new HTTP email service
    pub fn new(config: HttpEmailConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        info!(
            "HTTP email service initialized with sender: {}",
            mask_email(&config.from_address)
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = HttpEmailConfig::from_env()?;
        Self::new(config)
    }

    /// Send a message with retry logic
    ///
    /// Retries on network errors and 5xx/429 responses with exponential
    /// backoff. 4xx responses other than 429 are permanent failures.
    async fn send_with_retry(
        &self,
        to_email: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        let payload = SendEmailRequest {
            from: &self.config.from_address,
            to: to_email,
            subject,
            text: body,
        };

        let mut delay = Duration::from_millis(self.config.retry_delay_ms);
        let mut last_error = String::new();

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                warn!(
                    recipient = %mask_email(to_email),
                    attempt = attempt,
                    "Retrying email delivery after {:?}",
                    delay
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }

            let response = self
                .client
                .post(&self.config.api_url)
                .bearer_auth(&self.config.api_key)
                .json(&payload)
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let parsed: SendEmailResponse = resp.json().await.map_err(|e| {
                        InfrastructureError::Email(format!(
                            "Malformed email API response: {}",
                            e
                        ))
                    })?;
                    debug!(
                        recipient = %mask_email(to_email),
                        message_id = %parsed.id,
                        "Email API accepted the message"
                    );
                    return Ok(parsed.id);
                }
                Ok(resp) => {
                    let status = resp.status();
                    let text = resp.text().await.unwrap_or_default();
                    last_error = format!("Email API returned {}: {}", status, text);

                    // Only rate limits and server errors are worth retrying
                    if status.as_u16() != 429 && !status.is_server_error() {
                        error!(
                            recipient = %mask_email(to_email),
                            status = %status,
                            "Permanent email API failure"
                        );
                        return Err(InfrastructureError::Email(last_error));
                    }
                }
                Err(e) => {
                    last_error = format!("Email API request failed: {}", e);
                }
            }
        }

        error!(
            recipient = %mask_email(to_email),
            retries = self.config.max_retries,
            error = %last_error,
            "Email delivery failed after all retries"
        );
        Err(InfrastructureError::Email(last_error))
    }
}

#[async_trait]
impl EmailService for HttpEmailService {
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        if !is_valid_email(to_email) {
            return Err(InfrastructureError::Email(format!(
                "Invalid email address: {}",
                mask_email(to_email)
            )));
        }

        let message_id = self.send_with_retry(to_email, subject, body).await?;

        info!(
            target: "email_service",
            provider = self.provider_name(),
            recipient = %mask_email(to_email),
            message_id = %message_id,
            "Email sent successfully"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "HTTP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> HttpEmailConfig {
        HttpEmailConfig {
            api_url: "https://api.example.test/emails".to_string(),
            api_key: "test-key".to_string(),
            from_address: "noreply@servilink.example".to_string(),
            max_retries: 0,
            retry_delay_ms: 1,
            request_timeout_secs: 1,
        }
    }

    #[test]
    fn test_service_construction() {
        let service = HttpEmailService::new(test_config()).unwrap();
        assert_eq!(service.provider_name(), "HTTP");
    }

    #[tokio::test]
    async fn test_rejects_invalid_recipient_before_dispatch() {
        let service = HttpEmailService::new(test_config()).unwrap();
        let result = service.send_email("nope", "Subject", "Body").await;

        match result {
            Err(InfrastructureError::Email(msg)) => {
                assert!(msg.contains("Invalid email address"));
            }
            other => panic!("Expected Email error, got {:?}", other.map(|_| ())),
        }
    }
}
