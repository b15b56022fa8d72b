//! Mock Email Service Implementation
//!
//! A mock implementation of the email service for development and testing.
//! This implementation logs messages instead of sending them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use sl_shared::utils::validation::{is_valid_email, mask_email};

use super::email_service::EmailService;
use crate::InfrastructureError;

/// Mock email service for development and testing
///
/// This implementation:
/// - Logs email messages instead of sending them
/// - Validates recipient addresses
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
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

        if self.simulate_failure {
            warn!(
                "Mock email service simulating failure for recipient: {}",
                mask_email(to_email)
            );
            return Err(InfrastructureError::Email(
                "Simulated email sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let masked = mask_email(to_email);

        if self.console_output {
            // Console output for development - show full message
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {} (masked: {})", to_email, masked);
            println!("Subject: {}", subject);
            println!("Message ID: {}", message_id);
            println!("Body: {}", body);
            println!("{}\n", "=".repeat(60));
        }

        // Structured logging for production
        info!(
            target: "email_service",
            provider = "mock",
            recipient = %masked,
            message_id = %message_id,
            body_length = body.len(),
            "Email sent successfully (mock)"
        );

        // Simulate network delay
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}
