//! Mock collaborators for testing the verification service

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::services::verification::traits::{Clock, EmailServiceTrait};

// Mock email service for testing
pub struct MockEmailService {
    pub sent: Arc<Mutex<Vec<SentEmail>>>,
    pub should_fail: bool,
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to_email: String,
    pub code: String,
    pub user_name: String,
}

impl MockEmailService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }

    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|m| m.to_email == email)
            .map(|m| m.code.clone())
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_email(
        &self,
        to_email: &str,
        code: &str,
        user_name: &str,
    ) -> Result<String, String> {
        if self.should_fail {
            return Err("email provider error".to_string());
        }
        self.sent.lock().unwrap().push(SentEmail {
            to_email: to_email.to_string(),
            code: code.to_string(),
            user_name: user_name.to_string(),
        });
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }

    fn is_valid_email(&self, email: &str) -> bool {
        sl_shared::utils::validation::is_valid_email(email)
    }
}

// Mock clock with an adjustable current time
#[derive(Clone)]
pub struct MockClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + duration;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
