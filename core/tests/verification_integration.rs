//! Integration tests exercising the OTP lifecycle through the public API

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sl_core::domain::entities::{OtpSession, OtpSessionState};
use sl_core::errors::OtpError;
use sl_core::services::verification::{
    spawn_countdown, EmailServiceTrait, OtpService, OtpServiceConfig,
};

/// In-memory email collaborator recording every delivery
struct RecordingEmailService {
    outbox: Mutex<Vec<(String, String)>>,
}

impl RecordingEmailService {
    fn new() -> Self {
        Self {
            outbox: Mutex::new(Vec::new()),
        }
    }

    fn last_code(&self) -> Option<String> {
        self.outbox.lock().unwrap().last().map(|(_, c)| c.clone())
    }
}

#[async_trait]
impl EmailServiceTrait for RecordingEmailService {
    async fn send_verification_email(
        &self,
        to_email: &str,
        code: &str,
        _user_name: &str,
    ) -> Result<String, String> {
        self.outbox
            .lock()
            .unwrap()
            .push((to_email.to_string(), code.to_string()));
        Ok(format!("msg-{}", self.outbox.lock().unwrap().len()))
    }

    fn is_valid_email(&self, email: &str) -> bool {
        sl_shared::utils::validation::is_valid_email(email)
    }
}

#[tokio::test]
async fn test_full_signup_verification_flow() {
    let email_service = Arc::new(RecordingEmailService::new());
    let service = OtpService::new(email_service.clone(), OtpServiceConfig::default());

    // Signup form submits: a fresh session is issued
    let sent = service
        .send_otp("dana@example.com", "Dana", Some("+15551234567".to_string()))
        .await
        .expect("send should succeed");
    let mut session: OtpSession = sent.session;
    assert_eq!(session.state(chrono::Utc::now()), OtpSessionState::Issued);

    // User mistypes the code once
    let wrong = if session.code == "999999" { "999998" } else { "999999" };
    let rejected = service.verify_otp(Some(&session), wrong);
    assert!(!rejected.valid);
    assert_eq!(rejected.error, Some(OtpError::Mismatch));
    assert!(!rejected.message().is_empty());

    // User asks for a new code; the session self-transitions
    let resent = service.resend_otp(Some(&mut session)).await.unwrap();
    assert_eq!(resent.attempts_remaining, session.max_resends - 1);
    assert_eq!(session.state(chrono::Utc::now()), OtpSessionState::Issued);

    // The code on file with the provider is the one that verifies
    let delivered = email_service.last_code().unwrap();
    assert_eq!(delivered, session.code);
    let accepted = service.verify_otp(Some(&session), &delivered);
    assert!(accepted.valid);

    // The flow accepts and the session becomes terminal
    session.mark_verified();
    assert_eq!(session.state(chrono::Utc::now()), OtpSessionState::Verified);
}

#[tokio::test]
async fn test_new_send_starts_fresh_cycle_after_exhaustion() {
    let email_service = Arc::new(RecordingEmailService::new());
    let service = OtpService::new(email_service.clone(), OtpServiceConfig::default());

    let sent = service
        .send_otp("dana@example.com", "Dana", None)
        .await
        .unwrap();
    let mut session = sent.session;

    for _ in 0..session.max_resends {
        service.resend_otp(Some(&mut session)).await.unwrap();
    }
    assert_eq!(
        service.resend_otp(Some(&mut session)).await.unwrap_err(),
        OtpError::ResendLimitExceeded
    );

    // A new send replaces the exhausted session with a fresh cycle
    let fresh = service
        .send_otp("dana@example.com", "Dana", None)
        .await
        .unwrap();
    assert_ne!(fresh.session.id, session.id);
    assert_eq!(fresh.session.resend_count, 0);
    assert!(service.can_resend_otp(Some(&fresh.session)).allowed);
}

#[tokio::test(start_paused = true)]
async fn test_countdown_is_advisory_only() {
    let email_service = Arc::new(RecordingEmailService::new());
    let service = OtpService::new(email_service.clone(), OtpServiceConfig::default());

    let sent = service
        .send_otp("dana@example.com", "Dana", None)
        .await
        .unwrap();

    // Drive a short countdown to completion
    let handle = spawn_countdown(2);
    let mut rx = handle.subscribe();
    while *rx.borrow() > 0 {
        rx.changed().await.unwrap();
    }
    assert!(handle.can_resend());

    // The countdown reaching zero has no bearing on code validity: the
    // authoritative check is the session deadline.
    let result = service.verify_otp(Some(&sent.session), &sent.session.code);
    assert!(result.valid);
}
