//! Unit tests for the OTP session entity

use chrono::{Duration, Utc};

use crate::domain::entities::otp_session::{
    OtpSession, OtpSessionState, DEFAULT_EXPIRATION_MINUTES, DEFAULT_MAX_RESENDS,
};

fn issue_session() -> OtpSession {
    OtpSession::issue(
        "alice@example.com".to_string(),
        "Alice".to_string(),
        Some("+61412345678".to_string()),
        "123456".to_string(),
        Utc::now(),
        DEFAULT_EXPIRATION_MINUTES,
        DEFAULT_MAX_RESENDS,
    )
}

#[test]
fn test_issue_session() {
    let session = issue_session();

    assert_eq!(session.email, "alice@example.com");
    assert_eq!(session.user_name, "Alice");
    assert_eq!(session.phone.as_deref(), Some("+61412345678"));
    assert_eq!(session.code, "123456");
    assert_eq!(session.resend_count, 0);
    assert_eq!(session.max_resends, DEFAULT_MAX_RESENDS);
    assert!(!session.verified);
    assert_eq!(
        session.expires_at,
        session.created_at + Duration::minutes(DEFAULT_EXPIRATION_MINUTES)
    );
}

#[test]
fn test_state_issued_then_expired() {
    let session = issue_session();
    let now = session.created_at;

    assert_eq!(session.state(now), OtpSessionState::Issued);
    assert!(!session.is_expired(now));

    // Exactly at the deadline the code is still valid
    assert!(!session.is_expired(session.expires_at));

    let after = session.expires_at + Duration::seconds(1);
    assert!(session.is_expired(after));
    assert_eq!(session.state(after), OtpSessionState::Expired);
}

#[test]
fn test_state_verified_is_terminal() {
    let mut session = issue_session();
    session.mark_verified();

    let after = session.expires_at + Duration::seconds(1);
    // Verified wins even past expiry
    assert_eq!(session.state(after), OtpSessionState::Verified);
}

#[test]
fn test_code_matches_exact_only() {
    let session = issue_session();

    assert!(session.code_matches("123456"));
    assert!(!session.code_matches("123457"));
    assert!(!session.code_matches("12345"));
    assert!(!session.code_matches("1234567"));
    assert!(!session.code_matches(""));
}

#[test]
fn test_refresh_replaces_code_and_counts_resend() {
    let mut session = issue_session();
    let later = session.created_at + Duration::seconds(90);

    session.refresh("654321".to_string(), later, DEFAULT_EXPIRATION_MINUTES);

    assert_eq!(session.code, "654321");
    assert_eq!(session.resend_count, 1);
    assert_eq!(
        session.expires_at,
        later + Duration::minutes(DEFAULT_EXPIRATION_MINUTES)
    );
    // Still the same session instance
    assert_eq!(session.state(later), OtpSessionState::Issued);
}

#[test]
fn test_resend_attempts_remaining() {
    let mut session = issue_session();
    assert_eq!(session.resend_attempts_remaining(), DEFAULT_MAX_RESENDS);
    assert!(session.can_resend());

    let now = session.created_at;
    for used in 1..=DEFAULT_MAX_RESENDS {
        session.refresh(format!("{:06}", used), now, DEFAULT_EXPIRATION_MINUTES);
        assert_eq!(
            session.resend_attempts_remaining(),
            DEFAULT_MAX_RESENDS - used
        );
    }

    assert!(!session.can_resend());
    assert_eq!(session.resend_attempts_remaining(), 0);
}

#[test]
fn test_time_until_expiration() {
    let session = issue_session();
    let now = session.created_at;

    assert_eq!(
        session.time_until_expiration(now),
        Duration::minutes(DEFAULT_EXPIRATION_MINUTES)
    );

    let after = session.expires_at + Duration::seconds(30);
    assert_eq!(session.time_until_expiration(after), Duration::zero());
}

#[test]
fn test_serialization_round_trip() {
    let session = issue_session();

    let json = serde_json::to_string(&session).unwrap();
    let deserialized: OtpSession = serde_json::from_str(&json).unwrap();

    assert_eq!(session, deserialized);
}
