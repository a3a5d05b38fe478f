//! Tests for alert lifetimes

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::*;

const TTL: Duration = Duration::from_secs(5);

#[test]
fn test_raised_alert_is_visible() {
    let now = Instant::now();
    let mut state = AlertState::new(TTL);

    state.raise(AlertKind::Info, "Verbunden mit Portal", now);

    assert_eq!(state.alerts().len(), 1);
    assert_eq!(state.alerts()[0].message, "Verbunden mit Portal");
    assert_eq!(state.height(), 1);
}

#[test]
fn test_alert_survives_until_just_before_deadline() {
    let now = Instant::now();
    let mut state = AlertState::new(TTL);
    state.raise(AlertKind::Info, "Hinweis", now);

    state.expire(now + Duration::from_millis(4_999));
    assert_eq!(state.alerts().len(), 1);
}

#[test]
fn test_alert_is_gone_at_deadline() {
    let now = Instant::now();
    let mut state = AlertState::new(TTL);
    state.raise(AlertKind::Info, "Hinweis", now);

    state.expire(now + TTL);
    assert!(state.is_empty());
    assert_eq!(state.height(), 0);
}

#[test]
fn test_alerts_expire_independently() {
    let now = Instant::now();
    let mut state = AlertState::new(TTL);

    state.raise(AlertKind::Info, "Erste", now);
    state.raise(AlertKind::Success, "Zweite", now + Duration::from_secs(3));

    // First one is past its deadline, second one is not
    state.expire(now + Duration::from_secs(6));
    assert_eq!(state.alerts().len(), 1);
    assert_eq!(state.alerts()[0].message, "Zweite");

    state.expire(now + Duration::from_secs(8));
    assert!(state.is_empty());
}

#[test]
fn test_alerts_keep_raise_order() {
    let now = Instant::now();
    let mut state = AlertState::new(TTL);

    state.raise(AlertKind::Info, "Erste", now);
    state.raise(AlertKind::Success, "Zweite", now);

    let messages: Vec<&str> = state.alerts().iter().map(|a| a.message.as_str()).collect();
    assert_eq!(messages, vec!["Erste", "Zweite"]);
}

// Every alert disappears within its TTL of being raised, no matter when it
// was raised or how often expiry runs in between.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_alert_never_outlives_its_ttl(
        raise_offset_ms in 0u64..60_000u64,
        check_offset_ms in 0u64..60_000u64,
    ) {
        let start = Instant::now();
        let mut state = AlertState::new(TTL);

        let raised_at = start + Duration::from_millis(raise_offset_ms);
        state.raise(AlertKind::Success, "Test", raised_at);

        let checked_at = start + Duration::from_millis(check_offset_ms);
        state.expire(checked_at);

        if checked_at >= raised_at + TTL {
            prop_assert!(state.is_empty(), "Alert must be gone after its TTL");
        }
    }
}
