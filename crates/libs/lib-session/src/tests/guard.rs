//! # Route Guard Tests

use super::*;
use crate::config::GuardConfig;
use crate::guard::{GuardOutcome, Placeholder, RouteGuard};

#[test]
fn test_loading_session_shows_pending_placeholder() {
    // Arrange
    let mut guard = RouteGuard::new(GuardConfig::default());
    let loading = SessionSnapshot::initial();

    // Act
    let decision = guard.evaluate(Some(&loading), "/profile");

    // Assert
    assert_eq!(decision.outcome, GuardOutcome::Loading(Placeholder::Pending));
    assert!(!decision.refresh);
}

#[test]
fn test_signed_out_redirects_to_login_with_return_path() {
    init_tracing();

    // Arrange
    let mut guard = RouteGuard::new(GuardConfig::default());

    // Act
    let decision = guard.evaluate(Some(&signed_out()), "/profile");

    // Assert
    let GuardOutcome::Redirect(redirect) = decision.outcome else {
        panic!("expected a redirect, got {:?}", decision.outcome);
    };
    assert_eq!(redirect.to, "/login");
    assert_eq!(redirect.return_to, "/profile");
    assert!(redirect.replace);
    assert_eq!(redirect.href(), "/login?redirect=%2Fprofile");
    assert!(!decision.refresh);
}

#[test]
fn test_signed_in_renders_and_refreshes_once_per_path() {
    // Arrange
    let mut guard = RouteGuard::new(GuardConfig::default());
    let alice = signed_in("alice");
    let reloading = alice.loading();
    let resettled = reloading.settled(Some(test_user("alice")));

    // Act
    let first = guard.evaluate(Some(&alice), "/home");
    let during_refresh = guard.evaluate(Some(&reloading), "/home");
    let after_refresh = guard.evaluate(Some(&resettled), "/home");
    let next_screen = guard.evaluate(Some(&resettled), "/market");

    // Assert
    assert_eq!(first.outcome, GuardOutcome::Render);
    assert!(first.refresh);
    assert_eq!(during_refresh.outcome, GuardOutcome::Loading(Placeholder::Pending));
    assert!(!during_refresh.refresh);
    assert_eq!(after_refresh.outcome, GuardOutcome::Render);
    assert!(!after_refresh.refresh, "settling the refresh must not trigger another");
    assert_eq!(next_screen.outcome, GuardOutcome::Render);
    assert!(next_screen.refresh);
}

#[test]
fn test_returning_to_a_path_refreshes_again() {
    // Arrange
    let mut guard = RouteGuard::new(GuardConfig::default());
    let alice = signed_in("alice");

    // Act
    let home = guard.evaluate(Some(&alice), "/home").refresh;
    let market = guard.evaluate(Some(&alice), "/market").refresh;
    let home_again = guard.evaluate(Some(&alice), "/home").refresh;

    // Assert
    assert!(home && market && home_again);
}

#[test]
fn test_missing_provider_stays_degraded() {
    init_tracing();

    // Arrange
    let mut guard = RouteGuard::new(GuardConfig::default());

    // Act
    let first = guard.evaluate(None, "/profile");
    let second = guard.evaluate(None, "/market");

    // Assert
    for decision in [first, second] {
        assert_eq!(decision.outcome, GuardOutcome::Loading(Placeholder::Degraded));
        assert!(!decision.refresh);
    }
}

#[test]
fn test_custom_login_path_and_param() {
    // Arrange
    let config = GuardConfig::default()
        .with_login_path("/auth/sign-in")
        .with_return_param("next");
    let mut guard = RouteGuard::new(config);

    // Act
    let decision = guard.evaluate(Some(&signed_out()), "/withdraw");

    // Assert
    let GuardOutcome::Redirect(redirect) = decision.outcome else {
        panic!("expected a redirect, got {:?}", decision.outcome);
    };
    assert_eq!(redirect.href(), "/auth/sign-in?next=%2Fwithdraw");
}

#[test]
fn test_outcome_for_matches_evaluate() {
    // Arrange
    let config = GuardConfig::default();
    let cases = [
        None,
        Some(SessionSnapshot::initial()),
        Some(signed_out()),
        Some(signed_in("bob")),
    ];

    for session in cases {
        let mut guard = RouteGuard::new(config.clone());

        // Act
        let pure = RouteGuard::outcome_for(session.as_ref(), "/trade", &config);
        let decision = guard.evaluate(session.as_ref(), "/trade");

        // Assert
        assert_eq!(pure, decision.outcome);
    }
}

#[test]
fn test_redirect_keeps_query_of_requested_location() {
    // Arrange
    let mut guard = RouteGuard::new(GuardConfig::default());

    // Act
    let decision = guard.evaluate(Some(&signed_out()), "/trade?pair=ETH");

    // Assert
    let GuardOutcome::Redirect(redirect) = decision.outcome else {
        panic!("expected a redirect, got {:?}", decision.outcome);
    };
    assert_eq!(redirect.return_to, "/trade?pair=ETH");
    assert_eq!(redirect.href(), "/login?redirect=%2Ftrade%3Fpair%3DETH");
}

#[test]
fn test_query_change_on_same_path_does_not_refresh() {
    // Arrange
    let mut guard = RouteGuard::new(GuardConfig::default());
    let alice = signed_in("alice");

    // Act
    let first = guard.evaluate(Some(&alice), "/trade?pair=ETH");
    let same_path = guard.evaluate(Some(&alice), "/trade?pair=SOL");

    // Assert
    assert!(first.refresh);
    assert!(!same_path.refresh);
}
