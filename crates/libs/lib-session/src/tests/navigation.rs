//! # Navigation Tests

use crate::config::GuardConfig;
use crate::navigation::{
    location_of, path_of, return_path_from_query, MemoryNavigator, Navigator, Redirect,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_href_encodes_query_in_return_path() {
    // Arrange
    let redirect = Redirect::to_login(&GuardConfig::default(), "/trade?pair=ETH");

    // Act
    let href = redirect.href();

    // Assert
    assert_eq!(href, "/login?redirect=%2Ftrade%3Fpair%3DETH");
}

#[test]
fn test_return_path_round_trips_through_href() {
    // Arrange
    let config = GuardConfig::default();
    let href = Redirect::to_login(&config, "/trade?pair=ETH").href();
    let (_, query) = href.split_once('?').expect("href carries a query");

    // Act
    let restored = return_path_from_query(query, &config);

    // Assert
    assert_eq!(restored.as_deref(), Some("/trade?pair=ETH"));
}

#[test]
fn test_return_path_accepts_leading_question_mark_and_other_params() {
    let config = GuardConfig::default();

    assert_eq!(
        return_path_from_query("?lang=en&redirect=%2Fprofile", &config).as_deref(),
        Some("/profile")
    );
    assert_eq!(
        return_path_from_query("redirect=/market", &config).as_deref(),
        Some("/market")
    );
}

#[test]
fn test_return_path_rejects_missing_or_off_site_targets() {
    let config = GuardConfig::default();

    let rejected = [
        "",
        "lang=en",
        "redirect=",
        "redirect=https%3A%2F%2Fevil.example",
        "redirect=%2F%2Fevil.example",
        "redirect=%2F%5Cevil.example",
        "redirect=profile",
        "redirect=%2Fprofile%0A",
    ];
    for query in rejected {
        assert_eq!(return_path_from_query(query, &config), None, "query: {query:?}");
    }
}

#[test]
fn test_return_path_rejects_login_screen() {
    let config = GuardConfig::default();

    assert_eq!(return_path_from_query("redirect=%2Flogin", &config), None);
    assert_eq!(return_path_from_query("redirect=%2Flogin%3Fredirect%3D%252F", &config), None);
}

#[test]
fn test_path_of_strips_query_and_fragment() {
    assert_eq!(path_of("/trade?pair=ETH#book"), "/trade");
    assert_eq!(path_of("/market#top"), "/market");
    assert_eq!(path_of("/home"), "/home");
}

#[test]
fn test_memory_navigator_push_back_and_replace() {
    // Arrange
    let navigator = MemoryNavigator::new("/home");
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _watch = {
        let seen = Rc::clone(&seen);
        navigator.watch(Box::new(move |location: &str| seen.borrow_mut().push(location.to_string())))
    };

    // Act
    navigator.push("/market");
    navigator.push("/trade?pair=SOL");
    let went_back = navigator.back();
    navigator.push("/profile");
    navigator.replace("/withdraw");

    // Assert
    assert!(went_back);
    assert_eq!(navigator.entries(), vec!["/home", "/market", "/withdraw"]);
    assert_eq!(navigator.current_path(), "/withdraw");
    assert_eq!(
        *seen.borrow(),
        vec!["/market", "/trade?pair=SOL", "/market", "/profile", "/withdraw"]
    );
}

#[test]
fn test_memory_navigator_back_at_start() {
    let navigator = MemoryNavigator::new("/home");

    assert!(!navigator.back());
    assert_eq!(navigator.location(), "/home");
}

#[test]
fn test_replace_redirect_does_not_grow_history() {
    // Arrange
    let navigator = MemoryNavigator::new("/home");
    navigator.push("/profile");
    let redirect = Redirect::to_login(&GuardConfig::default(), "/profile");

    // Act
    navigator.redirect(&redirect);

    // Assert
    assert_eq!(navigator.entries(), vec!["/home", "/login?redirect=%2Fprofile"]);
    assert_eq!(navigator.current_path(), "/login");
}

#[test]
fn test_current_location_keeps_query_drops_fragment() {
    let navigator = MemoryNavigator::new("/trade?pair=ETH#book");

    assert_eq!(navigator.current_location(), "/trade?pair=ETH");
    assert_eq!(navigator.current_path(), "/trade");
}

#[test]
fn test_location_of_joins_path_and_search() {
    assert_eq!(location_of("/trade", "?pair=ETH"), "/trade?pair=ETH");
    assert_eq!(location_of("/trade", "pair=ETH"), "/trade?pair=ETH");
    assert_eq!(location_of("/market", ""), "/market");
    assert_eq!(location_of("/market", "?"), "/market");
}
