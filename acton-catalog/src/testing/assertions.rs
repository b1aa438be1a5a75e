//! Assertion helpers for listing responses

use axum_test::TestResponse;

/// Assert that the response is the `#listing` fragment alone
///
/// # Panics
///
/// Panics if the body is a full document or does not start with the listing region
pub fn assert_fragment(response: &TestResponse) {
    let body = response.text();
    assert!(
        body.trim_start().starts_with(r#"<div id="listing""#),
        "Expected a #listing fragment, got: {body}"
    );
    assert!(!body.contains("<html"), "Fragment must not contain a document");
}

/// Assert that the response is a full HTML document
///
/// # Panics
///
/// Panics if the body is not a complete page
pub fn assert_full_page(response: &TestResponse) {
    let body = response.text();
    assert!(
        body.starts_with("<!DOCTYPE html>"),
        "Expected a full page, got: {body}"
    );
    assert!(body.contains(r#"id="listing""#), "Page is missing the listing region");
}

/// Assert that exactly `names` are rendered as article cards, in this order
///
/// # Panics
///
/// Panics if the card count differs or a name is missing or out of order
pub fn assert_cards_in_order(response: &TestResponse, names: &[&str]) {
    let body = response.text();
    let cards = body.matches(r#"class="article""#).count();
    assert_eq!(cards, names.len(), "Expected {} cards, found {cards}", names.len());

    let mut last = 0;
    for name in names {
        let needle = format!("<div>{name}</div>");
        let position = body[last..]
            .find(&needle)
            .unwrap_or_else(|| panic!("Card '{name}' missing or out of order"));
        last += position + needle.len();
    }
}
