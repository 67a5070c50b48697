// Host-side tests for the front-end's DOM hooks and presentation constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn ids_and_classes_are_distinct_and_non_empty() {
    let names = [
        CAROUSEL_ROOT_ID,
        DESCRIPTION_ID,
        VIEWPORT_CLASS,
        STRIP_CLASS,
        CARD_CLASS,
        CARD_NAME_CLASS,
        ACTIVE_CLASS,
        DRAGGING_CLASS,
    ];
    for name in names {
        assert!(!name.is_empty());
        assert!(!name.contains(char::is_whitespace), "{name:?}");
    }
    let mut sorted = names.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len());
    assert_ne!(CAROUSEL_ROOT_ID, DESCRIPTION_ID);
}

#[test]
fn card_selector_matches_card_attribute() {
    assert!(CARD_ATTR.starts_with("data-"));
    assert!(INDEX_ATTR.starts_with("data-"));
    assert_eq!(CARD_SELECTOR, format!("[{}]", CARD_ATTR));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn strip_dimensions_are_sane() {
    assert!(STRIP_PADDING_PX >= 0.0);
    assert!(CARD_HEIGHT_PX > 0.0);
}
