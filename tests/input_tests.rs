// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn touch_and_pen_always_start_a_drag() {
    for button in [-1, 0, 1, 2] {
        assert!(is_drag_button("touch", button));
        assert!(is_drag_button("pen", button));
    }
}

#[test]
fn only_primary_mouse_button_starts_a_drag() {
    assert!(is_drag_button("mouse", 0));
    assert!(!is_drag_button("mouse", 1)); // middle
    assert!(!is_drag_button("mouse", 2)); // right
}

#[test]
fn card_index_parses_and_bounds_checks() {
    assert_eq!(parse_card_index(Some("0"), 90), Some(0));
    assert_eq!(parse_card_index(Some(" 42 "), 90), Some(42));
    assert_eq!(parse_card_index(Some("89"), 90), Some(89));
    assert_eq!(parse_card_index(Some("90"), 90), None);
    assert_eq!(parse_card_index(Some("-1"), 90), None);
    assert_eq!(parse_card_index(Some("abc"), 90), None);
    assert_eq!(parse_card_index(Some(""), 90), None);
    assert_eq!(parse_card_index(None, 90), None);
}

#[test]
fn timeout_rounds_to_whole_milliseconds() {
    assert_eq!(timeout_ms(150.0), 150);
    assert_eq!(timeout_ms(149.6), 150);
    assert_eq!(timeout_ms(-5.0), 0);
    assert_eq!(timeout_ms(f64::NAN), 0);
    assert_eq!(timeout_ms(f64::INFINITY), 0);
    assert_eq!(timeout_ms(1e12), i32::MAX);
}

#[test]
fn px_formats_css_lengths() {
    assert_eq!(px(110.0), "110px");
    assert_eq!(px(24.5), "24.5px");
}
