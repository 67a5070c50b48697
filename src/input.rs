// Pointer and markup helpers for the carousel listeners. No web-sys types here
// so the host-side tests can include this file directly.

const MOUSE: &str = "mouse";
const PRIMARY_MOUSE_BUTTON: i16 = 0;

/// Whether a press may start a drag: any touch or pen contact, or the primary
/// mouse button. Right and middle clicks keep their browser behavior.
#[inline]
pub fn is_drag_button(pointer_type: &str, button: i16) -> bool {
    pointer_type != MOUSE || button == PRIMARY_MOUSE_BUTTON
}

/// Display index stored on a card, if it is a valid index into a strip of
/// `item_count` cards.
#[inline]
pub fn parse_card_index(value: Option<&str>, item_count: usize) -> Option<usize> {
    value?
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|index| *index < item_count)
}

/// Timer delays go to `setTimeout` as whole milliseconds.
#[inline]
pub fn timeout_ms(delay_ms: f64) -> i32 {
    if delay_ms.is_finite() {
        delay_ms.round().clamp(0.0, i32::MAX as f64) as i32
    } else {
        0
    }
}

#[inline]
pub fn px(value: f64) -> String {
    format!("{}px", value)
}
