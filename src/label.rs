use showcase_core::EffectItem;
use web_sys as web;

/// Marks the label as a polite live region so screen readers announce the
/// newly centered effect.
#[inline]
pub fn init(label: &web::Element) {
    _ = label.set_attribute("aria-live", "polite");
}

#[inline]
pub fn show(label: &web::Element, effect: &EffectItem) {
    label.set_text_content(Some(&effect.description));
    _ = label.set_attribute("data-effect", &effect.name);
}
