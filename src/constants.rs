// DOM hooks and presentation knobs for the web front-end.
// Motion tuning lives in showcase-core.

// Mount points
pub const CAROUSEL_ROOT_ID: &str = "effects-carousel"; // auto-mounted at start when present
pub const DESCRIPTION_ID: &str = "effects-description"; // reused as the label if the page has one

// Markup
pub const CARD_ATTR: &str = "data-effect-card";
pub const INDEX_ATTR: &str = "data-index"; // display index, resolved by the delegated click listener
pub const CARD_SELECTOR: &str = "[data-effect-card]";
pub const VIEWPORT_CLASS: &str = "effects-viewport";
pub const STRIP_CLASS: &str = "effects-strip";
pub const CARD_CLASS: &str = "effect-card";
pub const CARD_NAME_CLASS: &str = "effect-card__name";
pub const LABEL_CLASS: &str = "effects-description";
pub const ACTIVE_CLASS: &str = "is-active";
pub const DRAGGING_CLASS: &str = "is-dragging";

// Strip
pub const STRIP_PADDING_PX: f64 = 24.0; // inline padding on both ends of the row
pub const CARD_HEIGHT_PX: f64 = 110.0; // square tiles
