// Carousel tuning constants shared by the web front-end and the simulator.

// Layout
pub const CARD_WIDTH_PX: f64 = 110.0; // fixed tile width
pub const CARD_GAP_PX: f64 = 24.0; // spacing between adjacent tiles
pub const CLONE_COUNT: usize = 5; // repetitions of the base list, odd and >= 3

// Drag
pub const DRAG_MULTIPLIER: f64 = 1.15; // scroll px per pointer px
pub const MOVED_THRESHOLD_PX: f64 = 2.0; // past this a press counts as a drag, not a tap
pub const MIN_SAMPLE_DT_MS: f64 = 1.0; // floor for the velocity sampling interval

// Momentum
pub const MIN_VELOCITY_PX_PER_MS: f64 = 0.01; // below this the strip is considered at rest
pub const FRICTION_PER_FRAME: f64 = 0.94; // velocity retained per reference frame
pub const REFERENCE_FRAME_MS: f64 = 16.0;
pub const MAX_FRAME_DT_MS: f64 = 32.0; // long frames (tab switch, jank) count as two

// Snap
pub const SNAP_DELAY_MS: f64 = 150.0; // quiet period before snapping
pub const SNAP_DURATION_MS: f64 = 300.0;
pub const SNAP_EPSILON_PX: f64 = 0.5; // closer than this already counts as centered

// Surface reports are rounded to whole pixels by the DOM
pub const SCROLL_ECHO_TOLERANCE_PX: f64 = 1.0;

// Host frame cadence used by the simulator
pub const SIM_FRAME_INTERVAL_MS: f64 = 16.0;
