use crate::constants::*;
use crate::error::CarouselError;

/// Geometry and feel of a carousel. `Default` is the reference tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub card_width: f64,
    pub gap: f64,
    pub clone_count: usize,
    pub drag_multiplier: f64,
    pub moved_threshold_px: f64,
    pub min_sample_dt_ms: f64,
    pub min_velocity: f64,
    pub friction: f64,
    pub reference_frame_ms: f64,
    pub max_frame_dt_ms: f64,
    pub snap_delay_ms: f64,
    pub snap_duration_ms: f64,
    pub snap_epsilon_px: f64,
    pub scroll_echo_tolerance_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH_PX,
            gap: CARD_GAP_PX,
            clone_count: CLONE_COUNT,
            drag_multiplier: DRAG_MULTIPLIER,
            moved_threshold_px: MOVED_THRESHOLD_PX,
            min_sample_dt_ms: MIN_SAMPLE_DT_MS,
            min_velocity: MIN_VELOCITY_PX_PER_MS,
            friction: FRICTION_PER_FRAME,
            reference_frame_ms: REFERENCE_FRAME_MS,
            max_frame_dt_ms: MAX_FRAME_DT_MS,
            snap_delay_ms: SNAP_DELAY_MS,
            snap_duration_ms: SNAP_DURATION_MS,
            snap_epsilon_px: SNAP_EPSILON_PX,
            scroll_echo_tolerance_px: SCROLL_ECHO_TOLERANCE_PX,
        }
    }
}

impl CarouselConfig {
    /// Distance between the left edges of two adjacent cards.
    #[inline]
    pub fn pitch(&self) -> f64 {
        self.card_width + self.gap
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        positive("card_width", self.card_width)?;
        non_negative("gap", self.gap)?;
        if self.clone_count < 3 || self.clone_count % 2 == 0 {
            return Err(CarouselError::InvalidConfig {
                field: "clone_count",
                reason: "must be an odd number >= 3",
            });
        }
        positive("drag_multiplier", self.drag_multiplier)?;
        non_negative("moved_threshold_px", self.moved_threshold_px)?;
        positive("min_sample_dt_ms", self.min_sample_dt_ms)?;
        positive("min_velocity", self.min_velocity)?;
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(CarouselError::InvalidConfig {
                field: "friction",
                reason: "must be in (0, 1)",
            });
        }
        positive("reference_frame_ms", self.reference_frame_ms)?;
        positive("max_frame_dt_ms", self.max_frame_dt_ms)?;
        non_negative("snap_delay_ms", self.snap_delay_ms)?;
        positive("snap_duration_ms", self.snap_duration_ms)?;
        non_negative("snap_epsilon_px", self.snap_epsilon_px)?;
        non_negative("scroll_echo_tolerance_px", self.scroll_echo_tolerance_px)?;
        Ok(())
    }
}

// NaN fails both checks.
fn positive(field: &'static str, value: f64) -> Result<(), CarouselError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CarouselError::InvalidConfig {
            field,
            reason: "must be positive",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), CarouselError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CarouselError::InvalidConfig {
            field,
            reason: "must not be negative",
        })
    }
}
