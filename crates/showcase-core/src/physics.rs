//! Pure motion helpers: pointer velocity sampling, fling decay and the
//! tween used for snapping.
//!
//! Velocities are in pointer pixels per millisecond. A positive velocity means
//! the pointer moves right, which scrolls the strip toward smaller offsets.

use crate::config::CarouselConfig;

/// Last observed pointer sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSample {
    pub position_x: f64,
    pub timestamp_ms: f64,
    pub velocity: f64,
}

impl DragSample {
    pub fn new(position_x: f64, timestamp_ms: f64) -> Self {
        Self {
            position_x,
            timestamp_ms,
            velocity: 0.0,
        }
    }

    /// Sample following `self`; the interval is floored at `min_dt_ms`.
    pub fn advance(&self, position_x: f64, timestamp_ms: f64, min_dt_ms: f64) -> Self {
        let dt = (timestamp_ms - self.timestamp_ms).max(min_dt_ms);
        Self {
            position_x,
            timestamp_ms,
            velocity: (position_x - self.position_x) / dt,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumStep {
    pub velocity: f64,
    pub offset_delta: f64,
}

/// One frame of fling: move by the current velocity, then decay it by
/// `friction` per reference frame.
#[inline]
pub fn momentum_step(velocity: f64, dt_ms: f64, config: &CarouselConfig) -> MomentumStep {
    let dt = dt_ms.max(0.0);
    let offset_delta = -velocity * dt * config.drag_multiplier;
    let decay = config.friction.powf(dt / config.reference_frame_ms);
    MomentumStep {
        velocity: velocity * decay,
        offset_delta,
    }
}

/// Frames a fling starting at `velocity` runs before dropping below the rest
/// threshold, at a fixed `dt_ms`. `None` when the frame delta cannot decay it.
pub fn frames_to_rest(velocity: f64, dt_ms: f64, config: &CarouselConfig) -> Option<usize> {
    if velocity.abs() < config.min_velocity {
        return Some(0);
    }
    if dt_ms <= 0.0 {
        return None;
    }
    let per_frame = config.friction.powf(dt_ms / config.reference_frame_ms);
    let frames = (config.min_velocity / velocity.abs()).ln() / per_frame.ln();
    Some(frames.ceil().max(1.0) as usize)
}

/// Time-based interpolation between two offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1.0),
        }
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.to
    }

    #[inline]
    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }

    pub fn sample(&self, now_ms: f64) -> f64 {
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// Same motion displaced by `delta`, used when the offset wraps mid-flight.
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            from: self.from + delta,
            to: self.to + delta,
            ..*self
        }
    }
}

#[inline]
fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t;
    1.0 - u * u * u
}
