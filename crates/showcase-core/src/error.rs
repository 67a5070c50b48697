use thiserror::Error;

/// Reasons a carousel cannot be mounted or re-laid out.
///
/// Runtime events never fail: an event that does not apply to the current
/// state is ignored. Only construction-time input is validated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("effect catalog is empty")]
    EmptyCatalog,
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    #[error("geometry reports {measured} items but the display list has {expected}")]
    GeometryMismatch { expected: usize, measured: usize },
    #[error("viewport width must be positive, got {0}")]
    InvalidViewport(f64),
}
