use thiserror::Error;

/// Everything that can go wrong inside the engine.
///
/// All variants are local, recoverable conditions reported to the caller;
/// the driver decides whether any of them become user-visible. Conditions
/// the engine can clamp instead (resize limits, stamping onto a grid that is
/// too small) are reported as statuses, not errors.
#[derive(Debug, Error)]
pub enum GridError {
    /// Requested grid dimensions fall outside the allowed range.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Coordinate outside the current grid extent.
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Persisted state failed to decode or failed shape validation.
    #[error("corrupt saved state: {0}")]
    CorruptState(String),

    /// Underlying file read/write failure while saving or loading.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
