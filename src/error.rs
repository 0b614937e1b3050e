use thiserror::Error;

/// Failure modes shared by every windowing structure in the crate.
///
/// All variants carry plain `Copy` payloads so callers can match and branch
/// without allocation in hot paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Construction was asked for a zero-capacity structure.
    #[error("capacity must be at least 1")]
    InvalidCapacity,

    /// A read or removal hit a buffer with no live elements.
    #[error("buffer is empty")]
    EmptyBuffer,

    /// An extremum query hit a monotone queue with no retained samples.
    #[error("queue is empty")]
    EmptyQueue,

    /// A logical index fell outside the live range `0..len`.
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A push hit a full structure whose protocol forbids silent eviction.
    #[error("capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    /// A numeric value was not representable in the target element type.
    #[error("cannot represent {from} value as {to}")]
    Conversion {
        from: &'static str,
        to: &'static str,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
