//! Error types of the engine and the deque.

use core::fmt;

use thiserror::Error;

/// Result type of the engine's fallible operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by [`RingIndex`](crate::RingIndex) and its cursor walkers.
///
/// All of them are caller mistakes; a call that fails leaves the engine
/// exactly as it was.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The requested capacity is zero or above [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    #[error("capacity {capacity} is outside 1..={max}", max = crate::MAX_CAPACITY)]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },

    /// A builder was finished without one of its callbacks.
    #[error("missing `{0}` callback")]
    MissingCallback(&'static str),

    /// Head or tail removal on an empty ring.
    #[error("ring is empty")]
    Empty,

    /// An external index that does not address a live element.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was asked for.
        index: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },

    /// `remove_current` without a preceding successful `advance`.
    #[error("no current cursor to remove")]
    NoCurrent,

    /// `advance` after the walker visited every element.
    #[error("cursor walker is exhausted")]
    Exhausted,
}

/// Error value indicating insufficient capacity
///
/// This error only occurs for `RingDeque<_, Saturating>`.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Error)]
#[error("insufficient capacity")]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CapacityError: insufficient capacity")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::IndexOutOfRange { index: 3, len: 2 }.to_string(),
            "index 3 out of range for length 2"
        );
        assert_eq!(Error::MissingCallback("copy").to_string(), "missing `copy` callback");
        assert_eq!(
            Error::InvalidCapacity { capacity: 0 }.to_string(),
            "capacity 0 is outside 1..=2147483645"
        );
    }

    #[test]
    fn test_capacity_error_keeps_element() {
        let err = CapacityError { element: "x" };
        assert_eq!(err.element, "x");
        assert_eq!(err.to_string(), "insufficient capacity");
        assert_eq!(format!("{:?}", err), "CapacityError: insufficient capacity");
    }
}
