//! Error types for the algokit library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//! - [`WriteRejected`]: Returned by
//!   [`RingBuffer::write`](crate::ds::RingBuffer::write) under
//!   [`WriteMode::PreventOverwrite`](crate::ds::WriteMode::PreventOverwrite)
//!   when the buffer lacks free space for the whole batch.
//!
//! Empty reads and failed searches are not errors; they return `None`.
//!
//! ## Example Usage
//!
//! ```
//! use algokit::ds::{RingBuffer, WriteMode};
//! use algokit::error::WriteRejected;
//!
//! let mut ring = RingBuffer::with_capacity(2);
//! assert_eq!(ring.write(WriteMode::PreventOverwrite, [1, 2]), Ok(0));
//!
//! // No room: the whole batch is rejected and the buffer is left as-is
//! let err = ring.write(WriteMode::PreventOverwrite, [3]).unwrap_err();
//! assert_eq!(err, WriteRejected { requested: 1, available: 0 });
//! assert_eq!(ring.len(), 2);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal container invariants are violated.
///
/// Produced by `check_invariants` methods (e.g.
/// [`RingBuffer::check_invariants`](crate::ds::RingBuffer::check_invariants)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns which invariant failed and the observed state.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// WriteRejected
// ---------------------------------------------------------------------------

/// A ring-buffer write refused because it would have overwritten unread values.
///
/// # Example
///
/// ```
/// use algokit::error::WriteRejected;
///
/// let err = WriteRejected { requested: 4, available: 1 };
/// assert!(err.to_string().contains("4"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteRejected {
    /// Number of values the caller tried to write.
    pub requested: usize,
    /// Free slots at the time of the call.
    pub available: usize,
}

impl fmt::Display for WriteRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "write of {} values rejected: only {} free slots",
            self.requested, self.available
        )
    }
}

impl std::error::Error for WriteRejected {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
