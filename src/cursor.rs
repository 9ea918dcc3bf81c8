//! Sequential, consuming view over a byte slice.
//!
//! Decode-only scaffolding: a [`Cursor`] is created fresh over the
//! currently buffered bytes for each decode attempt and never reused
//! across frames.

/// Error from a failed [`Cursor::take`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// A zero-length take is invalid.
    #[error("zero-length take is invalid")]
    InvalidLength,
    /// The take exceeds the remaining unread bytes.
    #[error("take exceeds remaining buffer length")]
    InsufficientData,
}

/// A view over a byte slice with take-next-N-or-fail semantics.
///
/// On success exactly `n` bytes move from the unread region into the
/// returned slice; on failure the cursor is unchanged. The returned
/// slices borrow the underlying buffer, no copies are made.
#[derive(Debug)]
pub struct Cursor<'a> {
    rest: &'a [u8],
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { rest: buf }
    }

    /// Consume and return the next `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], CursorError> {
        if n == 0 {
            return Err(CursorError::InvalidLength);
        }
        if n > self.rest.len() {
            return Err(CursorError::InsufficientData);
        }
        let (taken, rest) = self.rest.split_at(n);
        self.rest = rest;
        Ok(taken)
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }
}
