//! The byte-source capability the decoder consumes from.

use bytes::{Buf, BytesMut};

/// A readable byte source owned by the transport layer.
///
/// The decoder inspects buffered bytes with [`peek`](ByteSource::peek)
/// and commits a fully validated frame with exactly one
/// [`discard`](ByteSource::discard) call. A failed decode never
/// discards, so the transport can retry once more bytes arrive.
///
/// A single source must not be decoded from by two callers
/// concurrently; the decode call assumes exclusive access to the read
/// cursor for its duration.
pub trait ByteSource {
    /// All currently buffered bytes, without consuming them.
    fn peek(&self) -> &[u8];

    /// Permanently drop the first `n` buffered bytes.
    ///
    /// Callers only discard lengths they have previously peeked.
    fn discard(&mut self, n: usize);
}

/// A `BytesMut` receive buffer is itself a valid source, which is how
/// [`FrameReader`](crate::FrameReader) feeds the decoder.
impl ByteSource for BytesMut {
    fn peek(&self) -> &[u8] {
        self
    }

    fn discard(&mut self, n: usize) {
        self.advance(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_mut_peek_then_discard() {
        let mut buf = BytesMut::from(&[1u8, 2, 3, 4][..]);

        assert_eq!(buf.peek(), &[1, 2, 3, 4]);
        assert_eq!(buf.peek(), &[1, 2, 3, 4]);

        buf.discard(3);
        assert_eq!(buf.peek(), &[4]);
    }
}
