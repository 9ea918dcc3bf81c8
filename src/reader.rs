use std::io::{ErrorKind, Read};

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::config::DecoderConfig;
use crate::decoder::decode_frame;
use crate::error::{FrameError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads complete frames from any `Read` stream.
///
/// Handles partial reads internally — callers always get complete
/// frames. The internal receive buffer doubles as the decoder's byte
/// source, so a frame is only consumed from it once fully validated.
pub struct FrameReader<T> {
    inner: T,
    buf: BytesMut,
    config: DecoderConfig,
}

impl<T: Read> FrameReader<T> {
    /// Create a frame reader with the default decoder configuration
    /// (4-byte big-endian length prefix, nothing stripped).
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, DecoderConfig::default())
    }

    /// Create a frame reader with an explicit decoder configuration.
    pub fn with_config(inner: T, config: DecoderConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
        }
    }

    /// Read the next complete frame (blocking).
    ///
    /// Returns `Err(FrameError::ConnectionClosed)` when EOF is reached,
    /// whether at a frame boundary or mid-frame.
    pub fn read_frame(&mut self) -> Result<Bytes> {
        loop {
            match decode_frame(&self.config, &mut self.buf) {
                Ok(frame) => {
                    trace!(frame_len = frame.len(), "decoded frame");
                    return Ok(frame);
                }
                Err(err) if err.is_incomplete() => {}
                Err(err) => return Err(err),
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                return Err(FrameError::ConnectionClosed);
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current decoder configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }
}
