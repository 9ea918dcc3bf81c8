use std::io::{ErrorKind, Write};

use bytes::BytesMut;
use tracing::trace;

use crate::config::EncoderConfig;
use crate::encoder::encode_frame;
use crate::error::{FrameError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Writes complete frames to any `Write` stream.
pub struct FrameWriter<T> {
    inner: T,
    buf: BytesMut,
    config: EncoderConfig,
}

impl<T: Write> FrameWriter<T> {
    /// Create a frame writer with the default encoder configuration
    /// (4-byte big-endian length prefix, no header, no checksum).
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, EncoderConfig::default())
    }

    /// Create a frame writer with an explicit encoder configuration.
    pub fn with_config(inner: T, config: EncoderConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
        }
    }

    /// Encode and send one payload as a complete frame (blocking).
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        self.buf.clear();
        encode_frame(&self.config, payload, &mut self.buf)?;
        trace!(frame_len = self.buf.len(), "sending frame");

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(FrameError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
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

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bytes::Bytes;

    use super::*;
    use crate::config::DecoderConfig;
    use crate::decoder::decode_frame;

    #[test]
    fn write_single_frame() {
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        writer.send(b"hello").unwrap();

        let mut wire = BytesMut::from(writer.into_inner().into_inner().as_slice());
        let decoder = DecoderConfig {
            initial_bytes_to_strip: 4,
            ..DecoderConfig::default()
        };
        let body = decode_frame(&decoder, &mut wire).unwrap();
        assert_eq!(body.as_ref(), b"hello");
        assert!(wire.is_empty());
    }

    #[test]
    fn write_frame_with_header_and_checksum() {
        let config = EncoderConfig {
            length_field_width: 1,
            header: Bytes::from_static(&[0x55, 0xAA]),
            append_checksum: true,
            ..EncoderConfig::default()
        };
        let mut writer = FrameWriter::with_config(Cursor::new(Vec::<u8>::new()), config);
        writer.send(&[0x01]).unwrap();

        let wire = writer.into_inner().into_inner();
        assert_eq!(wire, [0x55, 0xAA, 0x01, 0x01, 0x01]);
    }

    #[test]
    fn encode_error_writes_nothing() {
        let config = EncoderConfig {
            length_field_width: 1,
            ..EncoderConfig::default()
        };
        let mut writer = FrameWriter::with_config(Cursor::new(Vec::<u8>::new()), config);
        let err = writer.send(&[0u8; 256]).unwrap_err();
        assert!(matches!(err, FrameError::LengthOverflow { .. }));
        assert!(writer.into_inner().into_inner().is_empty());
    }

    #[test]
    fn short_writes_are_completed() {
        let mut writer = FrameWriter::new(OneBytePerWrite::default());
        writer.send(b"chunked").unwrap();
        let inner = writer.into_inner();
        assert_eq!(inner.written.len(), 4 + 7);
    }

    #[derive(Default)]
    struct OneBytePerWrite {
        written: Vec<u8>,
    }

    impl Write for OneBytePerWrite {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if buf.is_empty() {
                return Ok(0);
            }
            self.written.push(buf[0]);
            Ok(1)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn zero_write_is_connection_closed() {
        let mut writer = FrameWriter::new(AlwaysZero);
        let err = writer.send(b"x").unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
    }

    struct AlwaysZero;

    impl Write for AlwaysZero {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn interrupted_write_retries() {
        let mut writer = FrameWriter::new(InterruptOnce::default());
        writer.send(b"ok").unwrap();
        assert_eq!(writer.get_ref().written.len(), 4 + 2);
    }

    #[derive(Default)]
    struct InterruptOnce {
        interrupted: bool,
        written: Vec<u8>,
    }

    impl Write for InterruptOnce {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
