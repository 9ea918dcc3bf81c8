/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Not enough buffered bytes for a complete header, length field,
    /// or payload. Retryable: decode again once more bytes arrive. The
    /// byte source has not been consumed from.
    #[error("not enough data to decode a complete frame")]
    UnexpectedEof,

    /// The configured length-field width is not one of the supported
    /// widths.
    #[error("unsupported length field width {0} (expected 1, 2, 3, 4, or 8)")]
    UnsupportedLengthWidth(usize),

    /// The adjusted frame length came out negative.
    #[error("adjusted frame length is negative ({0})")]
    NegativeLength(i64),

    /// The computed length does not fit into the configured field width.
    #[error("length {length} does not fit into a {width}-byte field")]
    LengthOverflow { length: i64, width: usize },

    /// The trailing checksum byte does not match the frame contents.
    #[error("frame checksum mismatch")]
    ChecksumMismatch,

    /// The strip configuration removes more bytes than the frame holds.
    #[error("strip configuration removes {strip} bytes from a {frame_len}-byte frame")]
    InvalidStrip { strip: usize, frame_len: usize },

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection was closed before a complete frame was received.
    #[error("connection closed (incomplete frame)")]
    ConnectionClosed,
}

impl FrameError {
    /// True when decoding failed only because more bytes are needed.
    ///
    /// Everything else is fatal for the frame (and typically the
    /// connection, at the transport layer's discretion).
    pub fn is_incomplete(&self) -> bool {
        matches!(self, FrameError::UnexpectedEof)
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
