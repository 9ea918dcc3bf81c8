//! Configurable length-field frame codec for byte-stream transports.
//!
//! Turns arbitrary payloads into self-delimiting binary frames and back.
//! Every frame is laid out as:
//!
//! ```text
//! ┌────────────────┬────────────────────┬─────────────┬───────────────┐
//! │ Header         │ Length field       │ Payload     │ Checksum      │
//! │ (fixed bytes)  │ (1/2/3/4/8 bytes,  │             │ (1 byte,      │
//! │                │  BE or LE)         │             │  optional)    │
//! └────────────────┴────────────────────┴─────────────┴───────────────┘
//! ```
//!
//! The length field's value is `payload length + length adjustment`
//! (plus the field's own width when the encoder is configured to include
//! it). The checksum is the mod-256 sum of every preceding frame byte.
//!
//! Encode and decode sides are configured independently via
//! [`EncoderConfig`] and [`DecoderConfig`]; the operator keeps them
//! consistent. Decoding operates against a [`ByteSource`] (peek/discard)
//! and never consumes bytes until a full frame has validated, so a
//! retryable [`FrameError::UnexpectedEof`] always leaves the source
//! untouched.
//!
//! [`FrameReader`] and [`FrameWriter`] adapt the codec to blocking
//! `Read`/`Write` streams. No partial reads, no buffer management in
//! user code.

pub mod checksum;
pub mod config;
pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod reader;
pub mod source;
pub mod writer;

pub use config::{ByteOrder, DecoderConfig, EncoderConfig};
pub use cursor::{Cursor, CursorError};
pub use decoder::decode_frame;
pub use encoder::encode_frame;
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use source::ByteSource;
pub use writer::FrameWriter;
