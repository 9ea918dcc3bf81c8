use bytes::{Buf, Bytes};

use crate::checksum;
use crate::config::{unpack24, ByteOrder, DecoderConfig};
use crate::cursor::Cursor;
use crate::error::{FrameError, Result};
use crate::source::ByteSource;

/// Decode exactly one frame from the front of `source`.
///
/// The decoder is stateless across calls: each invocation either fully
/// parses one frame and commits the consumption with a single
/// `discard`, or fails without consuming anything. On
/// [`FrameError::UnexpectedEof`] the caller retries once more bytes
/// have been buffered; every validation step (length bounds, checksum,
/// strip bounds) runs before the source is touched.
///
/// Returns the reassembled frame with `initial_bytes_to_strip` removed
/// from the front and `final_bytes_to_strip` from the back.
pub fn decode_frame<S: ByteSource>(config: &DecoderConfig, source: &mut S) -> Result<Bytes> {
    let available = source.peek();
    let mut cursor = Cursor::new(available);

    let header_len = config.length_field_offset;
    if header_len > 0 {
        cursor
            .take(header_len)
            .map_err(|_| FrameError::UnexpectedEof)?;
    }

    let field_value = read_length_field(config, &mut cursor)?;

    // The number of payload bytes that follow the length field. The
    // encoder's length_includes_field_width flag plays no part here;
    // the configured adjustment alone reconstructs the payload length.
    let msg_length = i128::from(field_value) + i128::from(config.length_adjustment);
    if msg_length < 0 {
        return Err(FrameError::NegativeLength(msg_length as i64));
    }
    let msg_length = usize::try_from(msg_length).map_err(|_| FrameError::UnexpectedEof)?;
    if msg_length > 0 {
        cursor
            .take(msg_length)
            .map_err(|_| FrameError::UnexpectedEof)?;
    }

    let frame_len = header_len + config.length_field_width + msg_length;
    let frame = &available[..frame_len];

    if config.verify_checksum && !checksum::verify(frame) {
        return Err(FrameError::ChecksumMismatch);
    }

    let strip = config.initial_bytes_to_strip + config.final_bytes_to_strip;
    if strip > frame_len {
        return Err(FrameError::InvalidStrip { strip, frame_len });
    }

    let body = Bytes::copy_from_slice(
        &frame[config.initial_bytes_to_strip..frame_len - config.final_bytes_to_strip],
    );
    source.discard(frame_len);
    Ok(body)
}

/// Read the raw (unadjusted) length field value at the cursor.
fn read_length_field(config: &DecoderConfig, cursor: &mut Cursor<'_>) -> Result<u64> {
    fn take<'a>(cursor: &mut Cursor<'a>, n: usize) -> Result<&'a [u8]> {
        cursor.take(n).map_err(|_| FrameError::UnexpectedEof)
    }

    let order = config.byte_order;
    match config.length_field_width {
        1 => Ok(u64::from(take(cursor, 1)?[0])),
        2 => {
            let mut raw = take(cursor, 2)?;
            Ok(u64::from(match order {
                ByteOrder::BigEndian => raw.get_u16(),
                ByteOrder::LittleEndian => raw.get_u16_le(),
            }))
        }
        3 => Ok(unpack24(order, take(cursor, 3)?)),
        4 => {
            let mut raw = take(cursor, 4)?;
            Ok(u64::from(match order {
                ByteOrder::BigEndian => raw.get_u32(),
                ByteOrder::LittleEndian => raw.get_u32_le(),
            }))
        }
        8 => {
            let mut raw = take(cursor, 8)?;
            Ok(match order {
                ByteOrder::BigEndian => raw.get_u64(),
                ByteOrder::LittleEndian => raw.get_u64_le(),
            })
        }
        other => Err(FrameError::UnsupportedLengthWidth(other)),
    }
}
