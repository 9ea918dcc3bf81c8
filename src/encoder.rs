use bytes::{BufMut, BytesMut};

use crate::checksum;
use crate::config::{pack24, ByteOrder, EncoderConfig};
use crate::error::{FrameError, Result};

/// Encode one payload into a complete frame, appending to `dst`.
///
/// The frame is `header ++ length field ++ payload`, with a trailing
/// additive checksum byte when the configuration asks for one. The
/// length field encodes `payload length + length_adjustment`, plus the
/// field width itself if `length_includes_field_width` is set.
///
/// Nothing is written to `dst` on error.
pub fn encode_frame(config: &EncoderConfig, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    let width = config.length_field_width;
    let mut length = payload.len() as i64 + config.length_adjustment;
    if config.length_includes_field_width {
        length += width as i64;
    }
    if length < 0 {
        return Err(FrameError::NegativeLength(length));
    }

    // Widths 4 and 8 encode truncating (values taken mod 2^32 / 2^64);
    // the narrower widths range-check first.
    match width {
        1 | 2 | 3 => {
            if length >= 1i64 << (8 * width) {
                return Err(FrameError::LengthOverflow { length, width });
            }
        }
        4 | 8 => {}
        other => return Err(FrameError::UnsupportedLengthWidth(other)),
    }

    let start = dst.len();
    dst.reserve(config.header.len() + width + payload.len() + usize::from(config.append_checksum));
    dst.put_slice(&config.header);

    match (width, config.byte_order) {
        (1, _) => dst.put_u8(length as u8),
        (2, ByteOrder::BigEndian) => dst.put_u16(length as u16),
        (2, ByteOrder::LittleEndian) => dst.put_u16_le(length as u16),
        (3, order) => dst.put_slice(&pack24(order, length as u64)),
        (4, ByteOrder::BigEndian) => dst.put_u32(length as u32),
        (4, ByteOrder::LittleEndian) => dst.put_u32_le(length as u32),
        (8, ByteOrder::BigEndian) => dst.put_u64(length as u64),
        (8, ByteOrder::LittleEndian) => dst.put_u64_le(length as u64),
        _ => {}
    }

    dst.put_slice(payload);
    if config.append_checksum {
        let sum = checksum::compute(&dst[start..]);
        dst.put_u8(sum);
    }
    Ok(())
}
