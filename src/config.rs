use bytes::Bytes;

/// Byte order of the length field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    BigEndian,
    LittleEndian,
}

/// Configuration for the encode side of the codec.
///
/// Constructed once per codec instance and shared read-only across
/// every encode call.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Byte order of the length field.
    pub byte_order: ByteOrder,
    /// Width of the length field in bytes: 1, 2, 3, 4, or 8.
    pub length_field_width: usize,
    /// Compensation value added to the payload length before encoding.
    pub length_adjustment: i64,
    /// When true, the length field's own width is added to the encoded
    /// value. This flag affects encoding only; the decode side never
    /// subtracts it (its `length_adjustment` must account for it).
    pub length_includes_field_width: bool,
    /// Fixed bytes prepended before the length field.
    pub header: Bytes,
    /// Append a 1-byte additive checksum over the whole frame.
    pub append_checksum: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::default(),
            length_field_width: 4,
            length_adjustment: 0,
            length_includes_field_width: false,
            header: Bytes::new(),
            append_checksum: false,
        }
    }
}

/// Configuration for the decode side of the codec.
///
/// Deliberately decoupled from [`EncoderConfig`]: the operator keeps
/// the two consistent so that decode inverts encode end-to-end.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Byte order of the length field.
    pub byte_order: ByteOrder,
    /// Bytes to skip (the fixed header) before the length field.
    pub length_field_offset: usize,
    /// Width of the length field in bytes: 1, 2, 3, 4, or 8.
    pub length_field_width: usize,
    /// Compensation value added to the decoded field value to obtain
    /// the number of payload bytes that follow.
    pub length_adjustment: i64,
    /// Bytes dropped from the front of the reassembled frame before it
    /// is returned.
    pub initial_bytes_to_strip: usize,
    /// Bytes dropped from the end of the reassembled frame before it
    /// is returned.
    pub final_bytes_to_strip: usize,
    /// Verify the trailing additive checksum byte.
    pub verify_checksum: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::default(),
            length_field_offset: 0,
            length_field_width: 4,
            length_adjustment: 0,
            initial_bytes_to_strip: 0,
            final_bytes_to_strip: 0,
            verify_checksum: false,
        }
    }
}

/// Pack a 24-bit value into three bytes in the given byte order.
///
/// There is no native 3-byte integer type, so the encoder and decoder
/// share these two helpers to keep the packing symmetric.
pub(crate) fn pack24(order: ByteOrder, value: u64) -> [u8; 3] {
    match order {
        ByteOrder::BigEndian => [(value >> 16) as u8, (value >> 8) as u8, value as u8],
        ByteOrder::LittleEndian => [value as u8, (value >> 8) as u8, (value >> 16) as u8],
    }
}

/// Unpack a 24-bit value from the first three bytes of `b`.
///
/// Caller guarantees `b.len() >= 3`.
pub(crate) fn unpack24(order: ByteOrder, b: &[u8]) -> u64 {
    match order {
        ByteOrder::BigEndian => {
            u64::from(b[2]) | u64::from(b[1]) << 8 | u64::from(b[0]) << 16
        }
        ByteOrder::LittleEndian => {
            u64::from(b[0]) | u64::from(b[1]) << 8 | u64::from(b[2]) << 16
        }
    }
}
