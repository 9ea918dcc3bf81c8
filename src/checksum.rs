//! 1-byte additive checksum over frame bytes.
//!
//! Pure functions over byte sequences; the frame layer decides where
//! the checksum byte lives (always last).

use bytes::{BufMut, BytesMut};

/// The mod-256 sum of all bytes in `data`.
pub fn compute(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// Treat the last byte of `data` as the claimed checksum and the rest
/// as the covered bytes. Empty input is never valid: there is no
/// payload to check a claim against.
pub fn verify(data: &[u8]) -> bool {
    match data.split_last() {
        Some((&claimed, covered)) => compute(covered) == claimed,
        None => false,
    }
}

/// Append the checksum of the buffer's current contents.
pub fn append(buf: &mut BytesMut) {
    let sum = compute(buf);
    buf.put_u8(sum);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_wraps_mod_256() {
        assert_eq!(compute(&[]), 0);
        assert_eq!(compute(&[0x55, 0xAA, 0x01, 0x01]), 0x01);
        assert_eq!(compute(&[0xFF, 0x02]), 0x01);
    }

    #[test]
    fn verify_of_appended_is_true() {
        for data in [&b""[..], b"\x00", b"hello", &[0xFF; 300]] {
            let mut buf = BytesMut::from(data);
            append(&mut buf);
            assert!(verify(&buf), "append then verify failed for {data:02X?}");
        }
    }

    #[test]
    fn verify_empty_is_false() {
        assert!(!verify(&[]));
    }

    #[test]
    fn verify_single_byte() {
        // One byte means an empty covered region with sum zero.
        assert!(verify(&[0x00]));
        assert!(!verify(&[0x01]));
    }

    #[test]
    fn bit_flip_is_detected() {
        let mut buf = BytesMut::from(&b"framed payload"[..]);
        append(&mut buf);
        for byte in 0..buf.len() {
            for bit in 0..8 {
                let mut corrupted = buf.to_vec();
                corrupted[byte] ^= 1 << bit;
                assert!(
                    !verify(&corrupted),
                    "flip of byte {byte} bit {bit} went undetected"
                );
            }
        }
    }
}
