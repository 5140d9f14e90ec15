//! Encoding utilities — phpass base64 and hex.
//!
//! The phpass encoding uses the [`ITOA64`] alphabet and packs each 3-byte
//! group little-endian into four sextets, least significant first. A
//! trailing partial group emits only the sextets its bytes reach, so a
//! 16-byte digest becomes exactly 22 characters and nothing is padded.
//! This is not RFC 4648 and there is no decoder.

use crate::constants::ITOA64;

/// Encode bytes with the phpass base64 variant.
pub fn encode64(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);
    for group in data.chunks(3) {
        let mut value = u32::from(group[0]);
        if let Some(&b) = group.get(1) {
            value |= u32::from(b) << 8;
        }
        if let Some(&b) = group.get(2) {
            value |= u32::from(b) << 16;
        }

        out.push(sextet(value));
        out.push(sextet(value >> 6));
        if group.len() > 1 {
            out.push(sextet(value >> 12));
        }
        if group.len() > 2 {
            out.push(sextet(value >> 18));
        }
    }
    out
}

fn sextet(value: u32) -> char {
    ITOA64[(value & 0x3f) as usize] as char
}

/// Encode bytes to lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}
