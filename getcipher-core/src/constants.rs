//! Shared constants — alphabet, ciphertext layout, descriptor capacities.
//!
//! Every value here is part of the ciphertext format recognised by
//! WordPress and hashcat (mode 400). Changing any of them breaks
//! compatibility with existing `$P$` hashes.

/// Ciphertext alphabet used both for the hash encoding and for the
/// iteration marker lookup. Order matters: `.`, `/`, digits, upper, lower.
pub const ITOA64: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Scheme tag that opens every phpass ciphertext.
pub const PHPASS_PREFIX: &str = "$P$";

/// MD5 digest length in bytes.
pub const MD5_DIGEST_LENGTH: usize = 16;

/// Encoded length of a 16-byte digest (⌈16·8/6⌉ sextets, no padding).
pub const ENCODED_DIGEST_LENGTH: usize = 22;

/// Default salt length in bits.
pub const DEFAULT_SALT_BITS: i64 = 64;

/// Default iteration marker (`'B'` → 2^13 rounds).
pub const DEFAULT_ITER_MARKER: u8 = b'B';

/// Largest permitted iteration count (2^31).
pub const MAX_ITERATION_COUNT: u64 = 1 << 31;

/// Number of parameter slots carried by every algorithm descriptor.
pub const MAX_PARAMETERS: usize = 32;

/// Maximum number of advertised options per parameter.
pub const MAX_PARAMETER_OPTIONS: usize = 8;

/// Maximum length of a byte-valued parameter.
pub const MAX_PARAMETER_BYTES: usize = 31;

/// Initial capacity of a fresh [`ByteBuffer`](crate::buffer::ByteBuffer).
pub const DEFAULT_BUFFER_CAPACITY: usize = 64;

/// Slot holding the salt length (bits).
pub const SALT_LEN_INDEX: usize = 0;

/// Slot holding the iteration marker.
pub const ITER_POS_INDEX: usize = 1;

/// Slot reserved for a password length parameter (unused by phpass).
pub const PWD_LEN_INDEX: usize = 2;

/// Slot holding the compact salt charset (`low,high` byte pairs).
pub const SALT_CHARSET_INDEX: usize = 3;

/// Position of `marker` in [`ITOA64`], i.e. its iteration exponent.
pub fn itoa64_index(marker: u8) -> Option<u32> {
    ITOA64.iter().position(|&c| c == marker).map(|i| i as u32)
}
