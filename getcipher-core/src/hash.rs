//! Hashing utilities — MD5 over concatenated inputs.
//!
//! MD5 itself comes from the `md-5` crate. Callers pass the pieces that
//! would be concatenated and the digest is fed incrementally, which yields
//! the same value as hashing the joined buffer.

use md5::{Digest, Md5};

use crate::constants::MD5_DIGEST_LENGTH;

/// Compute `MD5(parts[0] ++ parts[1] ++ ...)`.
pub fn md5_concat(parts: &[&[u8]]) -> [u8; MD5_DIGEST_LENGTH] {
    let mut hasher = Md5::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
