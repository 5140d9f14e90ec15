//! Charset expansion — compact range sets into a flat salt alphabet.
//!
//! A charset is stored as consecutive `low, high` byte pairs, so the
//! default phpass set `[0-9][a-z][A-Z][.-.][/-/]` travels as `09azAZ..//`.
//! [`expand`] walks the ranges in order and each range in ascending byte
//! order, dropping bytes an earlier range already produced. Identical
//! input always yields a byte-identical alphabet.

use crate::errors::{CipherError, ParameterError};

/// Inclusive byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetRange {
    pub low: u8,
    pub high: u8,
}

impl CharsetRange {
    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    /// Range covering exactly one byte.
    pub const fn single(byte: u8) -> Self {
        Self::new(byte, byte)
    }
}

/// Ordered list of ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charset {
    ranges: Vec<CharsetRange>,
}

impl Charset {
    pub fn new(ranges: Vec<CharsetRange>) -> Self {
        Self { ranges }
    }

    /// Parse the compact pair form (`09azAZ..//`).
    ///
    /// # Errors
    /// `InvalidParameter` if `pairs` is empty or has odd length. Range
    /// ordering is checked later by [`expand`].
    pub fn from_pairs(pairs: &[u8]) -> Result<Self, CipherError> {
        if pairs.is_empty() || pairs.len() % 2 != 0 {
            return Err(ParameterError::InvalidValue {
                name: "salt_charset".into(),
                value: String::from_utf8_lossy(pairs).into_owned(),
                reason: "expected one or more low/high byte pairs".into(),
            }
            .into());
        }
        Ok(Self::new(
            pairs
                .chunks_exact(2)
                .map(|p| CharsetRange::new(p[0], p[1]))
                .collect(),
        ))
    }

    /// Compact pair form, inverse of [`Charset::from_pairs`].
    pub fn to_pairs(&self) -> Vec<u8> {
        self.ranges.iter().flat_map(|r| [r.low, r.high]).collect()
    }

    pub fn ranges(&self) -> &[CharsetRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Expand the first `active` ranges of `charset` into a flat alphabet.
///
/// # Errors
/// `CipherError::InvalidRange` for the first honored range with
/// `low > high`.
pub fn expand(charset: &Charset, active: usize) -> Result<Vec<u8>, CipherError> {
    let mut seen = [false; 256];
    let mut alphabet = Vec::new();

    for range in charset.ranges.iter().take(active) {
        if range.low > range.high {
            return Err(CipherError::InvalidRange {
                low: range.low,
                high: range.high,
            });
        }
        for byte in range.low..=range.high {
            if !seen[byte as usize] {
                seen[byte as usize] = true;
                alphabet.push(byte);
            }
        }
    }

    Ok(alphabet)
}
