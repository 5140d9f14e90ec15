//! Binary-safe byte buffer — the currency for passwords, salts and digests.
//!
//! Logical length is tracked separately from allocated capacity. Appending
//! past capacity doubles it. Reads past the logical length fail with
//! [`CipherError::IndexOutOfRange`] instead of returning stale bytes.
//!
//! Equality is by value: two buffers are equal when they hold the same
//! bytes, regardless of capacity or identity.
//!
//! Contents are zeroized on drop since buffers routinely hold passwords.

use std::ops::Range;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::DEFAULT_BUFFER_CAPACITY;
use crate::encoding;
use crate::errors::CipherError;

/// Growable, owned sequence of bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash, Zeroize, ZeroizeOnDrop)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Empty buffer with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = Self::with_capacity(bytes.len());
        buf.bytes.extend_from_slice(bytes);
        buf
    }

    /// Raw 1:1 conversion from text; no transcoding is applied.
    pub fn from_raw_str(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    /// UCS-2 widening: every UTF-16 code unit is emitted high byte first,
    /// so `"ab"` becomes `00 61 00 62`.
    pub fn from_ucs2(s: &str) -> Self {
        let mut buf = Self::with_capacity(s.len() * 2);
        for unit in s.encode_utf16() {
            for b in unit.to_be_bytes() {
                buf.push(b);
            }
        }
        buf
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Append one byte. When full, capacity doubles.
    pub fn push(&mut self, byte: u8) {
        if self.bytes.len() == self.bytes.capacity() {
            let grow = self.bytes.capacity().max(1);
            self.bytes.reserve_exact(grow);
        }
        self.bytes.push(byte);
    }

    /// New buffer holding `a` followed by `b`, sized to fit both exactly.
    pub fn concat(a: &ByteBuffer, b: &ByteBuffer) -> ByteBuffer {
        let mut out = Self::with_capacity(a.len() + b.len());
        out.bytes.extend_from_slice(&a.bytes);
        out.bytes.extend_from_slice(&b.bytes);
        out
    }

    /// Byte at `index`.
    ///
    /// # Errors
    /// `CipherError::IndexOutOfRange` when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<u8, CipherError> {
        self.bytes
            .get(index)
            .copied()
            .ok_or(CipherError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Bytes in `range`.
    ///
    /// # Errors
    /// `CipherError::IndexOutOfRange` when the range ends past `len()`.
    pub fn slice(&self, range: Range<usize>) -> Result<&[u8], CipherError> {
        let len = self.len();
        if range.end > len || range.start > range.end {
            return Err(CipherError::IndexOutOfRange {
                index: range.end.max(range.start),
                len,
            });
        }
        Ok(&self.bytes[range])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Raw 1:1 conversion to text.
    ///
    /// # Errors
    /// `CipherError::Encoding` if the bytes are not valid UTF-8.
    pub fn to_raw_string(&self) -> Result<String, CipherError> {
        std::str::from_utf8(&self.bytes)
            .map(str::to_owned)
            .map_err(|e| CipherError::Encoding(format!("buffer is not text: {e}")))
    }

    /// phpass base64 rendering (see [`encoding::encode64`]).
    pub fn to_crypt64(&self) -> String {
        encoding::encode64(&self.bytes)
    }

    pub fn to_hex(&self) -> String {
        encoding::to_hex(&self.bytes)
    }
}

impl std::fmt::Debug for ByteBuffer {
    // Contents may be a password; only the shape is printed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for ByteBuffer {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
