//! Batch driver — one ciphertext per input line.
//!
//! Pure: no I/O. Lines are processed sequentially in input order, each
//! producing a [`LineOutcome`]. A failing line never stops the batch, and
//! that includes a line whose bytes are not UTF-8.

use rand_core::RngCore;

use crate::algorithm::AlgorithmDescriptor;
use crate::errors::CipherError;

/// Result for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number.
    pub line: usize,
    pub result: Result<String, CipherError>,
}

impl LineOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Split raw file contents into lines the way `str::lines` does, without
/// requiring the contents to be text: `\n` or `\r\n` terminates a line,
/// and a final terminator does not start an extra empty line.
pub fn split_lines(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    data.split_inclusive(|&b| b == b'\n')
        .map(|line| match line.strip_suffix(b"\n") {
            Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
            None => line,
        })
}

/// Cipher every line of `lines` with a configured descriptor.
pub fn cipher_lines<I, L>(
    descriptor: &AlgorithmDescriptor,
    lines: I,
    rng: &mut dyn RngCore,
) -> Vec<LineOutcome>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let result = std::str::from_utf8(raw.as_ref())
                .map_err(|e| CipherError::Encoding(format!("password is not UTF-8: {e}")))
                .and_then(|password| descriptor.cipher(password, rng));
            if let Err(e) = &result {
                tracing::debug!(line = i + 1, code = e.code(), "line failed");
            }
            LineOutcome {
                line: i + 1,
                result,
            }
        })
        .collect()
}
