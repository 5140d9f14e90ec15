//! phpass — WordPress portable password hashes (`$P$`).
//!
//! ## Algorithm
//! ```text
//! count  = 2^index(iter_pos, ITOA64)          (must not exceed 2^31)
//! digest = MD5(salt || password)
//! repeat count times: digest = MD5(digest || password)
//! cipher = "$P$" || iter_pos || salt || encode64(digest)
//! ```
//! Every round depends on the previous one, so the chain cannot be
//! parallelised.
//!
//! ## Parameters
//! | Slot | Name | Kind | Default |
//! |------|------|------|---------|
//! | 0 | `salt_len` | bits | 64 (also 32), bounds 8..=256 |
//! | 1 | `iter_pos` | one byte | `B` |
//! | 3 | `salt_charset` | byte pairs | `09azAZ..//` |
//!
//! ## Salt sampling
//! Each salt byte is `alphabet[rng.next_u32() & (len - 1)]`. With the
//! default 64-symbol alphabet this is uniform. Other sizes keep the
//! masking bias for compatibility with the reference tool.

use rand_core::RngCore;

use crate::algorithm::Algorithm;
use crate::buffer::ByteBuffer;
use crate::charset::{self, Charset};
use crate::constants::{
    itoa64_index, DEFAULT_ITER_MARKER, DEFAULT_SALT_BITS, ENCODED_DIGEST_LENGTH, ITER_POS_INDEX,
    MAX_ITERATION_COUNT, MD5_DIGEST_LENGTH, PHPASS_PREFIX, SALT_CHARSET_INDEX, SALT_LEN_INDEX,
};
use crate::errors::{CipherError, ParameterError};
use crate::hash::md5_concat;
use crate::params::{Overrides, ParameterSet};

/// Default salt charset in compact pair form: `[0-9][a-z][A-Z][.-.][/-/]`.
pub const DEFAULT_SALT_CHARSET: &[u8] = b"09azAZ..//";

const SALT_LEN_MIN_BITS: i64 = 8;
const SALT_LEN_MAX_BITS: i64 = 256;

/// phpass algorithm instance. Owns its expanded salt alphabet.
#[derive(Debug, Clone, Default)]
pub struct Phpass {
    alphabet: Vec<u8>,
}

impl Phpass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expanded salt alphabet, empty until `init` has run.
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }
}

/// Number of chain rounds encoded by `marker`.
///
/// # Errors
/// `InvalidParameter` if `marker` is not in the ciphertext alphabet,
/// `IterationOverflow` if the count would exceed 2^31.
pub fn iteration_count(marker: u8) -> Result<u64, CipherError> {
    let exponent = itoa64_index(marker).ok_or_else(|| ParameterError::InvalidValue {
        name: "iter_pos".into(),
        value: (marker as char).to_string(),
        reason: "marker is not in ./0-9A-Za-z".into(),
    })?;
    let count = 1u64 << exponent;
    if count > MAX_ITERATION_COUNT {
        return Err(CipherError::IterationOverflow { exponent });
    }
    Ok(count)
}

fn iter_marker(params: &ParameterSet) -> Result<u8, CipherError> {
    single_marker(params.current_bytes(ITER_POS_INDEX)?)
}

fn single_marker(bytes: &[u8]) -> Result<u8, CipherError> {
    match bytes {
        [marker] => Ok(*marker),
        other => Err(ParameterError::InvalidValue {
            name: "iter_pos".into(),
            value: String::from_utf8_lossy(other).into_owned(),
            reason: "expected exactly one character".into(),
        }
        .into()),
    }
}

fn expand_charset(pairs: &[u8]) -> Result<Vec<u8>, CipherError> {
    let charset = Charset::from_pairs(pairs)?;
    let alphabet = charset::expand(&charset, charset.len())?;
    // Salt bytes are copied verbatim into the ciphertext text.
    if let Some(&byte) = alphabet.iter().find(|b| !b.is_ascii()) {
        return Err(ParameterError::InvalidValue {
            name: "salt_charset".into(),
            value: String::from_utf8_lossy(pairs).into_owned(),
            reason: format!("byte {byte:#04x} is not ASCII"),
        }
        .into());
    }
    if !alphabet.len().is_power_of_two() {
        tracing::warn!(
            size = alphabet.len(),
            "salt charset size is not a power of two; salt sampling is biased"
        );
    }
    Ok(alphabet)
}

impl Algorithm for Phpass {
    fn name(&self) -> &'static str {
        "phpass"
    }

    fn init(&mut self, params: &mut ParameterSet) -> Result<(), CipherError> {
        params.clear_all();
        params.declare_int_options(SALT_LEN_INDEX, "salt_len", &[DEFAULT_SALT_BITS, 32])?;
        params.set_bounds(SALT_LEN_INDEX, SALT_LEN_MIN_BITS, SALT_LEN_MAX_BITS)?;
        params.declare_bytes_option(ITER_POS_INDEX, "iter_pos", &[DEFAULT_ITER_MARKER])?;
        params.declare_bytes_option(SALT_CHARSET_INDEX, "salt_charset", DEFAULT_SALT_CHARSET)?;

        self.alphabet = expand_charset(DEFAULT_SALT_CHARSET)?;
        tracing::debug!(alphabet = self.alphabet.len(), "phpass defaults declared");
        Ok(())
    }

    fn configure(
        &mut self,
        params: &mut ParameterSet,
        overrides: &Overrides,
    ) -> Result<(), CipherError> {
        // Derived state is validated before any slot changes.
        let alphabet = match overrides.get("salt_charset") {
            Some(pairs) => Some(expand_charset(pairs.as_bytes())?),
            None => None,
        };
        if let Some(marker) = overrides.get("iter_pos") {
            iteration_count(single_marker(marker.as_bytes())?)?;
        }

        params.apply_override(overrides)?;
        let rounds = iteration_count(iter_marker(params)?)?;

        if let Some(alphabet) = alphabet {
            self.alphabet = alphabet;
        }
        tracing::debug!(
            salt_bits = params.current_int(SALT_LEN_INDEX)?,
            rounds,
            alphabet = self.alphabet.len(),
            "phpass configured"
        );
        Ok(())
    }

    fn generate_salt(
        &self,
        params: &ParameterSet,
        rng: &mut dyn RngCore,
    ) -> Result<ByteBuffer, CipherError> {
        let bits = params.current_int(SALT_LEN_INDEX)?;
        let len = usize::try_from(bits / 8).unwrap_or(0);
        if len == 0 {
            return Err(CipherError::EmptyResult("salt length".into()));
        }
        if self.alphabet.is_empty() {
            return Err(CipherError::EmptyResult("salt charset".into()));
        }

        let mask = self.alphabet.len() - 1;
        let mut salt = ByteBuffer::with_capacity(len);
        for _ in 0..len {
            salt.push(self.alphabet[rng.next_u32() as usize & mask]);
        }
        Ok(salt)
    }

    fn prepare_password(&self, password: &str) -> ByteBuffer {
        ByteBuffer::from_raw_str(password)
    }

    fn compute_hash(
        &self,
        password: &ByteBuffer,
        salt: &ByteBuffer,
        params: &ParameterSet,
    ) -> Result<ByteBuffer, CipherError> {
        let rounds = iteration_count(iter_marker(params)?)?;
        let password = password.as_bytes();

        let mut digest = md5_concat(&[salt.as_bytes(), password]);
        for _ in 0..rounds {
            digest = md5_concat(&[digest.as_slice(), password]);
        }
        Ok(ByteBuffer::from(digest))
    }

    fn format_cipher(
        &self,
        hash: &ByteBuffer,
        salt: &ByteBuffer,
        params: &ParameterSet,
    ) -> Result<String, CipherError> {
        if hash.len() != MD5_DIGEST_LENGTH {
            return Err(CipherError::EmptyResult(format!(
                "hash is {} bytes, expected {MD5_DIGEST_LENGTH}",
                hash.len()
            )));
        }
        let marker = iter_marker(params)?;
        let salt = salt.to_raw_string()?;

        let mut cipher = String::with_capacity(
            PHPASS_PREFIX.len() + 1 + salt.len() + ENCODED_DIGEST_LENGTH,
        );
        cipher.push_str(PHPASS_PREFIX);
        cipher.push(marker as char);
        cipher.push_str(&salt);
        cipher.push_str(&hash.to_crypt64());

        tracing::debug!(
            salt = %salt,
            digest = %hash.to_hex(),
            cipher = %cipher,
            "phpass cipher"
        );
        Ok(cipher)
    }
}
