//! Algorithm interface — the contract every hashing scheme implements.
//!
//! ## Lifecycle
//! ```text
//! init → configure → { generate_salt → prepare_password → compute_hash → format_cipher }*
//! ```
//! `init` and `configure` run once per run and may mutate both the
//! parameter set and the algorithm's own derived state (e.g. an expanded
//! salt alphabet). After that the pair is frozen: the per-password
//! operations take `&self` and `&ParameterSet` only, so a configured
//! descriptor can be shared across threads for reading.

use rand_core::RngCore;

use crate::buffer::ByteBuffer;
use crate::errors::CipherError;
use crate::params::{Overrides, ParameterSet};

/// One hashing scheme.
pub trait Algorithm: Send + Sync {
    /// Canonical registry name.
    fn name(&self) -> &'static str;

    /// Declare every parameter this algorithm uses, with defaults. Slots
    /// the algorithm does not use stay inactive.
    fn init(&mut self, params: &mut ParameterSet) -> Result<(), CipherError>;

    /// Apply external overrides and rebuild any derived state.
    fn configure(
        &mut self,
        params: &mut ParameterSet,
        overrides: &Overrides,
    ) -> Result<(), CipherError>;

    /// Fresh random salt of the configured length.
    fn generate_salt(
        &self,
        params: &ParameterSet,
        rng: &mut dyn RngCore,
    ) -> Result<ByteBuffer, CipherError>;

    /// Turn external text into the bytes the hash routine consumes.
    fn prepare_password(&self, password: &str) -> ByteBuffer;

    /// Core digest computation.
    fn compute_hash(
        &self,
        password: &ByteBuffer,
        salt: &ByteBuffer,
        params: &ParameterSet,
    ) -> Result<ByteBuffer, CipherError>;

    /// Assemble the final ciphertext string.
    fn format_cipher(
        &self,
        hash: &ByteBuffer,
        salt: &ByteBuffer,
        params: &ParameterSet,
    ) -> Result<String, CipherError>;
}

/// An algorithm together with the parameter array it owns.
pub struct AlgorithmDescriptor {
    algorithm: Box<dyn Algorithm>,
    params: ParameterSet,
}

impl std::fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("name", &self.algorithm.name())
            .field("params", &self.params)
            .finish()
    }
}

impl AlgorithmDescriptor {
    /// Wrap `algorithm` and run its `init` against a cleared parameter set.
    pub fn new(mut algorithm: Box<dyn Algorithm>) -> Result<Self, CipherError> {
        let mut params = ParameterSet::new();
        algorithm.init(&mut params)?;
        tracing::debug!(
            algorithm = algorithm.name(),
            parameters = params.active().count(),
            "algorithm initialised"
        );
        Ok(Self { algorithm, params })
    }

    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn algorithm(&self) -> &dyn Algorithm {
        self.algorithm.as_ref()
    }

    /// Apply overrides. On error the descriptor must not be used.
    pub fn configure(&mut self, overrides: &Overrides) -> Result<(), CipherError> {
        self.algorithm.configure(&mut self.params, overrides)
    }

    /// Produce one ciphertext for `password`.
    ///
    /// # Errors
    /// `EmptyResult` naming the stage whose output came back empty, or
    /// whatever the algorithm's own stages report.
    pub fn cipher(&self, password: &str, rng: &mut dyn RngCore) -> Result<String, CipherError> {
        let salt = self.algorithm.generate_salt(&self.params, rng)?;
        non_empty(&salt, "salt")?;

        let password = self.algorithm.prepare_password(password);
        non_empty(&password, "password")?;

        self.cipher_with_salt(&password, &salt)
    }

    /// Hash and format with a caller-chosen salt. Used for reproducing
    /// known ciphertexts.
    pub fn cipher_with_salt(
        &self,
        password: &ByteBuffer,
        salt: &ByteBuffer,
    ) -> Result<String, CipherError> {
        let hash = self.algorithm.compute_hash(password, salt, &self.params)?;
        non_empty(&hash, "hash")?;

        let cipher = self.algorithm.format_cipher(&hash, salt, &self.params)?;
        if cipher.is_empty() {
            return Err(CipherError::EmptyResult("cipher".into()));
        }
        Ok(cipher)
    }
}

fn non_empty(buf: &ByteBuffer, stage: &str) -> Result<(), CipherError> {
    if buf.is_empty() {
        return Err(CipherError::EmptyResult(stage.to_string()));
    }
    Ok(())
}
