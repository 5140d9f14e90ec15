//! getcipher core — hashcat-compatible password-hash ciphertexts.
//!
//! Given a plaintext password, an algorithm draws a random salt, runs its
//! digest and serialises the result into the canonical ciphertext string.
//! The only scheme shipped today is phpass (`$P$`, WordPress portable
//! hashes), but every stage goes through the [`algorithm::Algorithm`]
//! trait so further schemes plug into the same registry.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | Alphabet, ciphertext layout, slot indices |
//! | [`errors`] | `CipherError` and the error code registry |
//! | [`buffer`] | Binary-safe `ByteBuffer` |
//! | [`encoding`] | phpass base64 variant and hex |
//! | [`hash`] | MD5 wrapper |
//! | [`charset`] | Range-set → salt alphabet expansion |
//! | [`params`] | Parameter descriptor set and overrides |
//! | [`algorithm`] | `Algorithm` trait and `AlgorithmDescriptor` pipeline |
//! | [`phpass`] | The phpass scheme |
//! | [`registry`] | Name → algorithm lookup |
//! | [`batch`] | Per-line batch driver |
//!
//! # Example
//!
//! ```
//! use getcipher_core::registry::Registry;
//! use rand_core::OsRng;
//!
//! let mut desc = Registry::with_defaults().create("phpass").unwrap();
//! desc.configure(&Default::default()).unwrap();
//! let cipher = desc.cipher("password", &mut OsRng).unwrap();
//! assert!(cipher.starts_with("$P$B"));
//! assert_eq!(cipher.len(), 34);
//! ```

/// Format constants shared by every module.
pub mod constants;

/// Error types for getcipher-core operations.
pub mod errors;

/// Binary-safe growable byte buffer.
pub mod buffer;

/// Encoding utilities — phpass base64 and hex.
pub mod encoding;

/// Hashing utilities — MD5.
pub mod hash;

/// Charset range expansion.
pub mod charset;

/// Parameter descriptors and override application.
pub mod params;

/// Algorithm interface and descriptor pipeline.
pub mod algorithm;

/// phpass (`$P$`) algorithm.
pub mod phpass;

/// Algorithm registry.
pub mod registry;

/// Per-line batch processing.
pub mod batch;

pub use algorithm::{Algorithm, AlgorithmDescriptor};
pub use buffer::ByteBuffer;
pub use errors::{CipherError, ParameterError};
pub use params::{Overrides, ParameterSet};
pub use registry::Registry;
