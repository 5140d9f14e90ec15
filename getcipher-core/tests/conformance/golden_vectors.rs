//! Conformance: golden phpass ciphertexts.
//!
//! Vectors live in `tests/vectors/phpass.vectors.json`. Each case fixes
//! the salt so the full ciphertext is reproducible.

use getcipher_core::buffer::ByteBuffer;
use getcipher_core::encoding::to_hex;
use getcipher_core::registry::Registry;
use getcipher_core::{AlgorithmDescriptor, Overrides};
use serde::Deserialize;
use std::path::PathBuf;

// ── Vector schema ───────────────────────────────────────────────

#[derive(Deserialize)]
struct PhpassVectors {
    version: u32,
    cases: Vec<PhpassCase>,
}

#[derive(Deserialize)]
struct PhpassCase {
    name: String,
    password: String,
    iter_pos: String,
    salt: String,
    digest_hex: String,
    expected: String,
}

// ── Helpers ─────────────────────────────────────────────────────

fn load_vectors() -> PhpassVectors {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vectors")
        .join("phpass.vectors.json");
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&data).expect("phpass vectors parse failed")
}

fn descriptor_for(case: &PhpassCase) -> AlgorithmDescriptor {
    let mut desc = Registry::with_defaults().create("phpass").unwrap();
    let overrides: Overrides = [("iter_pos".to_string(), case.iter_pos.clone())]
        .into_iter()
        .collect();
    desc.configure(&overrides)
        .unwrap_or_else(|e| panic!("configure failed for '{}': {e}", case.name));
    desc
}

// ── Conformance: Golden Vector Match ────────────────────────────

#[test]
fn conformance_golden_ciphertexts_match() {
    let vecs = load_vectors();
    assert_eq!(vecs.version, 1, "unexpected vector schema version");
    assert!(vecs.cases.len() >= 2, "expected at least 2 cases");

    for case in &vecs.cases {
        let desc = descriptor_for(case);
        let cipher = desc
            .cipher_with_salt(
                &desc.algorithm().prepare_password(&case.password),
                &ByteBuffer::from_raw_str(&case.salt),
            )
            .unwrap();
        assert_eq!(
            cipher, case.expected,
            "cipher mismatch for case '{}'",
            case.name
        );
    }
}

#[test]
fn conformance_golden_digests_match() {
    for case in &load_vectors().cases {
        let desc = descriptor_for(case);
        let digest = desc
            .algorithm()
            .compute_hash(
                &ByteBuffer::from_raw_str(&case.password),
                &ByteBuffer::from_raw_str(&case.salt),
                desc.params(),
            )
            .unwrap();
        assert_eq!(
            to_hex(digest.as_bytes()),
            case.digest_hex,
            "digest mismatch for case '{}'",
            case.name
        );
    }
}

/// Ciphertext layout: prefix, marker, raw salt, 22 encoded characters.
#[test]
fn conformance_golden_layout() {
    for case in &load_vectors().cases {
        let expected = &case.expected;
        assert!(expected.starts_with("$P$"), "case '{}'", case.name);
        assert_eq!(&expected[3..4], case.iter_pos, "case '{}'", case.name);
        assert_eq!(
            &expected[4..4 + case.salt.len()],
            case.salt,
            "case '{}'",
            case.name
        );
        assert_eq!(
            expected.len(),
            4 + case.salt.len() + 22,
            "case '{}'",
            case.name
        );
    }
}
