//! Conformance: error code registry stability.

use getcipher_core::errors::{is_valid_error_code, ERROR_KINDS};
use getcipher_core::{CipherError, ParameterError};

#[test]
fn conformance_error_codes_stable() {
    assert_eq!(
        ERROR_KINDS,
        [
            "INVALID_PARAMETER",
            "INVALID_RANGE",
            "INDEX_OUT_OF_RANGE",
            "ITERATION_OVERFLOW",
            "EMPTY_RESULT",
            "ENCODING",
            "UNKNOWN_ALGORITHM",
        ]
    );
    for code in ERROR_KINDS {
        assert!(is_valid_error_code(code));
    }
}

#[test]
fn conformance_fatal_classification() {
    let fatal = [
        CipherError::InvalidParameter(ParameterError::Unknown("x".into())),
        CipherError::InvalidRange { low: 2, high: 1 },
        CipherError::UnknownAlgorithm("x".into()),
    ];
    let per_line = [
        CipherError::IndexOutOfRange { index: 0, len: 0 },
        CipherError::IterationOverflow { exponent: 40 },
        CipherError::EmptyResult("password".into()),
        CipherError::Encoding("x".into()),
    ];
    assert!(fatal.iter().all(CipherError::is_fatal));
    assert!(!per_line.iter().any(CipherError::is_fatal));
}

#[test]
fn conformance_error_is_std_error() {
    let err = CipherError::EmptyResult("salt".into());
    let _: &dyn std::error::Error = &err;
}
