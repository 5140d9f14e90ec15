//! Error types for getcipher-core.
//!
//! One enum for every failure the core can report. Each variant carries a
//! stable code from [`ERROR_KINDS`] so a driver can label a failed line
//! without matching on display text.
//!
//! ## Propagation
//! Configuration errors ([`CipherError::is_fatal`]) abort a run before any
//! password is processed. Everything else fails a single password only.

/// Unified error type for all getcipher-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// Unknown name, wrong value shape, or out-of-bounds value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    /// Charset sub-range whose low byte is above its high byte.
    #[error("Invalid range: low {low:#04x} is above high {high:#04x}")]
    InvalidRange { low: u8, high: u8 },

    /// Buffer access past its logical length.
    #[error("Index out of range: index {index} with length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Derived iteration count exceeds 2^31.
    #[error("Iteration overflow: 2^{exponent} rounds exceeds 2^31")]
    IterationOverflow { exponent: u32 },

    /// A pipeline stage produced nothing.
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// Buffer bytes are not representable as text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// No algorithm registered under this name.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Detail carried by [`CipherError::InvalidParameter`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    #[error("no parameter named '{0}'")]
    Unknown(String),

    #[error("'{name}' rejects value '{value}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    #[error("'{name}' value {value} outside {min}..={max}")]
    OutOfBounds {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("slot {index} exceeds capacity {capacity}")]
    SlotOutOfRange { index: usize, capacity: usize },

    #[error("'{name}' declares {count} options, limit is {limit}")]
    TooManyOptions {
        name: String,
        count: usize,
        limit: usize,
    },

    #[error("'{0}' declares no options")]
    NoOptions(String),

    #[error("slot {0} is not active")]
    Inactive(usize),

    #[error("slot {index} does not hold {expected} value")]
    KindMismatch { index: usize, expected: &'static str },
}

/// Canonical error code registry, one entry per [`CipherError`] variant.
pub const ERROR_KINDS: [&str; 7] = [
    "INVALID_PARAMETER",
    "INVALID_RANGE",
    "INDEX_OUT_OF_RANGE",
    "ITERATION_OVERFLOW",
    "EMPTY_RESULT",
    "ENCODING",
    "UNKNOWN_ALGORITHM",
];

impl CipherError {
    /// Stable code for this error, drawn from [`ERROR_KINDS`].
    pub fn code(&self) -> &'static str {
        match self {
            CipherError::InvalidParameter(_) => ERROR_KINDS[0],
            CipherError::InvalidRange { .. } => ERROR_KINDS[1],
            CipherError::IndexOutOfRange { .. } => ERROR_KINDS[2],
            CipherError::IterationOverflow { .. } => ERROR_KINDS[3],
            CipherError::EmptyResult(_) => ERROR_KINDS[4],
            CipherError::Encoding(_) => ERROR_KINDS[5],
            CipherError::UnknownAlgorithm(_) => ERROR_KINDS[6],
        }
    }

    /// `true` when the algorithm cannot be used as configured and the run
    /// must stop before hashing anything.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CipherError::InvalidParameter(_)
                | CipherError::InvalidRange { .. }
                | CipherError::UnknownAlgorithm(_)
        )
    }
}

/// Returns `true` if `code` is one of the canonical [`ERROR_KINDS`].
pub fn is_valid_error_code(code: &str) -> bool {
    ERROR_KINDS.contains(&code)
}
