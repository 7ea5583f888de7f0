//! Error types for the crate.
//!
//! [`ArithError`] is returned by the arithmetic facade (field, curve and
//! pairing operations implemented by the backend). [`Error`] is the
//! codec-facing type returned by every serialization entry point; arithmetic
//! failures are flattened into it so callers match on one taxonomy.
//!
//! Messages describe the kind of failure only. They never carry byte offsets
//! or intermediate values, so a decoder cannot be used as a validation oracle.
//!
//! # Examples
//!
//! ```rust
//! use abe_codec::errors::{ArithError, Error};
//!
//! let err: Error = ArithError::DivisionByZero.into();
//! assert!(matches!(err, Error::Arith(ArithError::DivisionByZero)));
//! ```

use thiserror::Error;

use crate::codec::{ElementType, Format};

/// Errors raised by backend arithmetic (field, curve and pairing operations).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArithError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("inverse of zero")]
    InverseOfZero,
    #[error("field element is not reduced modulo the field order")]
    InvalidFieldElement,
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid hex string")]
    InvalidHex,
    #[error("point is not on the curve")]
    PointNotOnCurve,
    #[error("point is not in the prime-order subgroup")]
    InvalidSubgroup,
    #[error("input length mismatch: {0}")]
    LengthMismatch(&'static str),
    #[error("native encoding rejected: {0}")]
    Native(&'static str),
}

/// Errors returned by the serialization layer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("malformed header: {0}")]
    MalformedHeader(&'static str),
    #[error("unsupported header version {found} (decoder supports up to {supported})")]
    UnsupportedVersion { found: u8, supported: u8 },
    #[error("invalid encoding: {0}")]
    InvalidEncoding(&'static str),
    #[error("field element is not reduced modulo the field order")]
    InvalidFieldElement,
    #[error("x-coordinate does not correspond to a curve point")]
    NotASquare,
    #[error("point is not on the curve")]
    PointNotOnCurve,
    #[error("point is not in the prime-order subgroup")]
    InvalidSubgroup,
    #[error("format {format:?} does not support {element:?} on this curve")]
    UnsupportedCombination { format: Format, element: ElementType },
    #[error("unknown curve identifier 0x{0:02x}")]
    UnknownCurve(u8),
    #[error("curve mismatch: engine is 0x{expected:02x}, data is 0x{found:02x}")]
    CurveMismatch { expected: u8, found: u8 },
    #[error("curve {0} is deprecated and cannot be used for new parameters")]
    DeprecatedCurve(&'static str),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("arithmetic error: {0}")]
    Arith(ArithError),
}

impl From<ArithError> for Error {
    fn from(err: ArithError) -> Self {
        match err {
            ArithError::InvalidFieldElement => Error::InvalidFieldElement,
            ArithError::PointNotOnCurve => Error::PointNotOnCurve,
            ArithError::InvalidSubgroup => Error::InvalidSubgroup,
            ArithError::InvalidLength { .. } => Error::InvalidEncoding("wrong length"),
            ArithError::InvalidHex => Error::InvalidEncoding("invalid hex"),
            ArithError::Native(_) => Error::InvalidEncoding("native encoding rejected"),
            other => Error::Arith(other),
        }
    }
}

impl Error {
    /// Short, stable name of the failure kind, used for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MalformedHeader(_) => "malformed_header",
            Error::UnsupportedVersion { .. } => "unsupported_version",
            Error::InvalidEncoding(_) => "invalid_encoding",
            Error::InvalidFieldElement => "invalid_field_element",
            Error::NotASquare => "not_a_square",
            Error::PointNotOnCurve => "point_not_on_curve",
            Error::InvalidSubgroup => "invalid_subgroup",
            Error::UnsupportedCombination { .. } => "unsupported_combination",
            Error::UnknownCurve(_) => "unknown_curve",
            Error::CurveMismatch { .. } => "curve_mismatch",
            Error::DeprecatedCurve(_) => "deprecated_curve",
            Error::InvalidConfig(_) => "invalid_config",
            Error::Arith(_) => "arith",
        }
    }
}
