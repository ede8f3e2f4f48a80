use thiserror::Error;

/// Errors produced by the field routines and the point codec.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The element is not a quadratic residue. Routine on malformed or adversarial input.
    #[error("no square root exists")]
    NoSquareRoot,
    #[error("value needs {bits} bits but only {length} bytes are available")]
    ValueTooLarge { bits: u32, length: usize },
    #[error("modulus {0} is below 2")]
    InvalidModulus(String),
    #[error("negative values cannot be encoded")]
    NegativeValue,
    /// No quadratic non-residue below the search limit. The modulus is almost certainly not prime.
    #[error("no quadratic non-residue found in the first {limit} candidates")]
    NonResidueSearchExhausted { limit: u32 },
    /// Tonelli-Shanks could not find an exponent i < m with t^(2^i) = 1.
    #[error("internal invariant violated: no exponent i found in Tonelli-Shanks loop")]
    ExponentNotFound,
    #[error("invalid point encoding: got {length} bytes, expected {expected}")]
    InvalidEncoding { length: usize, expected: usize },
    #[error("invalid point prefix {0:#04x}")]
    InvalidPrefix(u8),
    #[error("point is not on the curve")]
    PointNotOnCurve,
    #[error("unknown curve {0}")]
    UnknownCurve(String),
    #[error("invalid integer {0}")]
    InvalidInteger(String),
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl Error {
    /// True for failures that signal a bug or a non-prime modulus rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::NonResidueSearchExhausted { .. } | Error::ExponentNotFound
        )
    }
}
