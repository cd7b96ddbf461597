use thiserror::Error;

/**
 * errors.rs defines the failure taxonomy for a reconstruction run. No
 * component recovers internally; every variant propagates to the caller
 * and aborts the session with no partial output.
 */

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconError {

    #[error("radix {base} is outside the supported range [2, 36]")]
    InvalidRadix { base: u32 },

    #[error("character '{digit}' is not a valid digit in base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("required {needed} roots but only {available} were supplied")]
    InsufficientRoots { needed: usize, available: usize },
}
