use num_bigint::BigInt;
use num_traits::Zero;

use crate::modules::errors::ReconError;


/**
 * radix.rs decodes base-encoded digit strings into exact BigInt values.
 * Digit strings are unsigned magnitudes; no sign character is recognized,
 * and both letter cases are accepted for digits >= 10.
 */

// decode digits in the given base into an exact unbounded integer
pub fn decode_digits(base: u32, digits: &str) -> Result<BigInt, ReconError> {
    if !(2..=36).contains(&base) {
        return Err(ReconError::InvalidRadix { base });
    }
    if digits.is_empty() {
        return Err(ReconError::MalformedInput("empty digit string".to_string()));
    }

    let mut value = BigInt::zero();
    for ch in digits.chars() {
        let d = ch
            .to_digit(base)
            .ok_or(ReconError::InvalidDigit { digit: ch, base })?;
        value = value * base + d;
    }

    Ok(value)
}
