//! Input normalization and validation
//!
//! Raw input is reduced to its ASCII digits, then a single trunk `0` or the
//! `63` country code is dropped from the front. Validation is a length check
//! on the result.

use crate::error::{InvalidNumberError, InvalidReason};

/// Length of a canonical number
pub const CANONICAL_LEN: usize = 10;

/// Strip everything but digits, then a leading `0` or `63`
///
/// Never fails; the result may be empty or the wrong length.
pub fn normalize(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if let Some(rest) = digits.strip_prefix('0') {
        rest.to_string()
    } else if let Some(rest) = digits.strip_prefix("63") {
        rest.to_string()
    } else {
        digits
    }
}

/// Check whether `raw` normalizes to a 10-digit mobile number
#[must_use]
pub fn is_valid(raw: &str) -> bool {
    canonicalize(raw).is_ok()
}

/// Normalize and validate in one pass, returning the canonical digits
pub(crate) fn canonicalize(raw: &str) -> Result<String, InvalidNumberError> {
    let digits = normalize(raw);

    if digits.is_empty() {
        return Err(InvalidNumberError::new(raw, InvalidReason::Empty));
    }

    if digits.len() != CANONICAL_LEN {
        return Err(InvalidNumberError::new(
            raw,
            InvalidReason::WrongLength { len: digits.len() },
        ));
    }

    Ok(digits)
}
