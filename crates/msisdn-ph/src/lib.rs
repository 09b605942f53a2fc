//! Philippine Mobile Numbers (MSISDN)
//!
//! Validates, normalizes, formats and classifies Philippine mobile
//! subscriber numbers.
//!
//! ## Pipeline
//!
//! ```text
//! raw input ──► normalize ──► validate ──► PhoneNumber (10 digits)
//!                                              │
//!                          ┌───────────────────┼──────────────────┐
//!                          ▼                   ▼                  ▼
//!                 format(Local, sep)  format(International)  operator()
//!                   0917-123-4567       +63-917-123-4567       GLOBE
//! ```
//!
//! Operators are resolved from static prefix tables (SMART, GLOBE, SUN,
//! ABS-CBN MOBILE, CHERRY MOBILE, NEXT MOBILE, EXTELCOM). The tables are a
//! historical snapshot and know nothing about number portability.
//!
//! ```
//! use msisdn_ph::{Notation, Operator, PhoneNumber};
//!
//! assert!(msisdn_ph::validate("+63 917 123 4567"));
//!
//! let number = PhoneNumber::parse("0917 123 4567").unwrap();
//! assert_eq!(number.format(Notation::Local, "-"), "0917-123-4567");
//! assert_eq!(number.format(Notation::International, "-"), "+63-917-123-4567");
//! assert_eq!(number.operator(), Operator::Globe);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
mod format;
pub mod msisdn;
pub mod normalize;
pub mod operator;
pub mod prefixes;

pub use config::{MsisdnConfig, NumberParser};
pub use error::{ConfigError, InvalidNumberError, InvalidReason, PrefixError};
pub use format::Notation;
pub use msisdn::{PhoneNumber, DEFAULT_COUNTRY_PREFIX};
pub use normalize::{is_valid, normalize};
pub use operator::Operator;
pub use prefixes::{
    DirectoryPrefixes, EmbeddedPrefixes, OperatorResolver, PrefixRegistry, PrefixSource,
    PrefixTable,
};

/// Check whether `raw` is a plausible Philippine mobile number
///
/// Same check [`PhoneNumber::parse`] applies; use it to pre-validate input.
#[must_use]
pub fn validate(raw: &str) -> bool {
    is_valid(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_matches_parse() {
        for raw in ["09171234567", "639171234567", "", "12345", "abcdefghij", "091712345678"] {
            assert_eq!(validate(raw), PhoneNumber::parse(raw).is_ok(), "{raw:?}");
        }
    }
}
