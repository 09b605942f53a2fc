//! Phone number value object
//!
//! A validated Philippine mobile number stored as its ten canonical digits.
//! The network prefix and operator are derived on first access and cached.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

use crate::error::InvalidNumberError;
use crate::format::{self, Notation};
use crate::normalize::canonicalize;
use crate::operator::Operator;
use crate::prefixes::{OperatorResolver, PREFIX_LEN};

/// Country prefix used for international formatting unless overridden
pub const DEFAULT_COUNTRY_PREFIX: &str = "+63";

/// Philippine mobile number
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    digits: String,
    country_prefix: String,
    prefix: OnceCell<String>,
    operator: OnceCell<Operator>,
    resolver: Arc<OperatorResolver>,
}

impl PhoneNumber {
    /// Parse loosely formatted input against the embedded prefix tables
    pub fn parse(raw: &str) -> Result<Self, InvalidNumberError> {
        Self::with_resolver(raw, OperatorResolver::shared())
    }

    /// Parse, resolving operators through `resolver`
    pub fn with_resolver(
        raw: &str,
        resolver: Arc<OperatorResolver>,
    ) -> Result<Self, InvalidNumberError> {
        let digits = canonicalize(raw).map_err(|e| {
            debug!(reason = %e.reason(), "Rejected MSISDN");
            e
        })?;

        Ok(Self {
            digits,
            country_prefix: DEFAULT_COUNTRY_PREFIX.to_string(),
            prefix: OnceCell::new(),
            operator: OnceCell::new(),
            resolver,
        })
    }

    /// Canonical ten digits, no trunk zero or country code
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Country prefix used by [`Notation::International`]
    pub fn country_prefix(&self) -> &str {
        &self.country_prefix
    }

    /// Replace the country prefix; taken verbatim, not validated
    pub fn set_country_prefix(&mut self, prefix: impl Into<String>) {
        self.country_prefix = prefix.into();
    }

    /// Render the number, inserting `separator` between digit groups when
    /// it is non-empty
    pub fn format(&self, notation: Notation, separator: &str) -> String {
        match notation {
            Notation::Local => format::local(&self.digits, separator),
            Notation::International => {
                format::international(&self.digits, &self.country_prefix, separator)
            }
        }
    }

    /// Local form without separators, `09171234567`
    pub fn local(&self) -> String {
        self.format(Notation::Local, "")
    }

    /// International form without separators, `+639171234567`
    pub fn international(&self) -> String {
        self.format(Notation::International, "")
    }

    /// First three canonical digits
    pub fn prefix(&self) -> &str {
        self.prefix
            .get_or_init(|| self.digits[..PREFIX_LEN].to_string())
    }

    /// Operator that owns this number's prefix
    pub fn operator(&self) -> Operator {
        *self
            .operator
            .get_or_init(|| self.resolver.resolve(self.prefix()))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0{}", self.digits)
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneNumber")
            .field("digits", &self.digits)
            .field("country_prefix", &self.country_prefix)
            .finish()
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for PhoneNumber {}

impl Hash for PhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

impl FromStr for PhoneNumber {
    type Err = InvalidNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = InvalidNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = InvalidNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(number: PhoneNumber) -> Self {
        number.digits
    }
}
