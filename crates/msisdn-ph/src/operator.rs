//! Mobile network operators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Network operator historically assigned a prefix block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Smart Communications
    #[serde(rename = "SMART")]
    Smart,
    /// Globe Telecom
    #[serde(rename = "GLOBE")]
    Globe,
    /// Sun Cellular
    #[serde(rename = "SUN")]
    Sun,
    /// ABS-CBN Mobile
    #[serde(rename = "ABS-CBN MOBILE")]
    AbsCbn,
    /// Cherry Mobile
    #[serde(rename = "CHERRY MOBILE")]
    Cherry,
    /// Next Mobile
    #[serde(rename = "NEXT MOBILE")]
    Next,
    /// Express Telecommunication
    #[serde(rename = "EXTELCOM")]
    Extelcom,
    /// Prefix not present in any table
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Operator {
    /// Known operators in lookup priority order. The first table holding a
    /// prefix wins.
    pub const PRIORITY: [Operator; 7] = [
        Operator::Smart,
        Operator::Globe,
        Operator::Sun,
        Operator::AbsCbn,
        Operator::Cherry,
        Operator::Next,
        Operator::Extelcom,
    ];

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Smart => "SMART",
            Self::Globe => "GLOBE",
            Self::Sun => "SUN",
            Self::AbsCbn => "ABS-CBN MOBILE",
            Self::Cherry => "CHERRY MOBILE",
            Self::Next => "NEXT MOBILE",
            Self::Extelcom => "EXTELCOM",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// File stem of the operator's prefix table, `None` for `Unknown`
    pub fn table_name(&self) -> Option<&'static str> {
        match self {
            Self::Smart => Some("smart"),
            Self::Globe => Some("globe"),
            Self::Sun => Some("sun"),
            Self::AbsCbn => Some("abs-cbn"),
            Self::Cherry => Some("cherry"),
            Self::Next => Some("next"),
            Self::Extelcom => Some("extelcom"),
            Self::Unknown => None,
        }
    }

    /// Whether the operator was resolved from a table
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
