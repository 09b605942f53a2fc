//! Parser configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ConfigError, InvalidNumberError};
use crate::msisdn::{PhoneNumber, DEFAULT_COUNTRY_PREFIX};
use crate::normalize::is_valid;
use crate::prefixes::{DirectoryPrefixes, OperatorResolver};

/// Settings applied to every number a [`NumberParser`] produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsisdnConfig {
    /// Country prefix for international formatting
    pub country_prefix: String,
    /// Directory holding `<operator>.json` prefix tables; embedded tables
    /// are used when unset
    pub prefix_dir: Option<PathBuf>,
}

impl Default for MsisdnConfig {
    fn default() -> Self {
        Self {
            country_prefix: DEFAULT_COUNTRY_PREFIX.into(),
            prefix_dir: None,
        }
    }
}

impl MsisdnConfig {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Decode from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build a parser; a configured prefix directory is read and checked now
    pub fn parser(&self) -> Result<NumberParser, ConfigError> {
        let resolver = match &self.prefix_dir {
            Some(dir) => Arc::new(OperatorResolver::preload(DirectoryPrefixes::new(dir))?),
            None => OperatorResolver::shared(),
        };

        Ok(NumberParser {
            country_prefix: self.country_prefix.clone(),
            resolver,
        })
    }
}

/// Parses numbers with a fixed country prefix and resolver
#[derive(Debug, Clone)]
pub struct NumberParser {
    country_prefix: String,
    resolver: Arc<OperatorResolver>,
}

impl NumberParser {
    /// Parse raw input
    pub fn parse(&self, raw: &str) -> Result<PhoneNumber, InvalidNumberError> {
        let mut number = PhoneNumber::with_resolver(raw, Arc::clone(&self.resolver))?;
        number.set_country_prefix(self.country_prefix.as_str());
        Ok(number)
    }

    /// Check input without constructing a number
    pub fn is_valid(&self, raw: &str) -> bool {
        is_valid(raw)
    }

    /// Resolver shared by every parsed number
    pub fn resolver(&self) -> &Arc<OperatorResolver> {
        &self.resolver
    }
}

impl Default for NumberParser {
    fn default() -> Self {
        Self {
            country_prefix: DEFAULT_COUNTRY_PREFIX.into(),
            resolver: OperatorResolver::shared(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Notation;
    use crate::operator::Operator;

    #[test]
    fn test_defaults() {
        let config = MsisdnConfig::from_json("{}").unwrap();
        assert_eq!(config, MsisdnConfig::default());
        assert_eq!(config.country_prefix, "+63");
        assert!(config.prefix_dir.is_none());
    }

    #[test]
    fn test_country_prefix_applied() {
        let config = MsisdnConfig::from_json(r#"{"country_prefix": "0063"}"#).unwrap();
        let parser = config.parser().unwrap();
        let n = parser.parse("09171234567").unwrap();
        assert_eq!(n.international(), "00639171234567");
        // a 4-character prefix shifts the later groups
        assert_eq!(n.format(Notation::International, " "), "0063 91 712 34567");
        assert!(Arc::ptr_eq(parser.resolver(), &OperatorResolver::shared()));
    }

    #[test]
    fn test_load_file_with_prefix_dir() {
        let dir = tempfile::tempdir().unwrap();
        let tables = dir.path().join("prefixes");
        std::fs::create_dir(&tables).unwrap();
        for operator in Operator::PRIORITY {
            let body = if operator == Operator::Next { r#"["917"]"# } else { "[]" };
            let file = format!("{}.json", operator.table_name().unwrap());
            std::fs::write(tables.join(file), body).unwrap();
        }

        let config_path = dir.path().join("msisdn.json");
        let config = MsisdnConfig {
            prefix_dir: Some(tables),
            ..Default::default()
        };
        std::fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = MsisdnConfig::load(&config_path).unwrap();
        assert_eq!(loaded, config);

        let parser = loaded.parser().unwrap();
        assert!(parser.resolver().is_loaded());
        assert_eq!(parser.parse("09171234567").unwrap().operator(), Operator::Next);
    }

    #[test]
    fn test_missing_prefix_dir_fails_early() {
        let config = MsisdnConfig {
            prefix_dir: Some(PathBuf::from("/nonexistent/msisdn-prefixes")),
            ..Default::default()
        };
        assert!(matches!(config.parser(), Err(ConfigError::Prefix(_))));
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            MsisdnConfig::load("/nonexistent/msisdn.json"),
            Err(ConfigError::Io { .. })
        ));
        assert!(matches!(
            MsisdnConfig::from_json("{\"country_prefix\": 63}"),
            Err(ConfigError::Decode(_))
        ));
    }

    #[test]
    fn test_parser_validation() {
        let parser = NumberParser::default();
        assert!(parser.is_valid("0917 123 4567"));
        assert!(!parser.is_valid("0917 123 456"));
        assert!(parser.parse("0917 123 456").is_err());
    }
}
