//! Operator prefix tables
//!
//! Each operator owns a set of 3-digit prefixes. Tables are read through a
//! [`PrefixSource`], assembled into a [`PrefixRegistry`] in priority order,
//! and cached by an [`OperatorResolver`] so every table is read at most once
//! per resolver.
//!
//! The same prefix may appear in more than one table. Lookups scan
//! [`Operator::PRIORITY`] and the first table that holds the prefix wins.

use once_cell::sync::{Lazy, OnceCell};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::PrefixError;
use crate::operator::Operator;

/// Length of a network prefix
pub const PREFIX_LEN: usize = 3;

/// Ordered set of 3-digit prefixes for one operator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable(BTreeSet<String>);

impl PrefixTable {
    /// Build a table, rejecting any entry that is not three ASCII digits
    pub fn new<I, S>(operator: Operator, prefixes: I) -> Result<Self, PrefixError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for prefix in prefixes {
            let prefix = prefix.into();
            if prefix.len() != PREFIX_LEN || !prefix.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PrefixError::InvalidPrefix { operator, prefix });
            }
            set.insert(prefix);
        }
        Ok(Self(set))
    }

    /// Check membership
    pub fn contains(&self, prefix: &str) -> bool {
        self.0.contains(prefix)
    }

    /// Iterate prefixes in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of prefixes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Where prefix tables come from
pub trait PrefixSource: Send + Sync {
    /// Short description used in logs
    fn name(&self) -> &str;

    /// Read the raw prefix list for one operator
    fn load(&self, operator: Operator) -> Result<Vec<String>, PrefixError>;
}

/// Tables compiled into the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPrefixes;

impl EmbeddedPrefixes {
    fn raw(operator: Operator) -> &'static str {
        match operator {
            Operator::Smart => include_str!("../data/prefixes/smart.json"),
            Operator::Globe => include_str!("../data/prefixes/globe.json"),
            Operator::Sun => include_str!("../data/prefixes/sun.json"),
            Operator::AbsCbn => include_str!("../data/prefixes/abs-cbn.json"),
            Operator::Cherry => include_str!("../data/prefixes/cherry.json"),
            Operator::Next => include_str!("../data/prefixes/next.json"),
            Operator::Extelcom => include_str!("../data/prefixes/extelcom.json"),
            Operator::Unknown => "[]",
        }
    }
}

impl PrefixSource for EmbeddedPrefixes {
    fn name(&self) -> &str {
        "embedded"
    }

    fn load(&self, operator: Operator) -> Result<Vec<String>, PrefixError> {
        serde_json::from_str(Self::raw(operator))
            .map_err(|source| PrefixError::Decode { operator, source })
    }
}

/// Tables read from `<dir>/<operator>.json`
#[derive(Debug, Clone)]
pub struct DirectoryPrefixes {
    dir: PathBuf,
    name: String,
}

impl DirectoryPrefixes {
    /// Read tables from `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let name = dir.display().to_string();
        Self { dir, name }
    }

    /// Directory being read
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PrefixSource for DirectoryPrefixes {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, operator: Operator) -> Result<Vec<String>, PrefixError> {
        let Some(stem) = operator.table_name() else {
            return Ok(Vec::new());
        };
        let path = self.dir.join(format!("{}.json", stem));
        let content = std::fs::read_to_string(&path)
            .map_err(|source| PrefixError::Io { path, source })?;
        serde_json::from_str(&content).map_err(|source| PrefixError::Decode { operator, source })
    }
}

/// All operator tables in lookup priority order
#[derive(Debug, Clone, Default)]
pub struct PrefixRegistry {
    tables: Vec<(Operator, PrefixTable)>,
}

impl PrefixRegistry {
    /// Load every table, failing on the first error
    pub fn load(source: &dyn PrefixSource) -> Result<Self, PrefixError> {
        let mut tables = Vec::with_capacity(Operator::PRIORITY.len());
        for operator in Operator::PRIORITY {
            let table = PrefixTable::new(operator, source.load(operator)?)?;
            debug!(%operator, prefixes = table.len(), "Loaded prefix table");
            tables.push((operator, table));
        }
        let registry = Self { tables };
        registry.log_loaded(source);
        Ok(registry)
    }

    /// Load every table, substituting an empty table for any that fails
    pub fn load_lossy(source: &dyn PrefixSource) -> Self {
        let tables = Operator::PRIORITY
            .into_iter()
            .map(|operator| {
                let table = source
                    .load(operator)
                    .and_then(|raw| PrefixTable::new(operator, raw))
                    .unwrap_or_else(|e| {
                        warn!(%operator, source = source.name(), error = %e, "Prefix table unavailable");
                        PrefixTable::default()
                    });
                (operator, table)
            })
            .collect();
        let registry = Self { tables };
        registry.log_loaded(source);
        registry
    }

    fn log_loaded(&self, source: &dyn PrefixSource) {
        info!(
            source = source.name(),
            tables = self.tables.len(),
            prefixes = self.prefix_count(),
            "Prefix registry loaded"
        );
    }

    /// First operator whose table holds `prefix`, else `Unknown`
    pub fn resolve(&self, prefix: &str) -> Operator {
        self.tables
            .iter()
            .find(|(_, table)| table.contains(prefix))
            .map(|(operator, _)| *operator)
            .unwrap_or(Operator::Unknown)
    }

    /// Table for one operator
    pub fn table(&self, operator: Operator) -> Option<&PrefixTable> {
        self.tables
            .iter()
            .find(|(op, _)| *op == operator)
            .map(|(_, table)| table)
    }

    /// Every operator whose table holds `prefix`, in priority order
    pub fn claimants(&self, prefix: &str) -> Vec<Operator> {
        self.tables
            .iter()
            .filter(|(_, table)| table.contains(prefix))
            .map(|(operator, _)| *operator)
            .collect()
    }

    /// Total prefixes across all tables
    pub fn prefix_count(&self) -> usize {
        self.tables.iter().map(|(_, t)| t.len()).sum()
    }
}

static SHARED: Lazy<Arc<OperatorResolver>> =
    Lazy::new(|| Arc::new(OperatorResolver::lazy(EmbeddedPrefixes)));

/// Resolves prefixes to operators, loading its tables once on first use
pub struct OperatorResolver {
    source: Box<dyn PrefixSource>,
    registry: OnceCell<PrefixRegistry>,
}

impl OperatorResolver {
    /// Defer loading until the first lookup
    ///
    /// Tables that fail to load are logged and treated as empty.
    pub fn lazy(source: impl PrefixSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            registry: OnceCell::new(),
        }
    }

    /// Load every table now, failing on the first error
    pub fn preload(source: impl PrefixSource + 'static) -> Result<Self, PrefixError> {
        let registry = PrefixRegistry::load(&source)?;
        Ok(Self {
            source: Box::new(source),
            registry: OnceCell::with_value(registry),
        })
    }

    /// Process-wide resolver over the embedded tables
    pub fn shared() -> Arc<OperatorResolver> {
        Arc::clone(&SHARED)
    }

    /// Loaded tables
    pub fn registry(&self) -> &PrefixRegistry {
        self.registry
            .get_or_init(|| PrefixRegistry::load_lossy(self.source.as_ref()))
    }

    /// Operator owning `prefix`
    pub fn resolve(&self, prefix: &str) -> Operator {
        self.registry().resolve(prefix)
    }

    /// Whether tables have been loaded yet
    pub fn is_loaded(&self) -> bool {
        self.registry.get().is_some()
    }
}

impl fmt::Debug for OperatorResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorResolver")
            .field("source", &self.source.name())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
