//! Immutable substitution table, following the same OnceLock pattern as the
//! embedded-default + custom-TOML config modules elsewhere in the engine.
//!
//! - `from_toml(toml_content)` builds a table from a custom scheme
//! - `default_scheme()` returns the `&'static` lazily built default table
//! - Default mappings are embedded via `include_str!("default_scheme.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::config::{parse_scheme_toml, SchemeError};

pub const DEFAULT_SCHEME_TOML: &str = include_str!("default_scheme.toml");

/// Fixed mapping from a single source code point to its Latin replacement.
///
/// Built once, never mutated. Safe to share across threads; the transform
/// only reads from it.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    mappings: BTreeMap<char, String>,
}

impl SubstitutionTable {
    pub fn from_mappings(mappings: BTreeMap<char, String>) -> Self {
        SubstitutionTable { mappings }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, SchemeError> {
        let mappings = parse_scheme_toml(toml_str)?;
        tracing::debug!(mappings = mappings.len(), "scheme table built");
        Ok(SubstitutionTable { mappings })
    }

    /// Get or initialize the default Arabic→Latin table.
    pub fn default_scheme() -> &'static SubstitutionTable {
        static INSTANCE: OnceLock<SubstitutionTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            SubstitutionTable::from_toml(DEFAULT_SCHEME_TOML)
                .expect("default scheme TOML must be valid")
        })
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.mappings.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.mappings.iter().map(|(c, s)| (*c, s.as_str()))
    }
}

/// Returns the embedded default scheme TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SCHEME_TOML
}
