use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct SchemeConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key is not a single code point: {0:?}")]
    MultiCharKey(String),
}

/// Parse TOML text into a sorted `BTreeMap<source char, replacement>`.
///
/// Every key must be exactly one code point. Replacement values may be
/// multi-character digraphs ("kh", "sh") or empty, which deletes the
/// source character from the output.
pub fn parse_scheme_toml(toml_str: &str) -> Result<BTreeMap<char, String>, SchemeError> {
    let config: SchemeConfig =
        toml::from_str(toml_str).map_err(|e| SchemeError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(SchemeError::Empty);
    }

    let mut mappings = BTreeMap::new();
    for (key, value) in config.mappings {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                mappings.insert(c, value);
            }
            _ => return Err(SchemeError::MultiCharKey(key)),
        }
    }

    Ok(mappings)
}
