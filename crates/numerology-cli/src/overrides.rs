//! Loading extra Y overrides from a TOML file.
//!
//! ```toml
//! [overrides]
//! Maya = "vowel"
//! "Fayçal" = "consonant"
//! ```
//!
//! Keys are normalized the same way as name tokens, so accents and case
//! do not matter. File entries win over the built-in table.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, warn};

use numerology_core::normalize_token;
use numerology_model::{YMode, YOverrides};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverridesFile {
    #[serde(default)]
    overrides: BTreeMap<String, YMode>,
}

/// Parse an overrides document into a validated table.
pub fn parse_overrides(source: &str) -> Result<YOverrides> {
    let file: OverridesFile = toml::from_str(source).context("parse Y overrides")?;
    let mut normalized = BTreeMap::new();
    for (raw, mode) in file.overrides {
        let token = normalize_token(&raw);
        if token.is_empty() {
            bail!("Y override key {raw:?} has no letters");
        }
        if let Some(previous) = normalized.insert(token.clone(), mode)
            && previous != mode
        {
            warn!(token = %token, "conflicting Y overrides; last entry wins");
        }
    }
    let table = YOverrides::from_entries(normalized)?;
    debug!(entries = table.len(), "loaded Y overrides");
    Ok(table)
}

/// Read `path` and merge its entries over the built-in table.
pub fn load_overrides(path: &Path) -> Result<YOverrides> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("read Y overrides file {}", path.display()))?;
    let extra = parse_overrides(&source)
        .with_context(|| format!("load Y overrides from {}", path.display()))?;
    Ok(YOverrides::builtin().merged(extra))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalized() {
        let table = parse_overrides("[overrides]\n\"maÿa\" = \"vowel\"\n").unwrap();
        assert_eq!(table.mode_for("MAYA"), Some(YMode::Vowel));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_document_is_empty_table() {
        assert!(parse_overrides("").unwrap().is_empty());
    }

    #[test]
    fn key_without_y_is_rejected() {
        let err = parse_overrides("[overrides]\nANNE = \"vowel\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("token has no Y to classify"));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(parse_overrides("[overrides]\nMAYA = \"both\"\n").is_err());
    }
}
