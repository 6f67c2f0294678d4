//! Configuration options for a numerology computation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NumerologyError, Result};

/// Forced classification of every `Y` inside one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YMode {
    Vowel,
    Consonant,
}

impl YMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vowel => "vowel",
            Self::Consonant => "consonant",
        }
    }
}

impl fmt::Display for YMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in Y classifications, keyed by normalized token.
///
/// The positional heuristic already classifies these three tokens the same
/// way, so they never change a figure. They only pin the classification and
/// make it visible in `y_rule.overrides_applied`.
pub const BUILTIN_Y_OVERRIDES: &[(&str, YMode)] = &[
    ("MYRIAM", YMode::Vowel),
    ("SYLVAIN", YMode::Vowel),
    ("YVES", YMode::Consonant),
];

/// Token-level Y overrides.
///
/// Keys are normalized tokens (uppercase `A`-`Z` only) that contain at
/// least one `Y`. A matching entry wins over the positional heuristic for
/// every `Y` in that token.
///
/// Deserialization goes through [`YOverrides::from_entries`], so a table
/// read from JSON or TOML is validated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, YMode>",
    into = "BTreeMap<String, YMode>"
)]
pub struct YOverrides {
    entries: BTreeMap<String, YMode>,
}

impl TryFrom<BTreeMap<String, YMode>> for YOverrides {
    type Error = NumerologyError;

    fn try_from(entries: BTreeMap<String, YMode>) -> Result<Self> {
        Self::from_entries(entries)
    }
}

impl From<YOverrides> for BTreeMap<String, YMode> {
    fn from(table: YOverrides) -> Self {
        table.entries
    }
}

impl YOverrides {
    /// An empty table: the heuristic alone decides.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compile-time exception table.
    pub fn builtin() -> Self {
        let entries = BUILTIN_Y_OVERRIDES
            .iter()
            .map(|(token, mode)| ((*token).to_string(), *mode))
            .collect();
        Self { entries }
    }

    /// Build a table from `(token, mode)` pairs, validating every key.
    ///
    /// # Errors
    ///
    /// Returns [`NumerologyError::InvalidOverride`] for a key that is not
    /// a normalized token containing `Y`.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, YMode)>,
        S: Into<String>,
    {
        let mut table = Self::empty();
        for (token, mode) in entries {
            table.insert(token, mode)?;
        }
        Ok(table)
    }

    /// Add or replace one entry.
    ///
    /// # Errors
    ///
    /// Returns [`NumerologyError::InvalidOverride`] for a key that is not
    /// a normalized token containing `Y`.
    pub fn insert(&mut self, token: impl Into<String>, mode: YMode) -> Result<()> {
        let token = token.into();
        if token.is_empty() {
            return Err(NumerologyError::InvalidOverride {
                token,
                reason: "token is empty".to_string(),
            });
        }
        if !token.chars().all(|ch| ch.is_ascii_uppercase()) {
            return Err(NumerologyError::InvalidOverride {
                token,
                reason: "token must contain only uppercase A-Z letters".to_string(),
            });
        }
        if !token.contains('Y') {
            return Err(NumerologyError::InvalidOverride {
                token,
                reason: "token has no Y to classify".to_string(),
            });
        }
        self.entries.insert(token, mode);
        Ok(())
    }

    /// Combine two tables; entries from `other` win.
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// The forced mode for an exact normalized token, if any.
    pub fn mode_for(&self, token: &str) -> Option<YMode> {
        self.entries.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, YMode)> {
        self.entries.iter().map(|(token, mode)| (token.as_str(), *mode))
    }
}

/// Options controlling one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeOptions {
    /// Year used for the personal-year figure. `None` means the current
    /// calendar year at call time.
    pub target_year: Option<u32>,

    /// Attach the per-token debug breakdown to the result.
    pub include_debug: bool,

    /// Y classification exceptions.
    pub y_overrides: YOverrides,
}

impl Default for ComputeOptions {
    fn default() -> Self {
        Self {
            target_year: None,
            include_debug: false,
            y_overrides: YOverrides::builtin(),
        }
    }
}

impl ComputeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_target_year(mut self, year: u32) -> Self {
        self.target_year = Some(year);
        self
    }

    #[must_use]
    pub fn with_debug(mut self, enable: bool) -> Self {
        self.include_debug = enable;
        self
    }

    #[must_use]
    pub fn with_y_overrides(mut self, overrides: YOverrides) -> Self {
        self.y_overrides = overrides;
        self
    }
}
