//! The aggregate output of one computation.

use serde::{Deserialize, Serialize};

use crate::figures::ComputedFigures;
use crate::options::YMode;

/// Ordered, human-readable arithmetic steps justifying one figure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationTrace(Vec<String>);

impl CalculationTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains_line(&self, line: &str) -> bool {
        self.0.iter().any(|candidate| candidate == line)
    }
}

impl From<Vec<String>> for CalculationTrace {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

impl Extend<String> for CalculationTrace {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

/// One trace per figure group, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationTraces {
    pub life_path: CalculationTrace,
    pub expression: CalculationTrace,
    pub resource: CalculationTrace,
    pub active: CalculationTrace,
    pub hereditary: CalculationTrace,
    pub inner_self: CalculationTrace,
    pub inner_self_challenge: CalculationTrace,
    pub realization: CalculationTrace,
    pub spiritual_drive: CalculationTrace,
    pub spiritual_drive_challenge: CalculationTrace,
    pub expression_challenge: CalculationTrace,
    pub balance: CalculationTrace,
    /// Empty when no marital name was supplied.
    pub marital_name: CalculationTrace,
    pub life_settings: CalculationTrace,
    pub life_acts: CalculationTrace,
    pub soul_lesson: CalculationTrace,
    pub challenges: CalculationTrace,
    pub personal_year: CalculationTrace,
    pub key_year: CalculationTrace,
}

impl CalculationTraces {
    /// All traces with their serialized key, in output order.
    pub fn entries(&self) -> [(&'static str, &CalculationTrace); 19] {
        [
            ("life_path", &self.life_path),
            ("expression", &self.expression),
            ("resource", &self.resource),
            ("active", &self.active),
            ("hereditary", &self.hereditary),
            ("inner_self", &self.inner_self),
            ("inner_self_challenge", &self.inner_self_challenge),
            ("realization", &self.realization),
            ("spiritual_drive", &self.spiritual_drive),
            ("spiritual_drive_challenge", &self.spiritual_drive_challenge),
            ("expression_challenge", &self.expression_challenge),
            ("balance", &self.balance),
            ("marital_name", &self.marital_name),
            ("life_settings", &self.life_settings),
            ("life_acts", &self.life_acts),
            ("soul_lesson", &self.soul_lesson),
            ("challenges", &self.challenges),
            ("personal_year", &self.personal_year),
            ("key_year", &self.key_year),
        ]
    }

    pub fn get(&self, key: &str) -> Option<&CalculationTrace> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, trace)| trace)
    }
}

/// Normalized tokens per name field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedNames {
    pub first: Vec<String>,
    pub middle: Vec<String>,
    pub family: Vec<String>,
    pub marital: Vec<String>,
}

impl NormalizedNames {
    /// First, middle, then family tokens. The marital name is excluded.
    pub fn birth_tokens(&self) -> impl Iterator<Item = &str> {
        self.first
            .iter()
            .chain(&self.middle)
            .chain(&self.family)
            .map(String::as_str)
    }

    /// Every civil-state token, marital name included.
    pub fn civil_tokens(&self) -> impl Iterator<Item = &str> {
        self.birth_tokens()
            .chain(self.marital.iter().map(String::as_str))
    }
}

/// Raw inputs echoed back alongside their normalized tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEcho {
    pub first_name: String,
    pub middle_names: String,
    pub family_name: String,
    pub marital_name: String,
    pub birth_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    pub target_year: u32,
    pub normalized: NormalizedNames,
}

/// A Y override that matched a civil-state token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedOverride {
    pub token: String,
    pub mode: YMode,
}

/// How Y was classified for this computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YRuleMeta {
    pub rule: String,
    pub overrides_applied: Vec<AppliedOverride>,
}

/// Per-token letter breakdown for support and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBreakdown {
    pub token: String,
    pub letters: Vec<char>,
    pub sum_all: u32,
    pub vowels: Vec<char>,
    pub sum_vowels: u32,
    pub consonants: Vec<char>,
    pub sum_consonants: u32,
    pub y_override: Option<YMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugBreakdown {
    pub birth_tokens: Vec<TokenBreakdown>,
}

/// Complete, self-contained output of one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyResult {
    pub inputs: InputEcho,
    pub computed: ComputedFigures,
    pub traces: CalculationTraces,
    pub y_rule: YRuleMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugBreakdown>,
}
