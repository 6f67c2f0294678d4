//! Civil-state input records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Civil-state data for one person, as delivered by the caller.
///
/// Name fields are raw user text; normalization happens in the engine.
/// The birth date must be a `DD/MM/YYYY` string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRecord {
    /// Usual first name.
    pub first_name: String,
    /// Additional given names, space separated.
    #[serde(default)]
    pub middle_names: Option<String>,
    /// Family name at birth.
    pub family_name: String,
    /// Family name after marriage, if any.
    #[serde(default)]
    pub marital_name: Option<String>,
    /// Birth date as `DD/MM/YYYY`.
    pub birth_date: String,
    /// Free-text birth place. Echoed only; never used in a figure.
    #[serde(default)]
    pub birth_place: Option<String>,
}

impl BirthRecord {
    pub fn new(
        first_name: impl Into<String>,
        family_name: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            family_name: family_name.into(),
            birth_date: birth_date.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_middle_names(mut self, names: impl Into<String>) -> Self {
        self.middle_names = Some(names.into());
        self
    }

    #[must_use]
    pub fn with_marital_name(mut self, name: impl Into<String>) -> Self {
        self.marital_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_birth_place(mut self, place: impl Into<String>) -> Self {
        self.birth_place = Some(place.into());
        self
    }

    /// Names of the mandatory fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push("first_name");
        }
        if self.family_name.trim().is_empty() {
            missing.push("family_name");
        }
        if self.birth_date.trim().is_empty() {
            missing.push("birth_date");
        }
        missing
    }
}

/// A validated calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}
