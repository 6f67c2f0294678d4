//! Error taxonomy for numerology computations.
//!
//! Every variant is fatal to the single call that produced it: the engine
//! never returns a partial result.

use thiserror::Error;

/// Errors raised while validating inputs or computing figures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumerologyError {
    // === Input Errors ===
    /// First name, family name, or birth date is blank.
    #[error("missing required fields: {}", fields.join(", "))]
    MissingRequiredFields { fields: Vec<&'static str> },

    /// Birth date does not match `DD/MM/YYYY`.
    #[error("invalid date format '{value}': expected DD/MM/YYYY")]
    InvalidDateFormat { value: String },

    /// Birth date is well-formed but out of range or not a real calendar day.
    #[error("invalid date value '{value}': {reason}")]
    InvalidDateValue { value: String, reason: String },

    // === Configuration Errors ===
    /// A Y-override entry is not a usable normalized token.
    #[error("invalid Y override for token '{token}': {reason}")]
    InvalidOverride { token: String, reason: String },

    // === Invariant Violations ===
    /// Reduced life path outside the nine canonical outcomes.
    #[error("unsupported reduced life path {reduced} for the recap table")]
    UnsupportedLifePath { reduced: u32 },

    /// The recap age table has no row for a canonical key.
    #[error("recap table lookup failed for key '{key}'")]
    RecapLookupFailed { key: String },
}

impl NumerologyError {
    /// Stable machine-readable code, suitable for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredFields { .. } => "MISSING_REQUIRED_FIELDS",
            Self::InvalidDateFormat { .. } => "INVALID_DATE_FORMAT",
            Self::InvalidDateValue { .. } => "INVALID_DATE_VALUE",
            Self::InvalidOverride { .. } => "INVALID_OVERRIDE",
            Self::UnsupportedLifePath { .. } => "UNSUPPORTED_LIFE_PATH",
            Self::RecapLookupFailed { .. } => "RECAP_LOOKUP_FAILED",
        }
    }

    /// Returns true when the caller can fix the error by correcting its input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredFields { .. }
                | Self::InvalidDateFormat { .. }
                | Self::InvalidDateValue { .. }
                | Self::InvalidOverride { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
