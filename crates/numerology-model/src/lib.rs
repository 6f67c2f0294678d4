//! Data model for the numerology engine.
//!
//! Input records, options, computed figures, calculation traces, and the
//! error taxonomy. This crate performs no computation.

pub mod error;
pub mod figures;
pub mod options;
pub mod record;
pub mod result;

pub use error::{NumerologyError, Result};
pub use figures::{
    ActStartAges, ActSums, Balance, ChallengeDiffs, Challenges, ComputedFigures,
    ConsonantChallenge, CycleStartAges, DriveChallenge, Figure, KeyYear, LifeActs, LifePathKey,
    LifeSettings, PersonalYear, RecapAges,
};
pub use options::{BUILTIN_Y_OVERRIDES, ComputeOptions, YMode, YOverrides};
pub use record::{BirthDate, BirthRecord};
pub use result::{
    AppliedOverride, CalculationTrace, CalculationTraces, DebugBreakdown, InputEcho,
    NormalizedNames, NumerologyResult, TokenBreakdown, YRuleMeta,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_display_prefers_karmic_mark() {
        let plain = Figure::new(39, 3);
        assert_eq!(plain.display_value(), "3");

        let karmic = Figure::new(13, 4).with_karmic(Some("13/4".to_string()));
        assert!(karmic.is_karmic());
        assert_eq!(karmic.display_value(), "13/4");
    }

    #[test]
    fn figure_omits_absent_karmic_mark() {
        let json = serde_json::to_string(&Figure::new(39, 3)).expect("serialize figure");
        assert_eq!(json, r#"{"total":39,"reduced":3}"#);
    }
}
