//! Result assembly: the single entry point of the engine.

use chrono::{Datelike, Local};
use tracing::{debug, trace};

use numerology_model::{
    AppliedOverride, BirthRecord, CalculationTraces, ComputeOptions, ComputedFigures,
    DebugBreakdown, InputEcho, NormalizedNames, NumerologyError, NumerologyResult, Result,
    TokenBreakdown, YRuleMeta,
};

use crate::figures;
use crate::letters::{LetterClassifier, sum_letters};
use crate::normalize::{parse_date, split_name_field};
use crate::recap::recap_ages;
use crate::reduce::LetterSum;

/// Human-readable statement of the Y policy, echoed in every result.
pub const Y_RULE: &str = "Token-level overrides first; otherwise Y is a vowel only when \
     surrounded by consonants within its token, never at the start or end; default consonant";

/// Compute every figure, trace, and audit record for one birth record.
///
/// The call is pure apart from reading the clock when
/// `options.target_year` is `None`.
///
/// # Errors
///
/// - [`NumerologyError::MissingRequiredFields`] when first name, family
///   name, or birth date is blank.
/// - [`NumerologyError::InvalidDateFormat`] / [`NumerologyError::InvalidDateValue`]
///   for a bad birth date.
/// - [`NumerologyError::UnsupportedLifePath`] / [`NumerologyError::RecapLookupFailed`]
///   if the recap lookup invariant is broken.
pub fn compute_numerology(
    record: &BirthRecord,
    options: &ComputeOptions,
) -> Result<NumerologyResult> {
    let missing = record.missing_fields();
    if !missing.is_empty() {
        return Err(NumerologyError::MissingRequiredFields { fields: missing });
    }
    let date = parse_date(&record.birth_date)?;
    let target_year = options.target_year.unwrap_or_else(current_year);

    let names = NormalizedNames {
        first: split_name_field(&record.first_name),
        middle: split_name_field(record.middle_names.as_deref().unwrap_or_default()),
        family: split_name_field(&record.family_name),
        marital: split_name_field(record.marital_name.as_deref().unwrap_or_default()),
    };
    let classifier = LetterClassifier::new(&options.y_overrides);
    debug!(
        tokens = names.civil_tokens().count(),
        target_year, "computing numerology figures"
    );

    let life_path = figures::life_path(date);
    let recap = recap_ages(life_path.value.reduced)?;

    let expression = figures::expression(&names);
    let resource = figures::resource(life_path.value.reduced, expression.value.reduced);
    let active = figures::active(&names);
    let hereditary = figures::hereditary(&names);

    let consonants = LetterSum::new(
        names
            .birth_tokens()
            .flat_map(|token| classifier.extract_consonants(token))
            .collect(),
    );
    let vowels = LetterSum::new(
        names
            .birth_tokens()
            .flat_map(|token| classifier.extract_vowels(token))
            .collect(),
    );

    let inner_self = figures::inner_self(&consonants);
    let inner_self_challenge = figures::inner_self_challenge(&consonants);
    let realization = figures::realization(date);
    let spiritual_drive = figures::spiritual_drive(&vowels);
    let spiritual_drive_challenge =
        figures::spiritual_drive_challenge(&inner_self_challenge.value);
    let expression_challenge = figures::expression_challenge(
        spiritual_drive.value.reduced,
        spiritual_drive_challenge.value.reduced,
    );
    let balance = figures::balance(&names);
    let marital_name = figures::marital_name(&names);
    let life_settings = figures::life_settings(date, &recap);
    let life_acts = figures::life_acts(date, &recap);
    let soul_lesson = figures::soul_lesson(&life_acts.value);
    let challenges = figures::challenges(
        date,
        life_settings.value.year_digit_sum,
        life_settings.value.year_reduced,
    );
    let personal_year = figures::personal_year(date, target_year);
    let key_year = figures::key_year(date);

    let breakdown = options
        .include_debug
        .then(|| debug_breakdown(&names, &classifier));
    let y_rule = y_rule_meta(&names, &classifier);

    let (life_path, life_path_trace) = life_path.into_parts();
    let (expression, expression_trace) = expression.into_parts();
    let (resource, resource_trace) = resource.into_parts();
    let (active, active_trace) = active.into_parts();
    let (hereditary, hereditary_trace) = hereditary.into_parts();
    let (inner_self, inner_self_trace) = inner_self.into_parts();
    let (inner_self_challenge, inner_self_challenge_trace) = inner_self_challenge.into_parts();
    let (realization, realization_trace) = realization.into_parts();
    let (spiritual_drive, spiritual_drive_trace) = spiritual_drive.into_parts();
    let (spiritual_drive_challenge, spiritual_drive_challenge_trace) =
        spiritual_drive_challenge.into_parts();
    let (expression_challenge, expression_challenge_trace) = expression_challenge.into_parts();
    let (balance, balance_trace) = balance.into_parts();
    let (marital_name, marital_name_trace) = marital_name.into_parts();
    let (life_settings, life_settings_trace) = life_settings.into_parts();
    let (life_acts, life_acts_trace) = life_acts.into_parts();
    let (soul_lesson, soul_lesson_trace) = soul_lesson.into_parts();
    let (challenges, challenges_trace) = challenges.into_parts();
    let (personal_year, personal_year_trace) = personal_year.into_parts();
    let (key_year, key_year_trace) = key_year.into_parts();

    debug!(
        life_path = life_path.reduced,
        expression = expression.reduced,
        recap_key = %recap.key,
        overrides_applied = y_rule.overrides_applied.len(),
        "numerology figures computed"
    );

    Ok(NumerologyResult {
        inputs: InputEcho {
            first_name: record.first_name.clone(),
            middle_names: record.middle_names.clone().unwrap_or_default(),
            family_name: record.family_name.clone(),
            marital_name: record.marital_name.clone().unwrap_or_default(),
            birth_date: record.birth_date.clone(),
            birth_place: record.birth_place.clone(),
            target_year,
            normalized: names,
        },
        computed: ComputedFigures {
            life_path,
            expression,
            resource,
            active,
            hereditary,
            inner_self,
            inner_self_challenge,
            realization,
            spiritual_drive,
            spiritual_drive_challenge,
            expression_challenge,
            balance,
            marital_name,
            life_settings,
            life_acts,
            soul_lesson,
            challenges,
            personal_year,
            key_year,
        },
        traces: CalculationTraces {
            life_path: life_path_trace,
            expression: expression_trace,
            resource: resource_trace,
            active: active_trace,
            hereditary: hereditary_trace,
            inner_self: inner_self_trace,
            inner_self_challenge: inner_self_challenge_trace,
            realization: realization_trace,
            spiritual_drive: spiritual_drive_trace,
            spiritual_drive_challenge: spiritual_drive_challenge_trace,
            expression_challenge: expression_challenge_trace,
            balance: balance_trace,
            marital_name: marital_name_trace,
            life_settings: life_settings_trace,
            life_acts: life_acts_trace,
            soul_lesson: soul_lesson_trace,
            challenges: challenges_trace,
            personal_year: personal_year_trace,
            key_year: key_year_trace,
        },
        y_rule,
        debug: breakdown,
    })
}

fn current_year() -> u32 {
    Local::now().year().unsigned_abs()
}

/// Overrides that matched a civil-state token containing `Y`, in input order.
fn y_rule_meta(names: &NormalizedNames, classifier: &LetterClassifier<'_>) -> YRuleMeta {
    let overrides_applied = names
        .civil_tokens()
        .filter(|token| token.contains('Y'))
        .filter_map(|token| {
            classifier.override_for(token).map(|mode| AppliedOverride {
                token: token.to_string(),
                mode,
            })
        })
        .collect();
    YRuleMeta {
        rule: Y_RULE.to_string(),
        overrides_applied,
    }
}

fn debug_breakdown(names: &NormalizedNames, classifier: &LetterClassifier<'_>) -> DebugBreakdown {
    let birth_tokens = names
        .birth_tokens()
        .map(|token| {
            let vowels = classifier.extract_vowels(token);
            let consonants = classifier.extract_consonants(token);
            let y_override = classifier.override_for(token);
            trace!(
                vowels = vowels.len(),
                consonants = consonants.len(),
                y_override = ?y_override,
                "classified token"
            );
            TokenBreakdown {
                token: token.to_string(),
                letters: token.chars().collect(),
                sum_all: sum_letters(token.chars()),
                sum_vowels: sum_letters(vowels.iter().copied()),
                sum_consonants: sum_letters(consonants.iter().copied()),
                vowels,
                consonants,
                y_override,
            }
        })
        .collect();
    DebugBreakdown { birth_tokens }
}
