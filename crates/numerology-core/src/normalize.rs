//! Input normalization: birth date parsing and name tokenization.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use numerology_model::{BirthDate, NumerologyError, Result};

/// Strict `DD/MM/YYYY`, ASCII digits only.
static BIRTH_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("Invalid birth date regex")
});

/// Parse a `DD/MM/YYYY` birth date and check it against the real calendar.
///
/// Surrounding whitespace is ignored; nothing else is tolerated.
///
/// # Errors
///
/// - [`NumerologyError::InvalidDateFormat`] when the string is not `DD/MM/YYYY`.
/// - [`NumerologyError::InvalidDateValue`] when a component is out of range
///   or the day does not exist in that month.
pub fn parse_date(value: &str) -> Result<BirthDate> {
    let trimmed = value.trim();
    let Some(captures) = BIRTH_DATE_REGEX.captures(trimmed) else {
        return Err(NumerologyError::InvalidDateFormat {
            value: value.to_string(),
        });
    };

    let component = |index: usize| -> Result<u32> {
        captures[index]
            .parse::<u32>()
            .map_err(|_| NumerologyError::InvalidDateFormat {
                value: value.to_string(),
            })
    };
    let day = component(1)?;
    let month = component(2)?;
    let year = component(3)?;

    let invalid = |reason: &str| NumerologyError::InvalidDateValue {
        value: value.to_string(),
        reason: reason.to_string(),
    };
    if !(1..=31).contains(&day) {
        return Err(invalid("day must be between 01 and 31"));
    }
    if !(1..=12).contains(&month) {
        return Err(invalid("month must be between 01 and 12"));
    }
    if year < 1000 {
        return Err(invalid("year must be 1000 or later"));
    }
    let calendar_year = i32::try_from(year).map_err(|_| invalid("year out of range"))?;
    if NaiveDate::from_ymd_opt(calendar_year, month, day).is_none() {
        return Err(invalid("date does not exist in the calendar"));
    }

    Ok(BirthDate { day, month, year })
}

/// Reduce one raw name piece to uppercase `A`-`Z`.
///
/// Diacritics are stripped through canonical decomposition, then every
/// character outside `A`-`Z` is dropped. The result may be empty.
pub fn normalize_token(raw: &str) -> String {
    let stripped: String = raw.nfd().filter(|ch| !is_combining_mark(*ch)).collect();
    stripped
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Split a name field on whitespace into normalized, non-empty tokens.
pub fn split_name_field(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_padded_components() {
        let date = parse_date("15/06/1990").unwrap();
        assert_eq!((date.day, date.month, date.year), (15, 6, 1990));
    }

    #[test]
    fn parse_date_trims_surrounding_whitespace() {
        assert!(parse_date("  01/01/2000 ").is_ok());
    }

    #[test]
    fn parse_date_rejects_other_layouts() {
        for value in ["1/6/1990", "15-06-1990", "1990/06/15", "15/06/90", "15/06/1990x", ""] {
            let error = parse_date(value).unwrap_err();
            assert!(
                matches!(error, NumerologyError::InvalidDateFormat { .. }),
                "{value}"
            );
        }
    }

    #[test]
    fn parse_date_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode decimal digits but not accepted.
        let error = parse_date("١٥/٠٦/١٩٩٠").unwrap_err();
        assert!(matches!(error, NumerologyError::InvalidDateFormat { .. }));
    }

    #[test]
    fn parse_date_rejects_out_of_range_components() {
        for value in ["00/06/1990", "32/06/1990", "15/00/1990", "15/13/1990", "15/06/0999"] {
            let error = parse_date(value).unwrap_err();
            assert!(
                matches!(error, NumerologyError::InvalidDateValue { .. }),
                "{value}"
            );
        }
    }

    #[test]
    fn parse_date_checks_the_calendar() {
        assert!(matches!(
            parse_date("31/04/2020"),
            Err(NumerologyError::InvalidDateValue { .. })
        ));
        assert!(matches!(
            parse_date("31/02/2001"),
            Err(NumerologyError::InvalidDateValue { .. })
        ));
        assert!(matches!(
            parse_date("29/02/2001"),
            Err(NumerologyError::InvalidDateValue { .. })
        ));
        assert!(parse_date("29/02/2000").is_ok());
        assert!(matches!(
            parse_date("29/02/1900"),
            Err(NumerologyError::InvalidDateValue { .. })
        ));
    }

    #[test]
    fn normalize_token_strips_accents_and_symbols() {
        assert_eq!(normalize_token("Hélène"), "HELENE");
        assert_eq!(normalize_token("Jean-Noël"), "JEANNOEL");
        assert_eq!(normalize_token("O'Brien"), "OBRIEN");
        assert_eq!(normalize_token("Çağla"), "CAGLA");
        assert_eq!(normalize_token("123"), "");
    }

    #[test]
    fn split_name_field_drops_empty_pieces() {
        assert_eq!(
            split_name_field("  Marie   Émilie - 42 "),
            vec!["MARIE".to_string(), "EMILIE".to_string()]
        );
        assert!(split_name_field("   ").is_empty());
    }
}
