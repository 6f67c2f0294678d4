//! Pythagorean letter values and vowel/consonant classification.
//!
//! `A E I O U` are always vowels. `Y` is classified per token: an override
//! entry for the exact token wins, otherwise a `Y` is a vowel only when it
//! sits strictly between two plain consonants. A neighbouring `Y` is never
//! a plain consonant, so `YY` runs always fall back to consonants.

use numerology_model::{YMode, YOverrides};

/// Value of a letter in the Pythagorean table (`0` for anything else).
///
/// ```text
/// 1: A J S   4: D M V   7: G P Y
/// 2: B K T   5: E N W   8: H Q Z
/// 3: C L U   6: F O X   9: I R
/// ```
pub const fn letter_value(ch: char) -> u32 {
    match ch {
        'A' | 'J' | 'S' => 1,
        'B' | 'K' | 'T' => 2,
        'C' | 'L' | 'U' => 3,
        'D' | 'M' | 'V' => 4,
        'E' | 'N' | 'W' => 5,
        'F' | 'O' | 'X' => 6,
        'G' | 'P' | 'Y' => 7,
        'H' | 'Q' | 'Z' => 8,
        'I' | 'R' => 9,
        _ => 0,
    }
}

pub const fn is_vowel(ch: char) -> bool {
    matches!(ch, 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Uppercase letter that is neither a fixed vowel nor `Y`.
pub const fn is_plain_consonant(ch: char) -> bool {
    ch.is_ascii_uppercase() && !is_vowel(ch) && ch != 'Y'
}

/// Classification of one letter occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterKind {
    Vowel,
    Consonant,
}

/// Splits tokens into vowels and consonants using a Y override table.
#[derive(Debug, Clone, Copy)]
pub struct LetterClassifier<'a> {
    overrides: &'a YOverrides,
}

impl<'a> LetterClassifier<'a> {
    pub fn new(overrides: &'a YOverrides) -> Self {
        Self { overrides }
    }

    /// Forced Y mode for this exact token, if configured.
    pub fn override_for(&self, token: &str) -> Option<YMode> {
        self.overrides.mode_for(token)
    }

    /// Whether the letter at `index` is a `Y` acting as a vowel.
    pub fn is_y_vowel(&self, token: &str, index: usize) -> bool {
        let letters: Vec<char> = token.chars().collect();
        y_is_vowel(&letters, index, self.override_for(token))
    }

    /// Classify every `A`-`Z` letter of a token, left to right.
    pub fn classify(&self, token: &str) -> Vec<(char, LetterKind)> {
        let letters: Vec<char> = token.chars().collect();
        let forced = self.override_for(token);
        letters
            .iter()
            .enumerate()
            .filter(|(_, ch)| ch.is_ascii_uppercase())
            .map(|(index, &ch)| {
                let kind = if is_vowel(ch) || y_is_vowel(&letters, index, forced) {
                    LetterKind::Vowel
                } else {
                    LetterKind::Consonant
                };
                (ch, kind)
            })
            .collect()
    }

    pub fn extract_vowels(&self, token: &str) -> Vec<char> {
        self.extract(token, LetterKind::Vowel)
    }

    pub fn extract_consonants(&self, token: &str) -> Vec<char> {
        self.extract(token, LetterKind::Consonant)
    }

    fn extract(&self, token: &str, wanted: LetterKind) -> Vec<char> {
        self.classify(token)
            .into_iter()
            .filter(|(_, kind)| *kind == wanted)
            .map(|(ch, _)| ch)
            .collect()
    }
}

fn y_is_vowel(letters: &[char], index: usize, forced: Option<YMode>) -> bool {
    if letters.get(index) != Some(&'Y') {
        return false;
    }
    match forced {
        Some(YMode::Vowel) => return true,
        Some(YMode::Consonant) => return false,
        None => {}
    }
    if index == 0 || index + 1 == letters.len() {
        return false;
    }
    is_plain_consonant(letters[index - 1]) && is_plain_consonant(letters[index + 1])
}

/// Sum of letter values over a token or letter run.
pub fn sum_letters(letters: impl IntoIterator<Item = char>) -> u32 {
    letters.into_iter().map(letter_value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overrides() -> YOverrides {
        YOverrides::empty()
    }

    #[test]
    fn letter_table_covers_every_letter() {
        for ch in 'A'..='Z' {
            let value = letter_value(ch);
            assert!((1..=9).contains(&value), "{ch} -> {value}");
        }
        assert_eq!(letter_value('a'), 0);
        assert_eq!(letter_value('-'), 0);
    }

    #[test]
    fn letter_table_groups() {
        let groups = [
            (1, "AJS"),
            (2, "BKT"),
            (3, "CLU"),
            (4, "DMV"),
            (5, "ENW"),
            (6, "FOX"),
            (7, "GPY"),
            (8, "HQZ"),
            (9, "IR"),
        ];
        for (value, letters) in groups {
            for ch in letters.chars() {
                assert_eq!(letter_value(ch), value, "{ch}");
            }
        }
    }

    #[test]
    fn y_between_vowels_is_consonant() {
        let overrides = no_overrides();
        let classifier = LetterClassifier::new(&overrides);
        assert!(!classifier.is_y_vowel("MAYA", 2));
        assert_eq!(classifier.extract_vowels("MAYA"), vec!['A', 'A']);
        assert_eq!(classifier.extract_consonants("MAYA"), vec!['M', 'Y']);
    }

    #[test]
    fn y_between_consonants_is_vowel() {
        let overrides = no_overrides();
        let classifier = LetterClassifier::new(&overrides);
        assert!(classifier.is_y_vowel("LYS", 1));
        assert_eq!(classifier.extract_vowels("LYS"), vec!['Y']);
        assert_eq!(classifier.extract_consonants("LYS"), vec!['L', 'S']);
    }

    #[test]
    fn y_at_token_edges_is_consonant() {
        let overrides = no_overrides();
        let classifier = LetterClassifier::new(&overrides);
        assert!(!classifier.is_y_vowel("YVES", 0));
        assert!(!classifier.is_y_vowel("ANDY", 3));
        assert!(!classifier.is_y_vowel("Y", 0));
    }

    #[test]
    fn adjacent_y_falls_back_to_consonant() {
        let overrides = no_overrides();
        let classifier = LetterClassifier::new(&overrides);
        assert_eq!(classifier.extract_consonants("SYYS"), vec!['S', 'Y', 'Y', 'S']);
        assert!(classifier.extract_vowels("SYYS").is_empty());
    }

    #[test]
    fn override_applies_to_every_y_in_token() {
        let overrides =
            YOverrides::from_entries([("MAYA", YMode::Vowel), ("LYNDSY", YMode::Consonant)])
                .unwrap();
        let classifier = LetterClassifier::new(&overrides);
        assert_eq!(classifier.extract_vowels("MAYA"), vec!['A', 'Y', 'A']);
        assert_eq!(
            classifier.extract_consonants("LYNDSY"),
            vec!['L', 'Y', 'N', 'D', 'S', 'Y']
        );
        // Overrides match whole tokens only.
        assert!(classifier.is_y_vowel("LYS", 1));
    }

    #[test]
    fn builtin_entries_agree_with_heuristic() {
        let overrides = no_overrides();
        let classifier = LetterClassifier::new(&overrides);
        for (token, mode) in numerology_model::BUILTIN_Y_OVERRIDES {
            for (index, ch) in token.char_indices() {
                if ch == 'Y' {
                    assert_eq!(
                        classifier.is_y_vowel(token, index),
                        *mode == YMode::Vowel,
                        "{token}"
                    );
                }
            }
        }
    }

    #[test]
    fn every_letter_lands_in_exactly_one_bucket() {
        let overrides = no_overrides();
        let classifier = LetterClassifier::new(&overrides);
        for token in ["JEAN", "DUPONT", "SYLVAIN", "YANNICK", "KYLLYAN"] {
            let vowels = classifier.extract_vowels(token);
            let consonants = classifier.extract_consonants(token);
            assert_eq!(vowels.len() + consonants.len(), token.len(), "{token}");
            assert_eq!(
                sum_letters(vowels) + sum_letters(consonants),
                sum_letters(token.chars()),
                "{token}"
            );
        }
    }

    #[test]
    fn empty_token_yields_nothing() {
        let overrides = no_overrides();
        let classifier = LetterClassifier::new(&overrides);
        assert!(classifier.classify("").is_empty());
        assert_eq!(sum_letters("".chars()), 0);
    }
}
