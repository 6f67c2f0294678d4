//! Digit-sum reduction, karmic marks, and the trace lines that show them.

use numerology_model::CalculationTrace;

use crate::letters::letter_value;

/// Numbers that are never reduced further.
pub const MASTER_NUMBERS: [u32; 4] = [11, 22, 33, 44];

/// Raw totals that carry a karmic mark.
pub const KARMIC_NUMBERS: [u32; 4] = [13, 14, 16, 19];

pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

pub fn is_karmic(n: u32) -> bool {
    KARMIC_NUMBERS.contains(&n)
}

/// Decimal digits of `n`, most significant first.
pub fn digits(n: u32) -> Vec<u32> {
    n.to_string()
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .collect()
}

pub fn digit_sum(n: u32) -> u32 {
    digits(n).into_iter().sum()
}

/// Sum digits until the value is below 10 or a master number.
pub fn reduce(n: u32) -> u32 {
    let mut current = n;
    while needs_reduction(current) {
        current = digit_sum(current);
    }
    current
}

fn needs_reduction(n: u32) -> bool {
    n >= 10 && !is_master(n)
}

/// `"{raw}/{reduced}"` when the pre-reduction total is karmic.
///
/// Must be given the raw total, never an intermediate reduction step.
pub fn karmic_annotation(raw_total: u32, reduced: u32) -> Option<String> {
    is_karmic(raw_total).then(|| format!("{raw_total}/{reduced}"))
}

fn join_plus(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("+")
}

/// One `d1+d2+... = next` line per reduction step; empty when `raw` is
/// already final.
pub fn reduction_steps(raw: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = raw;
    while needs_reduction(current) {
        let parts = digits(current);
        let next: u32 = parts.iter().sum();
        lines.push(format!("{} = {next}", join_plus(&parts)));
        current = next;
    }
    lines
}

/// Single line for a sum over individual digits, e.g. `{label} = 1+9+9+0 = 19`.
pub fn digit_sum_line(label: &str, n: u32) -> String {
    let parts = digits(n);
    let total: u32 = parts.iter().sum();
    format!("{label} = {} = {total}", join_plus(&parts))
}

/// An ordered letter run together with its values and total.
///
/// Figures and their traces both read from this one value so the two can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSum {
    letters: Vec<char>,
    values: Vec<u32>,
    total: u32,
}

impl LetterSum {
    pub fn new(letters: Vec<char>) -> Self {
        let values: Vec<u32> = letters.iter().copied().map(letter_value).collect();
        let total = values.iter().sum();
        Self {
            letters,
            values,
            total,
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn first(&self) -> Option<char> {
        self.letters.first().copied()
    }

    pub fn last(&self) -> Option<char> {
        self.letters.last().copied()
    }

    /// Label line, the value sum, then each reduction step.
    ///
    /// An empty run yields the label line and `No letters retained = 0`.
    pub fn trace(&self, label: &str) -> CalculationTrace {
        let joined: String = self.letters.iter().collect();
        let mut trace = CalculationTrace::new();
        trace.push(format!("{label} = {joined}"));
        if self.letters.is_empty() {
            trace.push("No letters retained = 0");
            return trace;
        }
        trace.push(format!("{} = {}", join_plus(&self.values), self.total));
        trace.extend(reduction_steps(self.total));
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_keeps_master_numbers() {
        for master in MASTER_NUMBERS {
            assert_eq!(reduce(master), master);
        }
    }

    #[test]
    fn reduce_stops_on_master_reached_midway() {
        // 29 -> 11, not 2
        assert_eq!(reduce(29), 11);
        // 2009 -> 11
        assert_eq!(reduce(2009), 11);
        // 1993 -> 22
        assert_eq!(reduce(1993), 22);
    }

    #[test]
    fn reduce_small_values_unchanged() {
        for n in 0..10 {
            assert_eq!(reduce(n), n);
        }
        assert_eq!(reduce(39), 3);
        assert_eq!(reduce(2011), 4);
    }

    #[test]
    fn karmic_annotation_uses_raw_total() {
        assert_eq!(karmic_annotation(13, 4), Some("13/4".to_string()));
        assert_eq!(karmic_annotation(19, 1), Some("19/1".to_string()));
        assert_eq!(karmic_annotation(31, 4), None);
        assert_eq!(karmic_annotation(4, 4), None);
    }

    #[test]
    fn reduction_steps_lists_each_pass() {
        assert_eq!(reduction_steps(39), vec!["3+9 = 12", "1+2 = 3"]);
        assert_eq!(reduction_steps(2011), vec!["2+0+1+1 = 4"]);
        assert!(reduction_steps(7).is_empty());
        assert!(reduction_steps(22).is_empty());
        assert_eq!(reduction_steps(2009), vec!["2+0+0+9 = 11"]);
    }

    #[test]
    fn digit_sum_line_shows_each_digit() {
        assert_eq!(digit_sum_line("YYYY digit sum", 1990), "YYYY digit sum = 1+9+9+0 = 19");
        assert_eq!(digit_sum(1990), 19);
    }

    #[test]
    fn letter_sum_trace_matches_total() {
        let sum = LetterSum::new("JEANDUPONT".chars().collect());
        assert_eq!(sum.total(), 39);
        assert_eq!(
            sum.trace("FULL BIRTH NAME").lines(),
            &[
                "FULL BIRTH NAME = JEANDUPONT".to_string(),
                "1+5+1+5+4+3+7+6+5+2 = 39".to_string(),
                "3+9 = 12".to_string(),
                "1+2 = 3".to_string(),
            ]
        );
    }

    #[test]
    fn empty_letter_sum_explains_zero() {
        let sum = LetterSum::new(Vec::new());
        assert_eq!(sum.total(), 0);
        assert_eq!(sum.first(), None);
        assert_eq!(
            sum.trace("CONSONANTS (INNER SELF)").lines(),
            &[
                "CONSONANTS (INNER SELF) = ".to_string(),
                "No letters retained = 0".to_string(),
            ]
        );
    }
}
