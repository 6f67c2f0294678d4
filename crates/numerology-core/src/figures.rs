//! Derived figures.
//!
//! Each function returns the figure together with its trace, both built
//! from the same intermediate values.

use numerology_model::{
    ActSums, Balance, BirthDate, CalculationTrace, ChallengeDiffs, Challenges, ConsonantChallenge,
    DriveChallenge, Figure, KeyYear, LifeActs, LifeSettings, NormalizedNames, PersonalYear,
    RecapAges,
};

use crate::letters::letter_value;
use crate::reduce::{LetterSum, digit_sum, digit_sum_line, karmic_annotation, reduce, reduction_steps};

/// A computed value paired with the trace that justifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traced<T> {
    pub value: T,
    pub trace: CalculationTrace,
}

impl<T> Traced<T> {
    pub fn new(value: T, trace: CalculationTrace) -> Self {
        Self { value, trace }
    }

    pub fn into_parts(self) -> (T, CalculationTrace) {
        (self.value, self.trace)
    }
}

fn sum_line(parts: &[u32], total: u32) -> String {
    let joined = parts
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("+");
    format!("{joined} = {total}")
}

/// Figure over a letter run, karmic-eligible.
fn letter_figure(letters: &LetterSum, label: &str) -> Traced<Figure> {
    let total = letters.total();
    let reduced = reduce(total);
    let figure = Figure::new(total, reduced).with_karmic(karmic_annotation(total, reduced));
    Traced::new(figure, letters.trace(label))
}

/// `a + b` over two already-reduced figures.
fn pair_figure(first: (&str, u32), second: (&str, u32)) -> Traced<Figure> {
    let total = first.1 + second.1;
    let reduced = reduce(total);
    let mut trace = CalculationTrace::new();
    trace.push(format!("{} = {}", first.0, first.1));
    trace.push(format!("{} = {}", second.0, second.1));
    trace.push(sum_line(&[first.1, second.1], total));
    trace.extend(reduction_steps(total));
    Traced::new(Figure::new(total, reduced), trace)
}

fn join_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<char> {
    tokens.flat_map(str::chars).collect()
}

/// Life path: `day + month + year`.
pub fn life_path(date: BirthDate) -> Traced<Figure> {
    let total = date.day + date.month + date.year;
    let reduced = reduce(total);
    let mut trace = CalculationTrace::new();
    trace.push(format!("DD = {:02}", date.day));
    trace.push(format!("MM = {:02}", date.month));
    trace.push(format!("YYYY = {}", date.year));
    trace.push(sum_line(&[date.day, date.month, date.year], total));
    trace.extend(reduction_steps(total));
    Traced::new(Figure::new(total, reduced), trace)
}

/// Expression: every letter of the full birth name.
pub fn expression(names: &NormalizedNames) -> Traced<Figure> {
    let letters = LetterSum::new(join_tokens(names.birth_tokens()));
    letter_figure(&letters, "FULL BIRTH NAME")
}

/// Resource: reduced life path plus reduced expression.
pub fn resource(life_path_reduced: u32, expression_reduced: u32) -> Traced<Figure> {
    pair_figure(
        ("Life Path (reduced)", life_path_reduced),
        ("Expression (reduced)", expression_reduced),
    )
}

/// Active: letters of the usual first name.
pub fn active(names: &NormalizedNames) -> Traced<Figure> {
    let letters = LetterSum::new(join_tokens(names.first.iter().map(String::as_str)));
    letter_figure(&letters, "USUAL FIRST NAME")
}

/// Hereditary: letters of the birth family name.
pub fn hereditary(names: &NormalizedNames) -> Traced<Figure> {
    let letters = LetterSum::new(join_tokens(names.family.iter().map(String::as_str)));
    letter_figure(&letters, "BIRTH FAMILY NAME")
}

/// Inner self: consonants of the full birth name.
pub fn inner_self(consonants: &LetterSum) -> Traced<Figure> {
    letter_figure(consonants, "CONSONANTS (INNER SELF)")
}

/// Inner-self challenge: `|first consonant - last consonant|`, zero when
/// there are no consonants.
pub fn inner_self_challenge(consonants: &LetterSum) -> Traced<ConsonantChallenge> {
    let first = consonants.first();
    let last = consonants.last();
    let first_value = first.map_or(0, letter_value);
    let last_value = last.map_or(0, letter_value);
    let total = first_value.abs_diff(last_value);
    let reduced = reduce(total);

    let letter_label = |letter: Option<char>| letter.map_or_else(|| "none".to_string(), String::from);
    let mut trace = CalculationTrace::new();
    trace.push(format!("First consonant = {} ({first_value})", letter_label(first)));
    trace.push(format!("Last consonant = {} ({last_value})", letter_label(last)));
    trace.push(format!("|{first_value}-{last_value}| = {total}"));
    trace.extend(reduction_steps(total));

    let challenge = ConsonantChallenge {
        total,
        reduced,
        first,
        last,
        missing_consonants: consonants.is_empty(),
    };
    Traced::new(challenge, trace)
}

/// Realization: reduced day plus reduced month.
pub fn realization(date: BirthDate) -> Traced<Figure> {
    pair_figure(
        ("Day (reduced)", reduce(date.day)),
        ("Month (reduced)", reduce(date.month)),
    )
}

/// Spiritual drive: vowels of the full birth name.
pub fn spiritual_drive(vowels: &LetterSum) -> Traced<Figure> {
    letter_figure(vowels, "VOWELS (SPIRITUAL DRIVE)")
}

/// Spiritual-drive challenge: the inner-self challenge value, reused as is.
pub fn spiritual_drive_challenge(inner: &ConsonantChallenge) -> Traced<DriveChallenge> {
    let total = inner.total;
    let mut trace = CalculationTrace::new();
    trace.push(format!("Same formula as Inner-Self Challenge = {total}"));
    trace.extend(reduction_steps(total));
    let challenge = DriveChallenge {
        total,
        reduced: reduce(total),
        missing_consonants: inner.missing_consonants,
    };
    Traced::new(challenge, trace)
}

/// Expression challenge: reduced spiritual drive plus reduced drive challenge.
pub fn expression_challenge(drive_reduced: u32, drive_challenge_reduced: u32) -> Traced<Figure> {
    pair_figure(
        ("Spiritual Drive (reduced)", drive_reduced),
        ("Spiritual-Drive Challenge (reduced)", drive_challenge_reduced),
    )
}

/// Balance: first letter of every civil-state token, marital name included.
pub fn balance(names: &NormalizedNames) -> Traced<Balance> {
    let initials = LetterSum::new(
        names
            .civil_tokens()
            .filter_map(|token| token.chars().next())
            .collect(),
    );
    let total = initials.total();
    let balance = Balance {
        total,
        reduced: reduce(total),
        letters: initials.letters().to_vec(),
    };
    Traced::new(balance, initials.trace("REFERENCE (FIRST LETTERS)"))
}

/// Marital-name figure, absent with an empty trace when no marital name
/// yielded letters.
pub fn marital_name(names: &NormalizedNames) -> Traced<Option<Figure>> {
    if names.marital.is_empty() {
        return Traced::new(None, CalculationTrace::new());
    }
    let letters = LetterSum::new(join_tokens(names.marital.iter().map(String::as_str)));
    let (figure, trace) = letter_figure(&letters, "MARITAL NAME").into_parts();
    Traced::new(Some(figure), trace)
}

/// Life settings: formative, productive, and harvest cycles.
pub fn life_settings(date: BirthDate, recap: &RecapAges) -> Traced<LifeSettings> {
    let formative_cycle = reduce(date.month);
    let productive_cycle = reduce(date.day);
    let year_digit_sum = digit_sum(date.year);
    let year_reduced = reduce(year_digit_sum);
    let harvest_cycle = Figure::new(year_digit_sum, year_reduced);

    let mut trace = CalculationTrace::new();
    trace.push(format!("Formative Cycle (month) = {} -> {formative_cycle}", date.month));
    trace.push(format!("Productive Cycle (day) = {} -> {productive_cycle}", date.day));
    trace.push(digit_sum_line("YYYY digit sum", date.year));
    trace.extend(reduction_steps(year_digit_sum));
    trace.push(format!(
        "Harvest Cycle = {} -> {}",
        harvest_cycle.total, harvest_cycle.reduced
    ));
    trace.push(format!(
        "Productive Cycle start (2nd cycle, recap table) = {} years",
        recap.cycles.cycle2
    ));
    trace.push(format!(
        "Harvest Cycle start (3rd cycle, recap table) = {} years",
        recap.cycles.cycle3
    ));

    let settings = LifeSettings {
        formative_cycle,
        productive_cycle,
        year_digit_sum,
        year_reduced,
        harvest_cycle,
        recap_key: recap.key,
        ages: recap.cycles,
    };
    Traced::new(settings, trace)
}

/// The four life acts.
///
/// Act 3 reduces the sum of the raw act 1 and act 2 sums, not their
/// reduced values.
pub fn life_acts(date: BirthDate, recap: &RecapAges) -> Traced<LifeActs> {
    let raw = ActSums {
        act1: date.day + date.month,
        act2: date.day + date.year,
        act3: (date.day + date.month) + (date.day + date.year),
        act4: date.month + date.year,
    };
    let acts = LifeActs {
        act1: reduce(raw.act1),
        act2: reduce(raw.act2),
        act3: reduce(raw.act3),
        act4: reduce(raw.act4),
        raw,
        recap_key: recap.key,
        ages: recap.acts,
    };

    let mut trace = CalculationTrace::new();
    trace.push(format!(
        "Act 1 = {}+{} = {} -> {}",
        date.day, date.month, raw.act1, acts.act1
    ));
    trace.push(format!(
        "Act 2 = {}+{} = {} -> {}",
        date.day, date.year, raw.act2, acts.act2
    ));
    trace.push(format!(
        "Act 3 = {}+{} = {} -> {}",
        raw.act1, raw.act2, raw.act3, acts.act3
    ));
    trace.push(format!(
        "Act 4 = {}+{} = {} -> {}",
        date.month, date.year, raw.act4, acts.act4
    ));
    trace.push(format!("Act 2 start (recap table) = {} years", recap.acts.act2));
    trace.push(format!("Act 3 start (recap table) = {} years", recap.acts.act3));
    trace.push(format!("Act 4 start (recap table) = {} years", recap.acts.act4));
    Traced::new(acts, trace)
}

/// Soul lesson: sum of the four reduced acts.
pub fn soul_lesson(acts: &LifeActs) -> Traced<Figure> {
    let parts = [acts.act1, acts.act2, acts.act3, acts.act4];
    let total: u32 = parts.iter().sum();
    let mut trace = CalculationTrace::new();
    trace.push(sum_line(&parts, total));
    trace.extend(reduction_steps(total));
    Traced::new(Figure::new(total, reduce(total)), trace)
}

/// First, second, and major challenges.
pub fn challenges(date: BirthDate, year_digit_sum: u32, year_reduced: u32) -> Traced<Challenges> {
    let day_reduced = reduce(date.day);
    let month_reduced = reduce(date.month);

    let first_raw = day_reduced.abs_diff(month_reduced);
    let first = reduce(first_raw);
    let second_raw = day_reduced.abs_diff(year_reduced);
    let second = reduce(second_raw);
    let major_raw = first.abs_diff(second);
    let major = reduce(major_raw);

    let mut trace = CalculationTrace::new();
    trace.push(format!("Year: YYYY digit sum = {year_digit_sum}"));
    trace.push(format!("Year (reduced) = {year_reduced}"));
    trace.push(format!(
        "First Challenge = |{day_reduced}-{month_reduced}| = {first_raw} -> {first}"
    ));
    trace.push(format!(
        "Second Challenge = |{day_reduced}-{year_reduced}| = {second_raw} -> {second}"
    ));
    trace.push(format!(
        "Major Challenge = |{first}-{second}| = {major_raw} -> {major}"
    ));

    let challenges = Challenges {
        first,
        second,
        major,
        raw: ChallengeDiffs {
            first: first_raw,
            second: second_raw,
            major: major_raw,
        },
    };
    Traced::new(challenges, trace)
}

/// Personal year for `target_year`.
pub fn personal_year(date: BirthDate, target_year: u32) -> Traced<PersonalYear> {
    let day_reduced = reduce(date.day);
    let month_reduced = reduce(date.month);
    let target_sum = digit_sum(target_year);
    let target_reduced = reduce(target_sum);
    let total = day_reduced + month_reduced + target_reduced;
    let reduced = reduce(total);

    let mut trace = CalculationTrace::new();
    trace.push(format!("Target year = {target_year}"));
    trace.push(digit_sum_line("Target year digit sum", target_year));
    trace.push(format!("Target year (reduced) = {target_reduced}"));
    trace.push(format!("Day (reduced) = {day_reduced}"));
    trace.push(format!("Month (reduced) = {month_reduced}"));
    trace.push(format!(
        "{day_reduced}+{month_reduced}+{target_reduced} = {total} -> {reduced}"
    ));

    let year = PersonalYear {
        total,
        reduced,
        target_year,
    };
    Traced::new(year, trace)
}

/// Key year: `day + month + year`, deliberately unreduced.
pub fn key_year(date: BirthDate) -> Traced<KeyYear> {
    let day_month = date.day + date.month;
    let year = day_month + date.year;
    let mut trace = CalculationTrace::new();
    trace.push(format!("Day+Month = {}+{} = {day_month}", date.day, date.month));
    trace.push(format!(
        "(Day+Month)+Birth year = {day_month}+{} = {year}",
        date.year
    ));
    Traced::new(KeyYear { year }, trace)
}
