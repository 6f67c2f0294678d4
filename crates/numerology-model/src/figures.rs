//! Computed numerological figures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw total and its reduction, with the karmic mark when the raw total
/// is a karmic number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub total: u32,
    pub reduced: u32,
    /// `"{total}/{reduced}"` when `total` is karmic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub karmic: Option<String>,
}

impl Figure {
    pub fn new(total: u32, reduced: u32) -> Self {
        Self {
            total,
            reduced,
            karmic: None,
        }
    }

    #[must_use]
    pub fn with_karmic(mut self, karmic: Option<String>) -> Self {
        self.karmic = karmic;
        self
    }

    pub fn is_karmic(&self) -> bool {
        self.karmic.is_some()
    }

    /// Display form: the karmic pair when flagged, otherwise the reduced value.
    pub fn display_value(&self) -> String {
        self.karmic
            .clone()
            .unwrap_or_else(|| self.reduced.to_string())
    }
}

/// Inner-self challenge: distance between first and last consonant values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsonantChallenge {
    pub total: u32,
    pub reduced: u32,
    pub first: Option<char>,
    pub last: Option<char>,
    pub missing_consonants: bool,
}

/// Spiritual-drive challenge. Same raw value as [`ConsonantChallenge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveChallenge {
    pub total: u32,
    pub reduced: u32,
    pub missing_consonants: bool,
}

/// Balance figure built from the first letter of every civil-state token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub total: u32,
    pub reduced: u32,
    pub letters: Vec<char>,
}

/// Canonical life-path grouping used by the recap age table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LifePathKey {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2/11")]
    TwoEleven,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4/22")]
    FourTwentyTwo,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6/33")]
    SixThirtyThree,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8/44")]
    EightFortyFour,
    #[serde(rename = "9")]
    Nine,
}

impl LifePathKey {
    pub const ALL: [Self; 9] = [
        Self::One,
        Self::TwoEleven,
        Self::Three,
        Self::FourTwentyTwo,
        Self::Five,
        Self::SixThirtyThree,
        Self::Seven,
        Self::EightFortyFour,
        Self::Nine,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::TwoEleven => "2/11",
            Self::Three => "3",
            Self::FourTwentyTwo => "4/22",
            Self::Five => "5",
            Self::SixThirtyThree => "6/33",
            Self::Seven => "7",
            Self::EightFortyFour => "8/44",
            Self::Nine => "9",
        }
    }
}

impl fmt::Display for LifePathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ages at which life acts 2 to 4 begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActStartAges {
    pub act2: u32,
    pub act3: u32,
    pub act4: u32,
}

/// Ages at which cycles 2 and 3 begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleStartAges {
    pub cycle2: u32,
    pub cycle3: u32,
}

/// Recap ages resolved for one life path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecapAges {
    pub key: LifePathKey,
    pub acts: ActStartAges,
    pub cycles: CycleStartAges,
}

/// Life settings: the three cycles and when they begin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeSettings {
    pub formative_cycle: u32,
    pub productive_cycle: u32,
    pub year_digit_sum: u32,
    pub year_reduced: u32,
    pub harvest_cycle: Figure,
    pub recap_key: LifePathKey,
    pub ages: CycleStartAges,
}

/// Pre-reduction sums behind each act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActSums {
    pub act1: u32,
    pub act2: u32,
    pub act3: u32,
    pub act4: u32,
}

/// The four life acts and when acts 2 to 4 begin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeActs {
    pub act1: u32,
    pub act2: u32,
    pub act3: u32,
    pub act4: u32,
    pub raw: ActSums,
    pub recap_key: LifePathKey,
    pub ages: ActStartAges,
}

/// Pre-reduction differences behind each challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeDiffs {
    pub first: u32,
    pub second: u32,
    pub major: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenges {
    pub first: u32,
    pub second: u32,
    pub major: u32,
    pub raw: ChallengeDiffs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalYear {
    pub total: u32,
    pub reduced: u32,
    pub target_year: u32,
}

/// `day + month + year`, never reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyYear {
    pub year: u32,
}

/// Every figure produced for one birth record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedFigures {
    pub life_path: Figure,
    pub expression: Figure,
    pub resource: Figure,
    pub active: Figure,
    pub hereditary: Figure,
    pub inner_self: Figure,
    pub inner_self_challenge: ConsonantChallenge,
    pub realization: Figure,
    pub spiritual_drive: Figure,
    pub spiritual_drive_challenge: DriveChallenge,
    pub expression_challenge: Figure,
    pub balance: Balance,
    /// Present only when a marital name yielded letters.
    pub marital_name: Option<Figure>,
    pub life_settings: LifeSettings,
    pub life_acts: LifeActs,
    pub soul_lesson: Figure,
    pub challenges: Challenges,
    pub personal_year: PersonalYear,
    pub key_year: KeyYear,
}
