//! Recap table: ages at which life acts and cycles begin.
//!
//! Pure lookup keyed by the canonical life-path grouping; nothing here is
//! computed.

use numerology_model::{
    ActStartAges, CycleStartAges, LifePathKey, NumerologyError, RecapAges, Result,
};

const fn acts(act2: u32, act3: u32, act4: u32) -> ActStartAges {
    ActStartAges { act2, act3, act4 }
}

const fn cycles(cycle2: u32, cycle3: u32) -> CycleStartAges {
    CycleStartAges { cycle2, cycle3 }
}

const ACT_START_AGES: [(LifePathKey, ActStartAges); 9] = [
    (LifePathKey::One, acts(35, 44, 53)),
    (LifePathKey::TwoEleven, acts(34, 43, 52)),
    (LifePathKey::Three, acts(33, 42, 51)),
    (LifePathKey::FourTwentyTwo, acts(32, 41, 50)),
    (LifePathKey::Five, acts(31, 40, 49)),
    (LifePathKey::SixThirtyThree, acts(30, 39, 48)),
    (LifePathKey::Seven, acts(29, 38, 47)),
    (LifePathKey::EightFortyFour, acts(28, 37, 46)),
    (LifePathKey::Nine, acts(27, 36, 45)),
];

const CYCLE_START_AGES: [(LifePathKey, CycleStartAges); 9] = [
    (LifePathKey::One, cycles(27, 54)),
    (LifePathKey::TwoEleven, cycles(26, 53)),
    (LifePathKey::Three, cycles(25, 52)),
    (LifePathKey::FourTwentyTwo, cycles(24, 60)),
    (LifePathKey::Five, cycles(32, 59)),
    (LifePathKey::SixThirtyThree, cycles(31, 58)),
    (LifePathKey::Seven, cycles(30, 57)),
    (LifePathKey::EightFortyFour, cycles(29, 56)),
    (LifePathKey::Nine, cycles(28, 55)),
];

/// Canonical recap key for a reduced life path.
///
/// # Errors
///
/// [`NumerologyError::UnsupportedLifePath`] for anything outside the nine
/// outcomes a reduction can produce.
pub fn life_path_key(reduced: u32) -> Result<LifePathKey> {
    let key = match reduced {
        1 => LifePathKey::One,
        2 | 11 => LifePathKey::TwoEleven,
        3 => LifePathKey::Three,
        4 | 22 => LifePathKey::FourTwentyTwo,
        5 => LifePathKey::Five,
        6 | 33 => LifePathKey::SixThirtyThree,
        7 => LifePathKey::Seven,
        8 | 44 => LifePathKey::EightFortyFour,
        9 => LifePathKey::Nine,
        other => return Err(NumerologyError::UnsupportedLifePath { reduced: other }),
    };
    Ok(key)
}

fn lookup<T: Copy>(table: &[(LifePathKey, T)], key: LifePathKey) -> Result<T> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, ages)| *ages)
        .ok_or_else(|| NumerologyError::RecapLookupFailed {
            key: key.as_str().to_string(),
        })
}

pub fn act_start_ages(key: LifePathKey) -> Result<ActStartAges> {
    lookup(&ACT_START_AGES, key)
}

pub fn cycle_start_ages(key: LifePathKey) -> Result<CycleStartAges> {
    lookup(&CYCLE_START_AGES, key)
}

/// Resolve act and cycle start ages for a reduced life path.
pub fn recap_ages(life_path_reduced: u32) -> Result<RecapAges> {
    let key = life_path_key(life_path_reduced)?;
    Ok(RecapAges {
        key,
        acts: act_start_ages(key)?,
        cycles: cycle_start_ages(key)?,
    })
}

/// Every row of the recap table, in key order.
pub fn recap_table() -> Result<Vec<RecapAges>> {
    LifePathKey::ALL
        .iter()
        .map(|&key| {
            Ok(RecapAges {
                key,
                acts: act_start_ages(key)?,
                cycles: cycle_start_ages(key)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_numbers_share_a_key_with_their_root() {
        assert_eq!(life_path_key(2).unwrap(), LifePathKey::TwoEleven);
        assert_eq!(life_path_key(11).unwrap(), LifePathKey::TwoEleven);
        assert_eq!(life_path_key(22).unwrap(), LifePathKey::FourTwentyTwo);
        assert_eq!(life_path_key(33).unwrap(), LifePathKey::SixThirtyThree);
        assert_eq!(life_path_key(44).unwrap(), LifePathKey::EightFortyFour);
        assert_eq!(life_path_key(7).unwrap(), LifePathKey::Seven);
    }

    #[test]
    fn unreachable_values_are_reported() {
        for value in [0, 10, 12, 55] {
            assert_eq!(
                life_path_key(value).unwrap_err(),
                NumerologyError::UnsupportedLifePath { reduced: value }
            );
        }
    }

    #[test]
    fn recap_ages_for_four_twenty_two() {
        let ages = recap_ages(22).unwrap();
        assert_eq!(ages.key, LifePathKey::FourTwentyTwo);
        assert_eq!(ages.acts, ActStartAges { act2: 32, act3: 41, act4: 50 });
        assert_eq!(ages.cycles, CycleStartAges { cycle2: 24, cycle3: 60 });
    }

    #[test]
    fn recap_table_is_complete() {
        let table = recap_table().unwrap();
        assert_eq!(table.len(), 9);
        for (row, key) in table.iter().zip(LifePathKey::ALL) {
            assert_eq!(row.key, key);
            assert!(row.acts.act2 < row.acts.act3 && row.acts.act3 < row.acts.act4);
            assert!(row.cycles.cycle2 < row.cycles.cycle3);
        }
    }

    #[test]
    fn missing_row_fails_lookup() {
        let partial = [(LifePathKey::One, acts(35, 44, 53))];
        assert_eq!(
            lookup(&partial, LifePathKey::Nine).unwrap_err(),
            NumerologyError::RecapLookupFailed {
                key: "9".to_string()
            }
        );
    }
}
