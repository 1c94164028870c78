use alloc::collections::BTreeMap;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::Difficulty;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTime {
    pub secs: u32,
    /// Display date of the run, formatted by whoever records it.
    pub date: String,
}

/// Fastest completion per difficulty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestTimes {
    by_difficulty: BTreeMap<Difficulty, BestTime>,
}

impl BestTimes {
    pub fn best(&self, difficulty: Difficulty) -> Option<&BestTime> {
        self.by_difficulty.get(&difficulty)
    }

    /// Stores `secs` when it beats the current record, returning whether it did.
    pub fn record(&mut self, difficulty: Difficulty, secs: u32, date: impl Into<String>) -> bool {
        let is_record = self
            .best(difficulty)
            .is_none_or(|best| secs < best.secs);

        if is_record {
            log::debug!("New best time for {}: {}s", difficulty.label(), secs);
            self.by_difficulty.insert(
                difficulty,
                BestTime {
                    secs,
                    date: date.into(),
                },
            );
        }

        is_record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_win_is_always_a_record() {
        let mut times = BestTimes::default();

        assert!(times.record(Difficulty::Beginner, 120, "2026-10-19"));
        assert_eq!(times.best(Difficulty::Beginner).map(|best| best.secs), Some(120));
        assert_eq!(times.best(Difficulty::Expert), None);
    }

    #[test]
    fn only_faster_times_replace_record() {
        let mut times = BestTimes::default();
        times.record(Difficulty::Expert, 300, "first");

        assert!(!times.record(Difficulty::Expert, 300, "tie"));
        assert!(!times.record(Difficulty::Expert, 301, "slower"));
        assert!(times.record(Difficulty::Expert, 299, "faster"));

        let best = times.best(Difficulty::Expert).unwrap();
        assert_eq!(best.secs, 299);
        assert_eq!(best.date, "faster");
    }

    #[test]
    fn records_are_keyed_by_difficulty_name() {
        let mut times = BestTimes::default();
        times.record(Difficulty::Intermediate, 77, "2026-10-19");

        let json = serde_json::to_string(&times).unwrap();

        assert_eq!(json, r#"{"intermediate":{"secs":77,"date":"2026-10-19"}}"#);
        assert_eq!(serde_json::from_str::<BestTimes>(&json).unwrap(), times);
    }

    #[test]
    fn malformed_records_do_not_parse() {
        assert!(serde_json::from_str::<BestTimes>(r#"{"beginner":"fast"}"#).is_err());
        assert!(serde_json::from_str::<BestTimes>(r#"{"nightmare":{"secs":1,"date":""}}"#).is_err());
    }
}
