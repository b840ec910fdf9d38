use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named date range a price applies over, e.g. "Winter 2025-26".
///
/// Rate sheet rows reference seasons by label; rows with no dates are
/// treated as valid year-round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Season {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Season {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_range(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start_date: Some(start),
            end_date: Some(end),
        }
    }

    /// Whether a trip date falls inside this season. Open-ended bounds
    /// always match.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let after_start = self.start_date.map_or(true, |s| date >= s);
        let before_end = self.end_date.map_or(true, |e| date <= e);
        after_start && before_end
    }
}
