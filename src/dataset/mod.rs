pub mod filter;
pub mod loader;

pub use filter::{filter, FilterCriteria, FilteredView};
pub use loader::{load_dataset, DataUnavailableError, DatasetSource, HttpSource};

use chrono::{Datelike, NaiveDateTime};
use std::collections::BTreeSet;
use std::fmt;

/// One row of the source dataset, with calendar fields derived once at
/// construction. `year` and `month` are functions of `created_at` only and
/// never change after load.
#[derive(Debug, Clone)]
pub struct TweetRecord {
    pub id: Option<String>,
    pub text: String,
    pub created_at: NaiveDateTime,
    pub source: String,
    pub retweets_count: u64,
    pub favorite_count: u64,
    pub hashtags_count: u64,
    year: i32,
    month: MonthKey,
}

impl TweetRecord {
    pub fn new(
        id: Option<String>,
        text: String,
        created_at: NaiveDateTime,
        source: String,
        retweets_count: u64,
        favorite_count: u64,
        hashtags_count: u64,
    ) -> Self {
        Self {
            id,
            text,
            source,
            retweets_count,
            favorite_count,
            hashtags_count,
            year: created_at.year(),
            month: MonthKey::from_datetime(&created_at),
            created_at,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }
}

/// Year-month bucket key. Two instants in the same calendar month map to the
/// same key; `Ord` is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    pub fn from_datetime(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// The loaded dataset: every record plus the distinct years and sources
/// present in it (the option lists offered by the filter panel). Immutable
/// after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<TweetRecord>,
    years: Vec<i32>,
    sources: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<TweetRecord>) -> Self {
        let years: BTreeSet<i32> = records.iter().map(|r| r.year()).collect();
        let sources: BTreeSet<String> = records.iter().map(|r| r.source.clone()).collect();

        Self {
            records,
            years: years.into_iter().collect(),
            sources: sources.into_iter().collect(),
        }
    }

    pub fn records(&self) -> &[TweetRecord] {
        &self.records
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Distinct source strings present, sorted.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::NaiveDate;

    pub fn make_record(
        text: &str,
        date: (i32, u32, u32),
        source: &str,
        retweets: u64,
        favorites: u64,
        hashtags: u64,
    ) -> TweetRecord {
        let created_at = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        TweetRecord::new(
            None,
            text.to_string(),
            created_at,
            source.to_string(),
            retweets,
            favorites,
            hashtags,
        )
    }
}
