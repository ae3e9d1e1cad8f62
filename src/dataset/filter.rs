use super::TweetRecord;
use std::collections::BTreeSet;

/// The active filter selection: exactly one year and a set of sources.
/// An empty source set is a valid selection meaning "no sources chosen" —
/// it matches nothing. It is not a wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub year: i32,
    pub sources: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new(year: i32, sources: BTreeSet<String>) -> Self {
        Self { year, sources }
    }

    fn matches(&self, record: &TweetRecord) -> bool {
        record.year() == self.year && self.sources.contains(&record.source)
    }
}

/// Read-only subsequence of the dataset matching the active criteria, in
/// original record order. Recomputed fully on every criteria change and
/// discarded once metrics are derived.
#[derive(Debug)]
pub struct FilteredView<'a> {
    records: Vec<&'a TweetRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a TweetRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a TweetRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Select records where `year == criteria.year` AND the source is one of the
/// chosen sources. The input is untouched.
pub fn filter<'a>(records: &'a [TweetRecord], criteria: &FilterCriteria) -> FilteredView<'a> {
    FilteredView {
        records: records.iter().filter(|r| criteria.matches(r)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::make_record;

    fn sample_records() -> Vec<TweetRecord> {
        vec![
            make_record("first", (2020, 1, 5), "Twitter Web App", 10, 20, 1),
            make_record("second", (2020, 3, 9), "Android", 4, 8, 0),
            make_record("third", (2020, 6, 1), "Twitter Web App", 6, 30, 2),
            make_record("fourth", (2021, 2, 14), "Twitter Web App", 1, 2, 0),
            make_record("fifth", (2021, 7, 30), "Android", 9, 3, 1),
        ]
    }

    fn sources(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filter_year_and_source() {
        let records = sample_records();
        let criteria = FilterCriteria::new(2020, sources(&["Twitter Web App"]));
        let view = filter(&records, &criteria);

        assert_eq!(view.len(), 2);
        assert_eq!(view.records()[0].text, "first");
        assert_eq!(view.records()[1].text, "third");
    }

    #[test]
    fn test_filter_multiple_sources_preserves_order() {
        let records = sample_records();
        let criteria = FilterCriteria::new(2020, sources(&["Twitter Web App", "Android"]));
        let view = filter(&records, &criteria);

        let texts: Vec<&str> = view.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_source_set_yields_empty_view() {
        let records = sample_records();
        for year in [2020, 2021, 1999] {
            let view = filter(&records, &FilterCriteria::new(year, BTreeSet::new()));
            assert!(view.is_empty());
        }
    }

    #[test]
    fn test_filter_no_matching_year() {
        let records = sample_records();
        let criteria = FilterCriteria::new(2019, sources(&["Android"]));
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let records = sample_records();
        let before: Vec<String> = records.iter().map(|r| r.text.clone()).collect();
        let _ = filter(&records, &FilterCriteria::new(2020, sources(&["Android"])));
        let after: Vec<String> = records.iter().map(|r| r.text.clone()).collect();
        assert_eq!(before, after);
    }
}
