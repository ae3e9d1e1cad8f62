use crate::dataset::{FilteredView, TweetRecord};
use std::cmp::Reverse;

/// Top `n` records of the view by a numeric field, descending. The sort is
/// stable, so ties keep their original relative order. Returns fewer than
/// `n` entries when the view is smaller.
pub fn top_by<'a, K, F>(view: &FilteredView<'a>, n: usize, field: F) -> Vec<&'a TweetRecord>
where
    F: Fn(&TweetRecord) -> K,
    K: Ord,
{
    let mut ranked: Vec<&TweetRecord> = view.records().to_vec();
    ranked.sort_by_key(|r| Reverse(field(r)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::make_record;
    use crate::dataset::{filter, FilterCriteria};
    use std::collections::BTreeSet;

    fn view_over(records: &[TweetRecord]) -> FilteredView<'_> {
        let sources: BTreeSet<String> = records.iter().map(|r| r.source.clone()).collect();
        filter(records, &FilterCriteria::new(2020, sources))
    }

    fn sample_records() -> Vec<TweetRecord> {
        vec![
            make_record("low", (2020, 1, 1), "Android", 0, 5, 0),
            make_record("high", (2020, 1, 2), "Android", 0, 90, 0),
            make_record("tie-a", (2020, 1, 3), "Android", 0, 40, 0),
            make_record("tie-b", (2020, 1, 4), "Android", 0, 40, 0),
            make_record("mid", (2020, 1, 5), "Android", 0, 60, 0),
        ]
    }

    #[test]
    fn test_top_by_descending() {
        let records = sample_records();
        let view = view_over(&records);
        let top = top_by(&view, 3, |r| r.favorite_count);

        let texts: Vec<&str> = top.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["high", "mid", "tie-a"]);
    }

    #[test]
    fn test_top_by_ties_keep_original_order() {
        let records = sample_records();
        let view = view_over(&records);
        let top = top_by(&view, 5, |r| r.favorite_count);

        let texts: Vec<&str> = top.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["high", "mid", "tie-a", "tie-b", "low"]);
    }

    #[test]
    fn test_top_by_n_larger_than_view() {
        let records = sample_records();
        let view = view_over(&records);
        let top = top_by(&view, 10, |r| r.favorite_count);
        assert_eq!(top.len(), 5);
        assert!(top.windows(2).all(|w| w[0].favorite_count >= w[1].favorite_count));
    }

    #[test]
    fn test_top_by_output_length() {
        let records = sample_records();
        let view = view_over(&records);
        for n in 0..7 {
            assert_eq!(top_by(&view, n, |r| r.favorite_count).len(), n.min(5));
        }
    }

    #[test]
    fn test_top_by_idempotent() {
        let records = sample_records();
        let view = view_over(&records);
        let first: Vec<&str> = top_by(&view, 3, |r| r.favorite_count)
            .iter()
            .map(|r| r.text.as_str())
            .collect();
        let second: Vec<&str> = top_by(&view, 3, |r| r.favorite_count)
            .iter()
            .map(|r| r.text.as_str())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_top_by_other_field() {
        let records = vec![
            make_record("few", (2020, 1, 1), "Android", 3, 0, 0),
            make_record("many", (2020, 1, 2), "Android", 30, 0, 0),
        ];
        let view = view_over(&records);
        let top = top_by(&view, 1, |r| r.retweets_count);
        assert_eq!(top[0].text, "many");
    }
}
