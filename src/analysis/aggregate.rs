use crate::dataset::{FilteredView, MonthKey, TweetRecord};
use std::collections::BTreeMap;

/// Arithmetic mean of retweet counts over the view, full precision.
/// Callers reach this only through the empty-view short-circuit.
pub fn mean_retweets(view: &FilteredView) -> f64 {
    mean(view, |r| r.retweets_count)
}

/// Arithmetic mean of favorite counts over the view, full precision.
pub fn mean_likes(view: &FilteredView) -> f64 {
    mean(view, |r| r.favorite_count)
}

fn mean<F>(view: &FilteredView, field: F) -> f64
where
    F: Fn(&TweetRecord) -> u64,
{
    let total: u64 = view.iter().map(field).sum();
    total as f64 / view.len() as f64
}

/// Number of tweets per month bucket, chronologically ordered by key.
pub fn monthly_tweet_counts(view: &FilteredView) -> Vec<(MonthKey, usize)> {
    let mut buckets: BTreeMap<MonthKey, usize> = BTreeMap::new();
    for record in view.iter() {
        *buckets.entry(record.month()).or_insert(0) += 1;
    }
    buckets.into_iter().collect()
}

/// Sum of `hashtags_count` per month bucket, chronologically ordered by key.
pub fn monthly_hashtag_sums(view: &FilteredView) -> Vec<(MonthKey, u64)> {
    let mut buckets: BTreeMap<MonthKey, u64> = BTreeMap::new();
    for record in view.iter() {
        *buckets.entry(record.month()).or_insert(0) += record.hashtags_count;
    }
    buckets.into_iter().collect()
}
