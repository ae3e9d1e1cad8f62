pub mod aggregate;
pub mod hashtags;
pub mod rank;
pub mod sentiment;

use crate::dataset::{filter, FilterCriteria, MonthKey, TweetRecord};
use sentiment::{PolarityModel, SentimentDistribution};

pub const TOP_TWEET_COUNT: usize = 10;
pub const TOP_HASHTAG_COUNT: usize = 10;

/// One entry of the top-tweets table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopTweet {
    pub text: String,
    pub favorite_count: u64,
}

/// Everything the presentation layer renders for one filter selection.
/// Averages carry full precision; two decimals are applied at display time.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub tweet_count: usize,
    pub average_retweets: f64,
    pub average_likes: f64,
    pub monthly_tweet_counts: Vec<(MonthKey, usize)>,
    pub monthly_hashtag_sums: Vec<(MonthKey, u64)>,
    pub top_tweets: Vec<TopTweet>,
    pub top_hashtags: Vec<(String, usize)>,
    pub sentiment: SentimentDistribution,
}

/// Run the whole pipeline for one filter selection: filter, then aggregate,
/// rank, and classify over the resulting view. Returns `None` when the view
/// is empty — the recognized "no data" terminal state that short-circuits
/// every downstream stage, so no mean is ever taken over zero records.
pub fn compute_dashboard(
    records: &[TweetRecord],
    criteria: &FilterCriteria,
    model: &dyn PolarityModel,
) -> Option<DashboardData> {
    let view = filter(records, criteria);
    if view.is_empty() {
        return None;
    }

    let top_tweets = rank::top_by(&view, TOP_TWEET_COUNT, |r| r.favorite_count)
        .into_iter()
        .map(|r| TopTweet {
            text: r.text.clone(),
            favorite_count: r.favorite_count,
        })
        .collect();

    Some(DashboardData {
        tweet_count: view.len(),
        average_retweets: aggregate::mean_retweets(&view),
        average_likes: aggregate::mean_likes(&view),
        monthly_tweet_counts: aggregate::monthly_tweet_counts(&view),
        monthly_hashtag_sums: aggregate::monthly_hashtag_sums(&view),
        top_tweets,
        top_hashtags: hashtags::top_hashtags(&view, TOP_HASHTAG_COUNT),
        sentiment: sentiment::distribution(&view, model),
    })
}

#[cfg(test)]
mod tests {
    use super::sentiment::LexiconModel;
    use super::*;
    use crate::dataset::test_support::make_record;
    use std::collections::BTreeSet;

    fn sources(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// 3 records in 2020 (Twitter Web App, Android, Twitter Web App), 2 in 2021.
    fn sample_records() -> Vec<TweetRecord> {
        vec![
            make_record("new year #resolve", (2020, 1, 1), "Twitter Web App", 10, 30, 1),
            make_record("spring update", (2020, 4, 10), "Android", 2, 4, 0),
            make_record("winter recap #recap", (2020, 12, 20), "Twitter Web App", 20, 50, 1),
            make_record("fresh start", (2021, 1, 2), "Twitter Web App", 1, 1, 0),
            make_record("mid year", (2021, 6, 15), "Android", 3, 7, 0),
        ]
    }

    #[test]
    fn test_scenario_year_and_single_source() {
        let records = sample_records();
        let criteria = FilterCriteria::new(2020, sources(&["Twitter Web App"]));
        let data = compute_dashboard(&records, &criteria, &LexiconModel).unwrap();

        assert_eq!(data.tweet_count, 2);
        assert!((data.average_retweets - 15.0).abs() < 1e-12);
        assert!((data.average_likes - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_scenario_empty_source_set_is_no_data() {
        let records = sample_records();
        for year in [2020, 2021] {
            let criteria = FilterCriteria::new(year, BTreeSet::new());
            assert!(compute_dashboard(&records, &criteria, &LexiconModel).is_none());
        }
    }

    #[test]
    fn test_scenario_top10_on_small_view() {
        let records = sample_records();
        let criteria = FilterCriteria::new(2020, sources(&["Twitter Web App", "Android"]));
        let data = compute_dashboard(&records, &criteria, &LexiconModel).unwrap();

        assert_eq!(data.top_tweets.len(), 3);
        assert!(data
            .top_tweets
            .windows(2)
            .all(|w| w[0].favorite_count >= w[1].favorite_count));
        assert_eq!(data.top_tweets[0].text, "winter recap #recap");
    }

    #[test]
    fn test_monthly_counts_sum_to_tweet_count() {
        let records = sample_records();
        let criteria = FilterCriteria::new(2020, sources(&["Twitter Web App", "Android"]));
        let data = compute_dashboard(&records, &criteria, &LexiconModel).unwrap();

        let total: usize = data.monthly_tweet_counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, data.tweet_count);
    }

    #[test]
    fn test_sentiment_counts_cover_view() {
        let records = sample_records();
        let criteria = FilterCriteria::new(2020, sources(&["Twitter Web App", "Android"]));
        let data = compute_dashboard(&records, &criteria, &LexiconModel).unwrap();
        assert_eq!(data.sentiment.total(), data.tweet_count);
    }

    #[test]
    fn test_hashtags_come_from_text() {
        let records = sample_records();
        let criteria = FilterCriteria::new(2020, sources(&["Twitter Web App"]));
        let data = compute_dashboard(&records, &criteria, &LexiconModel).unwrap();

        let tags: Vec<&str> = data.top_hashtags.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tags, vec!["recap", "resolve"]);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let records = sample_records();
        let criteria = FilterCriteria::new(2020, sources(&["Twitter Web App"]));
        let a = compute_dashboard(&records, &criteria, &LexiconModel).unwrap();
        let b = compute_dashboard(&records, &criteria, &LexiconModel).unwrap();

        assert_eq!(a.tweet_count, b.tweet_count);
        assert_eq!(a.monthly_tweet_counts, b.monthly_tweet_counts);
        assert_eq!(a.top_tweets, b.top_tweets);
        assert_eq!(a.sentiment, b.sentiment);
    }
}
