use super::{Dataset, TweetRecord};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;

/// The dataset location is fixed; there are no flags or config files.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/skathirmani/datasets/refs/heads/main/narendramodi_tweets.csv";

/// Every `created_at` value in the dataset uses this timezone-naive format.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The dataset could not be fetched or parsed. Fatal: no partial dataset is
/// ever produced, so the derived year/month fields hold for every record
/// that reaches the pipeline.
#[derive(Debug, Error)]
pub enum DataUnavailableError {
    #[error("failed to fetch dataset: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("failed to parse dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unparseable created_at {value:?} on line {line}")]
    Timestamp { line: usize, value: String },
    #[error("dataset contains no records")]
    Empty,
}

/// Where the raw CSV text comes from. Production uses [`HttpSource`]; tests
/// substitute an in-memory source.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<String, DataUnavailableError>;
}

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .user_agent("Mozilla/5.0 (compatible; tweetboard/1.0)")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<String, DataUnavailableError> {
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// One CSV row as it appears in the source file. Column names must match the
/// dataset exactly; columns beyond these are ignored. The `id` column is not
/// guaranteed to be present.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    id: Option<String>,
    text: String,
    created_at: String,
    source: String,
    retweets_count: u64,
    favorite_count: u64,
    hashtags_count: u64,
}

/// Parse the full CSV body into records, deriving the calendar fields.
/// Any malformed row or timestamp is fatal, not a per-record skip.
pub fn parse_records(csv_text: &str) -> Result<Vec<TweetRecord>, DataUnavailableError> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut records = Vec::new();

    for (index, row) in reader.deserialize::<RawRow>().enumerate() {
        let raw = row?;
        let created_at = NaiveDateTime::parse_from_str(&raw.created_at, TIMESTAMP_FORMAT)
            .map_err(|_| DataUnavailableError::Timestamp {
                // header occupies line 1
                line: index + 2,
                value: raw.created_at.clone(),
            })?;

        records.push(TweetRecord::new(
            raw.id,
            raw.text,
            created_at,
            raw.source,
            raw.retweets_count,
            raw.favorite_count,
            raw.hashtags_count,
        ));
    }

    if records.is_empty() {
        return Err(DataUnavailableError::Empty);
    }
    Ok(records)
}

/// Fetch and parse a dataset from the given source.
pub async fn load_from(source: &dyn DatasetSource) -> Result<Dataset, DataUnavailableError> {
    let body = source.fetch().await?;
    Ok(Dataset::new(parse_records(&body)?))
}

static DATASET: OnceCell<Dataset> = OnceCell::const_new();

/// Load the fixed dataset once per process. Repeated calls return the same
/// cached dataset; a failed load is not cached, so the next call retries.
pub async fn load_dataset() -> Result<&'static Dataset, DataUnavailableError> {
    DATASET
        .get_or_try_init(|| async { load_from(&HttpSource::new(DATASET_URL)).await })
        .await
}
