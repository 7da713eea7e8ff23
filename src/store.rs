use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::Result;
use crate::models::DailySentimentTally;

/// Append-only log of raw emotion keyword events.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn append(&self, keyword: &str, recorded_at: DateTime<Utc>) -> Result<()>;

    /// Per-keyword event counts for `recorded_at` in `[start, end]`
    /// inclusive, ordered descending by count.
    async fn grouped_counts(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<(String, i64)>>;
}

/// Per-day sentiment counters. At most one row exists per date.
#[async_trait]
pub trait TallyStore: Send + Sync {
    /// Atomic upsert: inserts the row for `date` or adds the deltas to
    /// the existing one. Concurrent calls for the same new date must
    /// not produce two rows.
    async fn increment(
        &self,
        date: NaiveDate,
        positive: i64,
        negative: i64,
        neutral: i64,
    ) -> Result<()>;

    async fn all_ordered(&self) -> Result<Vec<DailySentimentTally>>;
}

/// Labeled corpus the questionnaire samples from, uniformly and without
/// replacement. Fewer rows than requested is not an error.
#[async_trait]
pub trait CorpusSampler: Send + Sync {
    async fn sample(&self, limit: i64) -> Result<Vec<(String, String)>>;
}

#[derive(Debug, Clone)]
pub struct LevelRow {
    pub feedback: String,
    pub tips: String,
    pub refs: String,
    pub growth_tips: String,
}

#[async_trait]
pub trait LevelTable: Send + Sync {
    async fn find_by_label(&self, label: &str) -> Result<Option<LevelRow>>;
}
