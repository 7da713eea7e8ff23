use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::Result;
use crate::models::{KeywordFrequencyEntry, KeywordStats};
use crate::store::EventStore;
use crate::window::{self, Period};

/// Ranked keyword frequency table for one named lookback window. The
/// period string is validated before storage is touched; a storage fault
/// surfaces as-is with no partial result.
pub async fn aggregate(
    events: &dyn EventStore,
    period_raw: &str,
    now: DateTime<Utc>,
) -> Result<KeywordStats> {
    let period: Period = period_raw.parse()?;
    let (start, end) = window::resolve(period, now);
    debug!(period = period.as_str(), %start, %end, "resolved keyword stats window");

    let grouped = events.grouped_counts(start, end).await?;

    let mut entries: Vec<KeywordFrequencyEntry> = grouped
        .into_iter()
        .map(|(keyword, count)| KeywordFrequencyEntry {
            keyword,
            count,
            window: period.as_str().to_string(),
        })
        .collect();
    // Stable sort keeps the store's first-seen order for tied counts.
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    let distinct_keywords = entries.len();
    Ok(KeywordStats {
        entries,
        period: period.as_str().to_string(),
        distinct_keywords,
    })
}
