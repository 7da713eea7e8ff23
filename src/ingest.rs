use chrono::Utc;
use tracing::{error, info};

use crate::error::Result;
use crate::sentiment::{SentimentBucket, SentimentLexicon};
use crate::store::{EventStore, TallyStore};

/// Records one emotion keyword: appends the raw event, classifies it,
/// then bumps the matching counter on today's tally. Returns `false` on
/// any failure instead of propagating it. A failure after the event
/// append is not rolled back, so the event log and the tally are allowed
/// to diverge (at-least-once, best-effort).
pub async fn ingest(
    events: &dyn EventStore,
    tallies: &dyn TallyStore,
    lexicon: &SentimentLexicon,
    keyword: &str,
) -> bool {
    match record(events, tallies, lexicon, keyword).await {
        Ok(bucket) => {
            info!(keyword, bucket = bucket.as_str(), "recorded emotion");
            true
        }
        Err(err) => {
            error!(keyword, %err, "failed to process emotion");
            false
        }
    }
}

async fn record(
    events: &dyn EventStore,
    tallies: &dyn TallyStore,
    lexicon: &SentimentLexicon,
    keyword: &str,
) -> Result<SentimentBucket> {
    // The timestamp is derived once; every step of the pipeline sees the
    // same instant and the same calendar date.
    let now = Utc::now();

    events.append(keyword, now).await?;

    let bucket = lexicon.classify(keyword);
    let (positive, negative, neutral) = match bucket {
        SentimentBucket::Positive => (1, 0, 0),
        SentimentBucket::Negative => (0, 1, 0),
        SentimentBucket::Neutral => (0, 0, 1),
    };
    tallies.increment(now.date_naive(), positive, negative, neutral).await?;

    Ok(bucket)
}
