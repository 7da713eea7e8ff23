use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::error::Result;
use crate::models::DailySentimentTally;
use crate::store::{CorpusSampler, EventStore, LevelRow, LevelTable, TallyStore};

pub async fn init_db(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub async fn seed(pool: &PgPool) -> anyhow::Result<()> {
    let levels = vec![
        (
            "Beginner (0-4)",
            "You are at the start of building emotional awareness.",
            "Name one emotion out loud each morning before checking your phone.",
            "Permission to Feel, Brackett (2019)",
            "Practice pausing for three breaths before reacting to frustration.",
        ),
        (
            "Intermediate (5-7)",
            "You recognize your emotions but labeling them under pressure is still uneven.",
            "Keep a two-line evening log of the strongest emotion of the day and its trigger.",
            "Atlas of the Heart, Brown (2021)",
            "Try naming the emotion behind a disagreement before stating your position.",
        ),
        (
            "Advanced (8)",
            "You label emotions accurately and usually catch them as they happen.",
            "Widen your vocabulary: swap broad labels like sad for grief, remorse or disappointment.",
            "Emotional Intelligence, Goleman (1995)",
            "Volunteer to mediate one low-stakes conflict this month.",
        ),
        (
            "Expert (9-10)",
            "You read emotions in yourself and others with real precision.",
            "Mentor someone who is earlier in this practice.",
            "How Emotions Are Made, Barrett (2017)",
            "Teach the classification exercise to a peer and compare notes afterwards.",
        ),
    ];

    for (level, feedback, tips, refs, growth_tips) in levels {
        sqlx::query(
            r#"
            INSERT INTO emotional_levels (level, test_feedback, tips, refs, growth_tips)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (level) DO UPDATE
            SET test_feedback = EXCLUDED.test_feedback,
                tips = EXCLUDED.tips,
                refs = EXCLUDED.refs,
                growth_tips = EXCLUDED.growth_tips
            "#,
        )
        .bind(level)
        .bind(feedback)
        .bind(tips)
        .bind(refs)
        .bind(growth_tips)
        .execute(pool)
        .await?;
    }

    let comments = vec![
        ("joy", "Got the internship offer this morning and I have not stopped smiling since."),
        ("gratitude", "My neighbour shoveled my whole driveway before I even woke up."),
        ("relief", "The biopsy came back clean. I can finally breathe again."),
        ("pride", "Finished my first 10k without walking a single stretch."),
        ("sadness", "Packed up my grandmother's kitchen this weekend. The house feels hollow now."),
        ("anger", "They cancelled the project after we worked weekends for a month, no explanation."),
        ("fear", "The turbulence got bad enough that the crew strapped in mid-service."),
        ("disappointment", "Drove two hours for the exhibit and it closed early without notice."),
        ("nervousness", "Presenting to the board tomorrow and my slides still feel thin."),
        ("neutral", "The package arrived on Tuesday, as scheduled."),
        ("curiosity", "Found an unlabeled key in the old desk drawer. What does it open?"),
        ("embarrassment", "Called the new manager by the wrong name twice in one meeting."),
    ];

    for (label, text) in comments {
        sqlx::query(
            r#"
            INSERT INTO labeled_comments (id, emotion_label, review_text)
            VALUES ($1, $2, $3)
            ON CONFLICT (review_text) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(label)
        .bind(text)
        .execute(pool)
        .await?;
    }

    Ok(())
}

/// Postgres-backed implementation of all four collaborator stores.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl EventStore for PgStore {
    async fn append(&self, keyword: &str, recorded_at: DateTime<Utc>) -> Result<()> {
        sqlx::query(
            "INSERT INTO emotion_keywords (id, keyword, recorded_at) VALUES ($1, $2, $3)",
        )
        .bind(Uuid::new_v4())
        .bind(keyword)
        .bind(recorded_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn grouped_counts(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<(String, i64)>> {
        let rows = sqlx::query(
            "SELECT keyword, COUNT(*) AS count \
             FROM emotion_keywords \
             WHERE recorded_at >= $1 AND recorded_at <= $2 \
             GROUP BY keyword \
             ORDER BY count DESC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get("keyword"), row.get("count")))
            .collect())
    }
}

#[async_trait]
impl TallyStore for PgStore {
    async fn increment(
        &self,
        date: NaiveDate,
        positive: i64,
        negative: i64,
        neutral: i64,
    ) -> Result<()> {
        // Single atomic conditional write: the primary key on record_date
        // turns a racing insert into an in-place increment, so two
        // concurrent calls for a brand-new date cannot produce two rows.
        sqlx::query(
            r#"
            INSERT INTO sentiment_tallies (record_date, positive, negative, neutral)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (record_date) DO UPDATE
            SET positive = sentiment_tallies.positive + EXCLUDED.positive,
                negative = sentiment_tallies.negative + EXCLUDED.negative,
                neutral = sentiment_tallies.neutral + EXCLUDED.neutral
            "#,
        )
        .bind(date)
        .bind(positive)
        .bind(negative)
        .bind(neutral)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn all_ordered(&self) -> Result<Vec<DailySentimentTally>> {
        let rows = sqlx::query(
            "SELECT record_date, positive, negative, neutral \
             FROM sentiment_tallies \
             ORDER BY record_date ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| DailySentimentTally {
                record_date: row.get("record_date"),
                positive: row.get("positive"),
                negative: row.get("negative"),
                neutral: row.get("neutral"),
            })
            .collect())
    }
}

#[async_trait]
impl CorpusSampler for PgStore {
    async fn sample(&self, limit: i64) -> Result<Vec<(String, String)>> {
        let rows = sqlx::query(
            "SELECT emotion_label, review_text \
             FROM labeled_comments \
             ORDER BY random() \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get("emotion_label"), row.get("review_text")))
            .collect())
    }
}

#[async_trait]
impl LevelTable for PgStore {
    async fn find_by_label(&self, label: &str) -> Result<Option<LevelRow>> {
        let row = sqlx::query(
            "SELECT test_feedback, tips, refs, growth_tips \
             FROM emotional_levels \
             WHERE level = $1",
        )
        .bind(label)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| LevelRow {
            feedback: row.get("test_feedback"),
            tips: row.get("tips"),
            refs: row.get("refs"),
            growth_tips: row.get("growth_tips"),
        }))
    }
}
