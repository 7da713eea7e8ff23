use std::str::FromStr;

use tracing::warn;

use crate::error::{AnalyticsError, Result};
use crate::models::{LevelFeedback, QuestionnaireItem};
use crate::store::{CorpusSampler, LevelTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Easy,
    Standard,
    Advanced,
}

impl Mode {
    pub fn question_count(&self) -> i64 {
        match self {
            Mode::Easy => 7,
            Mode::Standard => 15,
            Mode::Advanced => 25,
        }
    }
}

impl FromStr for Mode {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "EASY" => Ok(Mode::Easy),
            "STANDARD" => Ok(Mode::Standard),
            "ADVANCED" => Ok(Mode::Advanced),
            other => Err(AnalyticsError::InvalidArgument(format!(
                "invalid mode: {other} (expected easy, standard or advanced)"
            ))),
        }
    }
}

/// Samples a questionnaire of mode-sized length from the labeled corpus.
/// A corpus shorter than the requested count returns what it has; a
/// sampler fault degrades to an empty questionnaire rather than an
/// error, since this path is non-critical.
pub async fn generate(corpus: &dyn CorpusSampler, mode_raw: &str) -> Result<Vec<QuestionnaireItem>> {
    let mode: Mode = mode_raw.parse()?;

    match corpus.sample(mode.question_count()).await {
        Ok(rows) => Ok(rows
            .into_iter()
            .map(|(emotion_label, review_text)| QuestionnaireItem {
                emotion_label,
                review_text,
            })
            .collect()),
        Err(err) => {
            warn!(%err, "corpus sampling failed, returning empty questionnaire");
            Ok(Vec::new())
        }
    }
}

/// The numeric level and the label rank deliberately disagree; the
/// mapping mirrors how the feedback rows are keyed.
pub fn level_label(level: i32) -> Result<&'static str> {
    match level {
        1 => Ok("Advanced (8)"),
        2 => Ok("Beginner (0-4)"),
        3 => Ok("Expert (9-10)"),
        4 => Ok("Intermediate (5-7)"),
        other => Err(AnalyticsError::InvalidArgument(format!(
            "invalid level: {other} (valid levels are 1, 2, 3, 4)"
        ))),
    }
}

pub async fn level_feedback(levels: &dyn LevelTable, level: i32) -> Result<LevelFeedback> {
    let label = level_label(level)?;

    let row = levels
        .find_by_label(label)
        .await?
        .ok_or_else(|| AnalyticsError::NotFound(format!("no feedback row for level {level}")))?;

    // The table has no growth references column; the plain references
    // stand in for them.
    Ok(LevelFeedback {
        feedback: row.feedback,
        tips: row.tips,
        references: row.refs.clone(),
        growth_tips: row.growth_tips,
        growth_references: row.refs,
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::Mutex;

    use super::*;
    use crate::store::memory::{MemoryCorpus, MemoryLevelTable};
    use crate::store::LevelRow;

    fn corpus_of(n: usize) -> MemoryCorpus {
        MemoryCorpus {
            rows: (0..n)
                .map(|i| (format!("joy-{i}"), format!("review text {i}")))
                .collect(),
        }
    }

    #[tokio::test]
    async fn easy_mode_yields_seven_items() {
        let corpus = corpus_of(100);
        let items = generate(&corpus, "EASY").await.unwrap();
        assert_eq!(items.len(), 7);
    }

    #[tokio::test]
    async fn mode_parse_is_case_insensitive() {
        let corpus = corpus_of(100);
        let upper = generate(&corpus, "EASY").await.unwrap();
        let lower = generate(&corpus, "easy").await.unwrap();
        assert_eq!(upper.len(), lower.len());

        assert_eq!(generate(&corpus, "Standard").await.unwrap().len(), 15);
        assert_eq!(generate(&corpus, "advanced").await.unwrap().len(), 25);
    }

    #[tokio::test]
    async fn unknown_mode_is_rejected() {
        let corpus = corpus_of(100);
        let err = generate(&corpus, "Expert").await.unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn short_corpus_returns_what_it_has() {
        let corpus = corpus_of(3);
        let items = generate(&corpus, "advanced").await.unwrap();
        assert_eq!(items.len(), 3);
    }

    struct FailingCorpus;

    #[async_trait]
    impl CorpusSampler for FailingCorpus {
        async fn sample(&self, _limit: i64) -> crate::error::Result<Vec<(String, String)>> {
            Err(AnalyticsError::Storage(sqlx::Error::PoolClosed))
        }
    }

    #[tokio::test]
    async fn sampler_fault_degrades_to_empty_questionnaire() {
        let items = generate(&FailingCorpus, "standard").await.unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn level_labels_follow_the_fixed_mapping() {
        assert_eq!(level_label(1).unwrap(), "Advanced (8)");
        assert_eq!(level_label(2).unwrap(), "Beginner (0-4)");
        assert_eq!(level_label(3).unwrap(), "Expert (9-10)");
        assert_eq!(level_label(4).unwrap(), "Intermediate (5-7)");
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        for level in [0, 5, -1] {
            assert!(matches!(
                level_label(level),
                Err(AnalyticsError::InvalidArgument(_))
            ));
        }
    }

    /// Records the label it was queried with so tests can assert the
    /// level-to-label mapping reached the table.
    struct RecordingLevelTable {
        inner: MemoryLevelTable,
        queried: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LevelTable for RecordingLevelTable {
        async fn find_by_label(&self, label: &str) -> crate::error::Result<Option<LevelRow>> {
            self.queried.lock().unwrap().push(label.to_string());
            self.inner.find_by_label(label).await
        }
    }

    fn table_with(label: &str) -> RecordingLevelTable {
        let mut inner = MemoryLevelTable::default();
        inner.rows.insert(
            label.to_string(),
            LevelRow {
                feedback: "You read emotions with real precision.".to_string(),
                tips: "Keep journaling daily.".to_string(),
                refs: "Emotional Intelligence, Goleman (1995)".to_string(),
                growth_tips: "Coach someone else through a conflict.".to_string(),
            },
        );
        RecordingLevelTable {
            inner,
            queried: Mutex::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn level_three_looks_up_the_expert_label() {
        let table = table_with("Expert (9-10)");
        let feedback = level_feedback(&table, 3).await.unwrap();

        assert_eq!(table.queried.lock().unwrap().as_slice(), ["Expert (9-10)"]);
        assert_eq!(feedback.feedback, "You read emotions with real precision.");
        assert_eq!(feedback.growth_references, feedback.references);
    }

    #[tokio::test]
    async fn missing_row_surfaces_as_not_found() {
        let table = MemoryLevelTable::default();
        let err = level_feedback(&table, 2).await.unwrap_err();
        assert!(matches!(err, AnalyticsError::NotFound(_)));
    }

    #[tokio::test]
    async fn invalid_level_never_reaches_the_table() {
        let table = table_with("Expert (9-10)");
        let err = level_feedback(&table, 5).await.unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
        assert!(table.queried.lock().unwrap().is_empty());
    }
}
