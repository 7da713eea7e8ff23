use chrono::NaiveDate;
use serde::Serialize;

/// One logical row per calendar date; counters only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySentimentTally {
    pub record_date: NaiveDate,
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordFrequencyEntry {
    pub keyword: String,
    pub count: i64,
    pub window: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordStats {
    pub entries: Vec<KeywordFrequencyEntry>,
    pub period: String,
    pub distinct_keywords: usize,
}

/// Parallel series for the trend chart; index i across all four
/// sequences refers to the same calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentSeries {
    pub dates: Vec<String>,
    pub positive: Vec<i64>,
    pub negative: Vec<i64>,
    pub neutral: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionnaireItem {
    pub emotion_label: String,
    pub review_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelFeedback {
    pub feedback: String,
    pub tips: String,
    pub references: String,
    pub growth_tips: String,
    pub growth_references: String,
}
