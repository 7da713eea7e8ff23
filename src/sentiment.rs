use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBucket {
    Positive,
    Negative,
    Neutral,
}

impl SentimentBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentBucket::Positive => "positive",
            SentimentBucket::Negative => "negative",
            SentimentBucket::Neutral => "neutral",
        }
    }
}

const POSITIVE_EMOTIONS: &[&str] = &[
    "joy",
    "excitement",
    "love",
    "admiration",
    "amusement",
    "approval",
    "gratitude",
    "pride",
    "relief",
    "optimism",
    "caring",
    "curiosity",
    "surprise",
    "realization",
];

const NEGATIVE_EMOTIONS: &[&str] = &[
    "sadness",
    "disappointment",
    "grief",
    "remorse",
    "embarrassment",
    "fear",
    "nervousness",
    "anger",
    "annoyance",
    "disapproval",
    "disgust",
];

/// Immutable classification table built once at startup and passed by
/// reference wherever a keyword needs a bucket.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl SentimentLexicon {
    pub fn new() -> Self {
        SentimentLexicon {
            positive: POSITIVE_EMOTIONS.iter().copied().collect(),
            negative: NEGATIVE_EMOTIONS.iter().copied().collect(),
        }
    }

    /// Total function: the explicit "neutral" label and any keyword the
    /// table does not know both land in Neutral. Unrecognized input is
    /// absorbed rather than rejected.
    pub fn classify(&self, keyword: &str) -> SentimentBucket {
        let lowered = keyword.to_lowercase();
        if self.positive.contains(lowered.as_str()) {
            SentimentBucket::Positive
        } else if self.negative.contains(lowered.as_str()) {
            SentimentBucket::Negative
        } else {
            SentimentBucket::Neutral
        }
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_positive_emotions_classify_as_positive() {
        let lexicon = SentimentLexicon::new();
        for keyword in POSITIVE_EMOTIONS {
            assert_eq!(lexicon.classify(keyword), SentimentBucket::Positive);
        }
    }

    #[test]
    fn known_negative_emotions_classify_as_negative() {
        let lexicon = SentimentLexicon::new();
        for keyword in NEGATIVE_EMOTIONS {
            assert_eq!(lexicon.classify(keyword), SentimentBucket::Negative);
        }
    }

    #[test]
    fn classification_ignores_case() {
        let lexicon = SentimentLexicon::new();
        assert_eq!(lexicon.classify("Joy"), lexicon.classify("joy"));
        assert_eq!(lexicon.classify("ANGER"), SentimentBucket::Negative);
    }

    #[test]
    fn neutral_label_classifies_as_neutral() {
        let lexicon = SentimentLexicon::new();
        assert_eq!(lexicon.classify("neutral"), SentimentBucket::Neutral);
    }

    #[test]
    fn unknown_and_empty_keywords_fall_back_to_neutral() {
        let lexicon = SentimentLexicon::new();
        assert_eq!(lexicon.classify("ennui"), SentimentBucket::Neutral);
        assert_eq!(lexicon.classify(""), SentimentBucket::Neutral);
    }
}
