use crate::models::{CommentRecord, SentimentCount};
use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Three-way split of a polarity score; exactly zero is Neutral.
    pub fn from_polarity(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Produces a polarity in [-1, 1] for a piece of text.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

/// VADER compound score: a normalised sum over a ~7500 entry lexicon with
/// negation, boosters, capitalisation, punctuation and emoji handling.
/// Text with no lexicon hits scores exactly 0.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct VaderScorer;

impl PolarityScorer for VaderScorer {
    fn polarity(&self, text: &str) -> f64 {
        let analyzer = SentimentIntensityAnalyzer::new();
        analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}

/// Labels one comment with the built-in scorer.
pub fn classify(comment_text: &str) -> Sentiment {
    classify_with(&VaderScorer, comment_text)
}

pub fn classify_with(scorer: &dyn PolarityScorer, comment_text: &str) -> Sentiment {
    if comment_text.trim().is_empty() {
        return Sentiment::Neutral;
    }
    Sentiment::from_polarity(scorer.polarity(comment_text))
}

/// Pairs every comment with its label, keeping the input order.
pub fn analyze_comments(comments: Vec<String>) -> Vec<CommentRecord> {
    comments
        .into_iter()
        .map(|text| {
            let sentiment = classify(&text);
            CommentRecord { text, sentiment }
        })
        .collect()
}

/// Counts per label, always in Positive, Negative, Neutral order.
pub fn sentiment_counts(records: &[CommentRecord]) -> Vec<SentimentCount> {
    Sentiment::ALL
        .iter()
        .map(|&sentiment| SentimentCount {
            sentiment,
            count: records.iter().filter(|r| r.sentiment == sentiment).count(),
        })
        .collect()
}
