use crate::utils::format_number;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub name: String,
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
    pub uploads_playlist_id: String,
}

impl ChannelSummary {
    /// Label -> value pairs shown in the channel info card.
    pub fn labeled(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Channel Name", self.name.clone()),
            ("Subscribers", format_number(self.subscriber_count)),
            ("Views", format_number(self.view_count)),
            ("Total Videos", format_number(self.video_count)),
            ("Uploads Playlist", self.uploads_playlist_id.clone()),
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub title: String,
    pub video_id: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub duration_seconds: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            Sentiment::Positive => "bg-green-500",
            Sentiment::Negative => "bg-red-500",
            Sentiment::Neutral => "bg-gray-400",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommentRecord {
    pub text: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WordWeight {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentAnalysis {
    pub comments: Vec<CommentRecord>,
    pub sentiment_counts: Vec<SentimentCount>,
    pub word_cloud: Vec<WordWeight>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_summary_labels_follow_the_card_order() {
        let summary = ChannelSummary {
            name: "Rust Videos".to_string(),
            subscriber_count: 1_234_567,
            view_count: 42,
            video_count: 3,
            uploads_playlist_id: "UU123".to_string(),
        };

        let labels: Vec<&str> = summary.labeled().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["Channel Name", "Subscribers", "Views", "Total Videos", "Uploads Playlist"]
        );
        assert_eq!(summary.labeled()[1].1, "1,234,567");
    }

    #[test]
    fn sentiment_labels_match_backend_names() {
        assert_eq!(Sentiment::Positive.label(), "Positive");
        assert_eq!(Sentiment::Negative.label(), "Negative");
        assert_eq!(Sentiment::Neutral.label(), "Neutral");
    }
}
