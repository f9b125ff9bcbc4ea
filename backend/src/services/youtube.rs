use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

// Documentation: https://developers.google.com/youtube/v3/docs
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request rejected ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("comments are disabled for this video")]
    CommentsDisabled,

    #[error("platform returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

const AUTH_REASONS: &[&str] = &[
    "API_KEY_INVALID",
    "API_KEY_EXPIRED",
    "keyInvalid",
    "keyExpired",
    "forbidden",
    "authError",
];

const QUOTA_REASONS: &[&str] = &["quotaExceeded", "dailyLimitExceeded", "rateLimitExceeded"];

impl ApiError {
    /// Classifies a non-success response using the Google error envelope
    /// `{"error": {"code", "message", "errors": [{"reason"}], "details": [{"reason"}]}}`.
    ///
    /// A rejected key arrives as a 400 carrying `API_KEY_INVALID`, so the
    /// reasons decide before the status does.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        let message = parsed["error"]["message"]
            .as_str()
            .unwrap_or(body)
            .to_string();

        let reasons: Vec<&str> = ["errors", "details"]
            .iter()
            .filter_map(|field| parsed["error"][*field].as_array())
            .flatten()
            .filter_map(|entry| entry["reason"].as_str())
            .collect();
        let has_reason = |wanted: &[&str]| reasons.iter().any(|r| wanted.contains(r));

        if has_reason(&["commentsDisabled"]) {
            ApiError::CommentsDisabled
        } else if has_reason(AUTH_REASONS) {
            ApiError::Unauthorized { status, message }
        } else if has_reason(QUOTA_REASONS) {
            ApiError::Status { status, message }
        } else if status == 401 || status == 403 {
            ApiError::Unauthorized { status, message }
        } else {
            ApiError::Status { status, message }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChannelQuery {
    Id(String),
    Handle(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelItem {
    pub id: String,
    pub snippet: Option<Snippet>,
    pub statistics: Option<ChannelStatistics>,
    pub content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    pub title: String,
}

// The API sends counts as decimal strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    pub subscriber_count: Option<String>,
    pub view_count: Option<String>,
    pub video_count: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub snippet: Option<Snippet>,
    pub statistics: Option<VideoStatistics>,
    pub content_details: Option<VideoContentDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoContentDetails {
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub text_display: String,
}

/// The four request shapes the dashboard sends to the platform.
///
/// Collectors take this as `&dyn YouTubeApi` so tests can swap in an
/// in-memory fake.
#[rocket::async_trait]
pub trait YouTubeApi: Send + Sync {
    async fn list_channels(&self, query: &ChannelQuery)
        -> Result<ListResponse<ChannelItem>, ApiError>;

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<ListResponse<PlaylistItem>, ApiError>;

    async fn list_videos(&self, video_ids: &[String]) -> Result<ListResponse<VideoItem>, ApiError>;

    async fn list_comment_threads(
        &self,
        video_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<ListResponse<CommentThread>, ApiError>;
}

pub struct HttpYouTubeApi {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HttpYouTubeApi {
    pub fn new(client: Client, api_key: String, base_url: &str) -> Self {
        HttpYouTubeApi {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{resource}", self.base_url);
        debug!("GET {url} {params:?}");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_error_body(status.as_u16(), &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn page_params(max_results: u32, page_token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = vec![("maxResults", max_results.to_string())];
    if let Some(token) = page_token {
        params.push(("pageToken", token.to_string()));
    }
    params
}

#[rocket::async_trait]
impl YouTubeApi for HttpYouTubeApi {
    async fn list_channels(
        &self,
        query: &ChannelQuery,
    ) -> Result<ListResponse<ChannelItem>, ApiError> {
        let filter = match query {
            ChannelQuery::Id(id) => ("id", id.clone()),
            ChannelQuery::Handle(handle) => ("forHandle", handle.clone()),
        };
        let params = [
            ("part", "snippet,contentDetails,statistics".to_string()),
            filter,
        ];
        self.get("channels", &params).await
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<ListResponse<PlaylistItem>, ApiError> {
        let mut params = vec![
            ("part", "contentDetails".to_string()),
            ("playlistId", playlist_id.to_string()),
        ];
        params.extend(page_params(max_results, page_token));
        self.get("playlistItems", &params).await
    }

    async fn list_videos(&self, video_ids: &[String]) -> Result<ListResponse<VideoItem>, ApiError> {
        let params = [
            ("part", "snippet,statistics,contentDetails".to_string()),
            ("id", video_ids.join(",")),
        ];
        self.get("videos", &params).await
    }

    async fn list_comment_threads(
        &self,
        video_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<ListResponse<CommentThread>, ApiError> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("videoId", video_id.to_string()),
            ("textFormat", "plainText".to_string()),
        ];
        params.extend(page_params(max_results, page_token));
        self.get("commentThreads", &params).await
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use serde_json::json;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    /// In-memory platform. Pages are served with the offset as page token.
    #[derive(Default)]
    pub struct FakeYouTube {
        pub channels: Vec<Value>,
        pub handles: HashMap<String, String>,
        pub playlists: HashMap<String, Vec<String>>,
        pub videos: HashMap<String, Value>,
        pub comments: HashMap<String, Vec<String>>,
        pub comments_disabled: HashSet<String>,
        pub reverse_batches: bool,
        pub failure: Option<ApiError>,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeYouTube {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_channel(mut self, id: &str, title: &str, uploads: &str) -> Self {
            self.channels.push(json!({
                "id": id,
                "snippet": { "title": title },
                "statistics": {
                    "subscriberCount": "1200",
                    "viewCount": "45000",
                    "videoCount": "3"
                },
                "contentDetails": { "relatedPlaylists": { "uploads": uploads } }
            }));
            self
        }

        pub fn with_handle(mut self, handle: &str, channel_id: &str) -> Self {
            self.handles
                .insert(handle.to_string(), channel_id.to_string());
            self
        }

        pub fn with_playlist(mut self, playlist_id: &str, video_ids: &[&str]) -> Self {
            self.playlists.insert(
                playlist_id.to_string(),
                video_ids.iter().map(|id| id.to_string()).collect(),
            );
            self
        }

        pub fn with_video(mut self, id: &str, title: &str, duration: &str, stats: Value) -> Self {
            self.videos.insert(
                id.to_string(),
                json!({
                    "id": id,
                    "snippet": { "title": title },
                    "statistics": stats,
                    "contentDetails": { "duration": duration }
                }),
            );
            self
        }

        pub fn with_comments(mut self, video_id: &str, comments: &[&str]) -> Self {
            self.comments.insert(
                video_id.to_string(),
                comments.iter().map(|c| c.to_string()).collect(),
            );
            self
        }

        pub fn with_comments_disabled(mut self, video_id: &str) -> Self {
            self.comments_disabled.insert(video_id.to_string());
            self
        }

        pub fn failing_with(mut self, error: ApiError) -> Self {
            self.failure = Some(error);
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(call);
            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }

        fn page<T: Clone>(all: &[T], max_results: u32, page_token: Option<&str>) -> ListResponse<T> {
            let start: usize = page_token.map(|t| t.parse().unwrap()).unwrap_or(0);
            let end = (start + max_results as usize).min(all.len());
            ListResponse {
                items: all[start.min(end)..end].to_vec(),
                next_page_token: (end < all.len()).then(|| end.to_string()),
            }
        }
    }

    #[rocket::async_trait]
    impl YouTubeApi for FakeYouTube {
        async fn list_channels(
            &self,
            query: &ChannelQuery,
        ) -> Result<ListResponse<ChannelItem>, ApiError> {
            self.record(format!("channels {query:?}"))?;
            let id = match query {
                ChannelQuery::Id(id) => Some(id.clone()),
                ChannelQuery::Handle(handle) => self.handles.get(handle).cloned(),
            };
            let items = self
                .channels
                .iter()
                .filter(|c| Some(c["id"].as_str().unwrap_or_default().to_string()) == id)
                .map(|c| serde_json::from_value(c.clone()).unwrap())
                .collect();
            Ok(ListResponse {
                items,
                next_page_token: None,
            })
        }

        async fn list_playlist_items(
            &self,
            playlist_id: &str,
            max_results: u32,
            page_token: Option<&str>,
        ) -> Result<ListResponse<PlaylistItem>, ApiError> {
            self.record(format!("playlistItems {playlist_id} {max_results}"))?;
            let entries: Vec<PlaylistItem> = self
                .playlists
                .get(playlist_id)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .map(|id| {
                    serde_json::from_value(json!({ "contentDetails": { "videoId": id } }))
                        .unwrap()
                })
                .collect();
            Ok(Self::page(&entries, max_results, page_token))
        }

        async fn list_videos(
            &self,
            video_ids: &[String],
        ) -> Result<ListResponse<VideoItem>, ApiError> {
            self.record(format!("videos {}", video_ids.join(",")))?;
            let mut items: Vec<VideoItem> = video_ids
                .iter()
                .filter_map(|id| self.videos.get(id))
                .map(|v| serde_json::from_value(v.clone()).unwrap())
                .collect();
            if self.reverse_batches {
                items.reverse();
            }
            Ok(ListResponse {
                items,
                next_page_token: None,
            })
        }

        async fn list_comment_threads(
            &self,
            video_id: &str,
            max_results: u32,
            page_token: Option<&str>,
        ) -> Result<ListResponse<CommentThread>, ApiError> {
            self.record(format!("commentThreads {video_id} {max_results}"))?;
            if self.comments_disabled.contains(video_id) {
                return Err(ApiError::CommentsDisabled);
            }
            let threads: Vec<CommentThread> = self
                .comments
                .get(video_id)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .map(|text| {
                    serde_json::from_value(json!({
                        "snippet": {
                            "topLevelComment": { "snippet": { "textDisplay": text } }
                        }
                    }))
                    .unwrap()
                })
                .collect();
            Ok(Self::page(&threads, max_results, page_token))
        }
    }
}
