use crate::error::PipelineError;
use crate::models::ChannelSummary;
use crate::services::youtube::{ChannelItem, ChannelQuery, YouTubeApi};
use crate::utils::parse_count;
use log::info;
use url::Url;

/// Looks up one channel by its platform id.
pub async fn lookup_channel(
    api: &dyn YouTubeApi,
    channel_id: &str,
) -> Result<ChannelSummary, PipelineError> {
    let channel_id = channel_id.trim();
    if channel_id.is_empty() {
        return Err(PipelineError::InvalidInput(
            "channel id must not be empty".to_string(),
        ));
    }
    lookup(api, &ChannelQuery::Id(channel_id.to_string())).await
}

/// Looks up a channel from free-text input: a raw id, an `@handle`, or a
/// `youtube.com/channel/<id>` / `youtube.com/@handle` URL.
pub async fn lookup_channel_input(
    api: &dyn YouTubeApi,
    input: &str,
) -> Result<ChannelSummary, PipelineError> {
    match parse_channel_input(input)? {
        ChannelQuery::Id(id) => lookup_channel(api, &id).await,
        handle => lookup(api, &handle).await,
    }
}

async fn lookup(api: &dyn YouTubeApi, query: &ChannelQuery) -> Result<ChannelSummary, PipelineError> {
    let response = api.list_channels(query).await?;

    // Only the first item is meaningful for an id or handle query.
    let item = response.items.into_iter().next().ok_or_else(|| {
        PipelineError::ChannelNotFound(match query {
            ChannelQuery::Id(id) => id.clone(),
            ChannelQuery::Handle(handle) => format!("@{handle}"),
        })
    })?;

    let summary = channel_summary(item)?;
    info!(
        "Loaded channel {} ({} videos, uploads playlist {})",
        summary.name, summary.video_count, summary.uploads_playlist_id
    );
    Ok(summary)
}

fn channel_summary(item: ChannelItem) -> Result<ChannelSummary, PipelineError> {
    let name = item
        .snippet
        .map(|s| s.title)
        .ok_or_else(|| PipelineError::MalformedData(format!("channel {} has no snippet", item.id)))?;
    let uploads_playlist_id = item
        .content_details
        .and_then(|d| d.related_playlists.uploads)
        .ok_or_else(|| {
            PipelineError::MalformedData(format!("channel {} has no uploads playlist", item.id))
        })?;
    let statistics = item.statistics.unwrap_or_default();

    Ok(ChannelSummary {
        name,
        subscriber_count: parse_count(statistics.subscriber_count.as_deref(), "subscriberCount")?,
        view_count: parse_count(statistics.view_count.as_deref(), "viewCount")?,
        video_count: parse_count(statistics.video_count.as_deref(), "videoCount")?,
        uploads_playlist_id,
    })
}

pub fn parse_channel_input(input: &str) -> Result<ChannelQuery, PipelineError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PipelineError::InvalidInput(
            "channel id must not be empty".to_string(),
        ));
    }

    if let Some(handle) = input.strip_prefix('@') {
        return handle_query(handle, input);
    }

    let looks_like_url = input.contains("://")
        || input.starts_with("www.")
        || input.starts_with("youtube.com")
        || input.starts_with("m.youtube.com");
    if !looks_like_url {
        return Ok(ChannelQuery::Id(input.to_string()));
    }

    let with_scheme = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{input}")
    };
    let url = Url::parse(&with_scheme)
        .map_err(|e| PipelineError::InvalidInput(format!("invalid channel URL {input:?}: {e}")))?;

    let is_youtube = url
        .host_str()
        .map(|host| host == "youtube.com" || host.ends_with(".youtube.com"))
        .unwrap_or(false);
    if !is_youtube {
        return Err(PipelineError::InvalidInput(format!(
            "not a YouTube channel URL: {input}"
        )));
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    match segments.as_slice() {
        ["channel", id, ..] => Ok(ChannelQuery::Id(id.to_string())),
        [first, ..] if first.starts_with('@') => handle_query(&first[1..], input),
        _ => Err(PipelineError::InvalidInput(format!(
            "unsupported channel URL format: {input}"
        ))),
    }
}

fn handle_query(handle: &str, input: &str) -> Result<ChannelQuery, PipelineError> {
    if handle.is_empty() {
        return Err(PipelineError::InvalidInput(format!("empty handle in {input:?}")));
    }
    Ok(ChannelQuery::Handle(handle.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::youtube::fake::FakeYouTube;
    use crate::services::youtube::ApiError;
    use serde_json::json;

    #[rocket::async_test]
    async fn returns_summary_for_known_channel() {
        let api = FakeYouTube::new().with_channel("UC123", "Rust Videos", "UU123");

        let summary = lookup_channel(&api, "UC123").await.unwrap();

        assert_eq!(
            summary,
            ChannelSummary {
                name: "Rust Videos".to_string(),
                subscriber_count: 1200,
                view_count: 45000,
                video_count: 3,
                uploads_playlist_id: "UU123".to_string(),
            }
        );
    }

    #[rocket::async_test]
    async fn zero_items_is_not_found() {
        let api = FakeYouTube::new().with_channel("UC123", "Rust Videos", "UU123");

        let result = lookup_channel(&api, "UCmissing").await;

        assert_eq!(
            result,
            Err(PipelineError::ChannelNotFound("UCmissing".to_string()))
        );
    }

    #[rocket::async_test]
    async fn transport_failure_is_not_reported_as_not_found() {
        let api = FakeYouTube::new()
            .failing_with(ApiError::Transport("connection reset".to_string()));

        let result = lookup_channel(&api, "UC123").await;

        assert_eq!(
            result,
            Err(PipelineError::Transport("connection reset".to_string()))
        );
    }

    #[rocket::async_test]
    async fn rejected_key_is_an_auth_failure() {
        let api = FakeYouTube::new().failing_with(ApiError::Unauthorized {
            status: 403,
            message: "API key not valid.".to_string(),
        });

        let result = lookup_channel(&api, "UC123").await;

        assert!(matches!(result, Err(PipelineError::Auth(_))));
    }

    #[rocket::async_test]
    async fn empty_id_makes_no_request() {
        let api = FakeYouTube::new();

        let result = lookup_channel(&api, "   ").await;

        assert!(matches!(result, Err(PipelineError::InvalidInput(_))));
        assert!(api.calls().is_empty());
    }

    #[rocket::async_test]
    async fn hidden_subscriber_count_defaults_to_zero() {
        let mut api = FakeYouTube::new();
        api.channels.push(json!({
            "id": "UChidden",
            "snippet": { "title": "Quiet" },
            "statistics": { "viewCount": "10", "videoCount": "1", "hiddenSubscriberCount": true },
            "contentDetails": { "relatedPlaylists": { "uploads": "UUhidden" } }
        }));

        let summary = lookup_channel(&api, "UChidden").await.unwrap();

        assert_eq!(summary.subscriber_count, 0);
        assert_eq!(summary.view_count, 10);
    }

    #[rocket::async_test]
    async fn resolves_handles() {
        let api = FakeYouTube::new()
            .with_channel("UC123", "Rust Videos", "UU123")
            .with_handle("rustvideos", "UC123");

        let summary = lookup_channel_input(&api, "https://www.youtube.com/@rustvideos")
            .await
            .unwrap();
        assert_eq!(summary.uploads_playlist_id, "UU123");

        let missing = lookup_channel_input(&api, "@nobody").await;
        assert_eq!(
            missing,
            Err(PipelineError::ChannelNotFound("@nobody".to_string()))
        );
    }

    #[test]
    fn parses_channel_inputs() {
        assert_eq!(
            parse_channel_input(" UC123 "),
            Ok(ChannelQuery::Id("UC123".to_string()))
        );
        assert_eq!(
            parse_channel_input("https://www.youtube.com/channel/UCTeLqJq1mXUX5WWoNXLmOIA"),
            Ok(ChannelQuery::Id("UCTeLqJq1mXUX5WWoNXLmOIA".to_string()))
        );
        assert_eq!(
            parse_channel_input("youtube.com/channel/UC123/videos"),
            Ok(ChannelQuery::Id("UC123".to_string()))
        );
        assert_eq!(
            parse_channel_input("@RobertsSpaceInd"),
            Ok(ChannelQuery::Handle("RobertsSpaceInd".to_string()))
        );
        assert!(parse_channel_input("https://example.com/channel/UC1").is_err());
        assert!(parse_channel_input("https://www.youtube.com/watch?v=abc").is_err());
        assert!(parse_channel_input("@").is_err());
    }
}
