use crate::error::PipelineError;
use crate::services::youtube::{ApiError, YouTubeApi};
use log::info;

pub const DEFAULT_MAX_COMMENTS: u32 = 50;

// commentThreads serves at most 100 threads per page.
const COMMENT_PAGE_LIMIT: u32 = 100;

/// Fetches up to `max_comments` top-level comments as plain text, in the
/// order the platform returns them. Replies are never included.
pub async fn collect_comments(
    api: &dyn YouTubeApi,
    video_id: &str,
    max_comments: u32,
) -> Result<Vec<String>, PipelineError> {
    if video_id.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "video id must not be empty".to_string(),
        ));
    }

    let wanted = max_comments as usize;
    let mut comments = Vec::new();
    let mut next_page_token: Option<String> = None;

    while comments.len() < wanted {
        let page_size = (wanted - comments.len()).min(COMMENT_PAGE_LIMIT as usize) as u32;
        let response = match api
            .list_comment_threads(video_id, page_size, next_page_token.as_deref())
            .await
        {
            Ok(response) => response,
            Err(ApiError::CommentsDisabled) => {
                info!("Comments are disabled for video {video_id}");
                return Ok(comments);
            }
            Err(e) => return Err(e.into()),
        };

        if response.items.is_empty() {
            break;
        }

        comments.extend(
            response
                .items
                .into_iter()
                .take(wanted - comments.len())
                .map(|thread| thread.snippet.top_level_comment.snippet.text_display),
        );

        match response.next_page_token {
            Some(token) => next_page_token = Some(token),
            None => break,
        }
    }

    info!("Fetched {} comments for video {video_id}", comments.len());
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::youtube::fake::FakeYouTube;

    #[rocket::async_test]
    async fn returns_comment_text_in_platform_order() {
        let api = FakeYouTube::new().with_comments("v1", &["first!", "great video", "meh"]);

        let comments = collect_comments(&api, "v1", DEFAULT_MAX_COMMENTS).await.unwrap();

        assert_eq!(comments, vec!["first!", "great video", "meh"]);
        assert_eq!(api.calls(), vec!["commentThreads v1 50".to_string()]);
    }

    #[rocket::async_test]
    async fn disabled_comments_yield_an_empty_sequence() {
        let api = FakeYouTube::new().with_comments_disabled("v1");

        let comments = collect_comments(&api, "v1", DEFAULT_MAX_COMMENTS).await.unwrap();

        assert!(comments.is_empty());
    }

    #[rocket::async_test]
    async fn no_comments_is_not_an_error() {
        let api = FakeYouTube::new();

        let comments = collect_comments(&api, "v1", DEFAULT_MAX_COMMENTS).await.unwrap();

        assert!(comments.is_empty());
    }

    #[rocket::async_test]
    async fn follows_pages_up_to_the_limit() {
        let texts: Vec<String> = (0..250).map(|i| format!("comment {i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let api = FakeYouTube::new().with_comments("v1", &refs);

        let comments = collect_comments(&api, "v1", 150).await.unwrap();

        assert_eq!(comments.len(), 150);
        assert_eq!(comments[149], "comment 149");
        assert_eq!(
            api.calls(),
            vec![
                "commentThreads v1 100".to_string(),
                "commentThreads v1 50".to_string()
            ]
        );
    }

    #[rocket::async_test]
    async fn other_platform_errors_propagate() {
        let api = FakeYouTube::new().failing_with(ApiError::Status {
            status: 404,
            message: "videoNotFound".to_string(),
        });

        let result = collect_comments(&api, "gone", DEFAULT_MAX_COMMENTS).await;

        assert_eq!(
            result,
            Err(PipelineError::Platform {
                status: 404,
                message: "videoNotFound".to_string()
            })
        );
    }
}
