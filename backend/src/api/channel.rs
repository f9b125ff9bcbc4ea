use crate::models::{ChannelSummary, ErrorResponse};
use crate::services::channel_service;
use crate::AppState;
use log::{error, info};
use rocket::serde::json::Json;
use rocket::{get, State};

/// `GET /channel?id=<channel id, @handle or channel URL>`
#[get("/?<id>")]
pub async fn get_channel(
    state: &State<AppState>,
    id: &str,
) -> Result<Json<ChannelSummary>, ErrorResponse> {
    match channel_service::lookup_channel_input(state.youtube.as_ref(), id).await {
        Ok(summary) => {
            info!("Channel lookup succeeded: {} -> {}", id, summary.name);
            Ok(Json(summary))
        }
        Err(e) => {
            error!("Channel lookup failed for {id:?}: {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::youtube::fake::FakeYouTube;
    use crate::services::youtube::ApiError;
    use crate::test_support::client_for;
    use rocket::http::Status;
    use serde_json::Value;

    #[rocket::async_test]
    async fn returns_the_channel_summary() {
        let client = client_for(FakeYouTube::new().with_channel("UC1", "Rust Videos", "UU1")).await;

        let response = client.get("/channel?id=UC1").dispatch().await;

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["name"], "Rust Videos");
        assert_eq!(body["subscriberCount"], 1200);
        assert_eq!(body["uploadsPlaylistId"], "UU1");
    }

    #[rocket::async_test]
    async fn unknown_channel_is_a_404() {
        let client = client_for(FakeYouTube::new()).await;

        let response = client.get("/channel?id=UCnope").dispatch().await;

        assert_eq!(response.status(), Status::NotFound);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["error"], "not_found");
    }

    #[rocket::async_test]
    async fn accepts_url_encoded_channel_urls() {
        let client = client_for(FakeYouTube::new().with_channel("UC1", "Rust Videos", "UU1")).await;

        let response = client
            .get("/channel?id=https%3A%2F%2Fwww.youtube.com%2Fchannel%2FUC1")
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
    }

    #[rocket::async_test]
    async fn blank_input_is_a_400() {
        let client = client_for(FakeYouTube::new()).await;

        let response = client.get("/channel?id=%20").dispatch().await;

        assert_eq!(response.status(), Status::BadRequest);
    }

    #[rocket::async_test]
    async fn rejected_credentials_are_a_401() {
        let client = client_for(FakeYouTube::new().failing_with(ApiError::Unauthorized {
            status: 400,
            message: "API key not valid.".to_string(),
        }))
        .await;

        let response = client.get("/channel?id=UC1").dispatch().await;

        assert_eq!(response.status(), Status::Unauthorized);
    }

    #[rocket::async_test]
    async fn transport_failures_are_a_502() {
        let client =
            client_for(FakeYouTube::new().failing_with(ApiError::Transport("dns".to_string())))
                .await;

        let response = client.get("/channel?id=UC1").dispatch().await;

        assert_eq!(response.status(), Status::BadGateway);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["error"], "transport_failure");
    }
}
