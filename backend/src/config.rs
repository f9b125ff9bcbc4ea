use crate::services::comment_service::DEFAULT_MAX_COMMENTS;
use crate::services::video_service::DEFAULT_MAX_VIDEOS;
use crate::services::youtube::{HttpYouTubeApi, YouTubeApi, DEFAULT_BASE_URL};
use crate::AppState;
use anyhow::{Context, Result};
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::sync::Arc;

lazy_static! {
    pub static ref YOUTUBE_API_BASE_URL: String =
        env::var("YOUTUBE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
    pub static ref MAX_VIDEOS: u32 = env::var("DEFAULT_MAX_VIDEOS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_VIDEOS);
    pub static ref MAX_COMMENTS: u32 = env::var("DEFAULT_MAX_COMMENTS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_COMMENTS);
    pub static ref WORD_CLOUD_SIZE: usize = env::var("WORD_CLOUD_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60);
}

/// Per-request defaults used when the caller leaves a limit out.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_videos: u32,
    pub max_comments: u32,
    pub word_cloud_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_videos: DEFAULT_MAX_VIDEOS,
            max_comments: DEFAULT_MAX_COMMENTS,
            word_cloud_size: 60,
        }
    }
}

impl Limits {
    pub fn from_env() -> Self {
        Limits {
            max_videos: *MAX_VIDEOS,
            max_comments: *MAX_COMMENTS,
            word_cloud_size: *WORD_CLOUD_SIZE,
        }
    }
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("Starting channel insights backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn youtube_api_key() -> Result<String> {
    let key = env::var("YOUTUBE_API_KEY")
        .context("YOUTUBE_API_KEY environment variable must be set")?;
    if key.trim().is_empty() {
        anyhow::bail!("YOUTUBE_API_KEY environment variable is empty");
    }
    Ok(key)
}

pub fn create_youtube_client() -> Result<Arc<dyn YouTubeApi>> {
    let base_url = &*YOUTUBE_API_BASE_URL;
    info!("Using YouTube Data API at: {base_url}");

    let http = reqwest::Client::builder()
        .user_agent(concat!("channel-insights/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    Ok(Arc::new(HttpYouTubeApi::new(
        http,
        youtube_api_key()?,
        base_url,
    )))
}

pub fn create_app_state() -> Result<AppState> {
    Ok(AppState {
        youtube: create_youtube_client()?,
        limits: Limits::from_env(),
    })
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[FRONTEND_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
