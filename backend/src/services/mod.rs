pub mod channel_service;
pub mod comment_service;
pub mod export_service;
pub mod sentiment_service;
pub mod video_service;
pub mod wordcloud_service;
pub mod youtube;
