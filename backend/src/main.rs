#[macro_use]
extern crate rocket;

mod api;
mod config;
mod error;
mod models;
mod services;
mod utils;

use crate::config::Limits;
use crate::services::youtube::YouTubeApi;
use rocket::{Build, Rocket};
use std::sync::Arc;

pub struct AppState {
    pub youtube: Arc<dyn YouTubeApi>,
    pub limits: Limits,
}

#[get("/")]
fn index() -> &'static str {
    "Channel insights backend is running"
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![index])
        .mount("/channel", routes![api::get_channel])
        .mount("/playlist", routes![api::list_playlist_videos])
        .mount("/video", routes![api::analyze_video_comments])
        .mount("/export", routes![api::export_videos, api::export_sentiments])
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    config::load_environment();
    config::init_logger();

    let state = config::create_app_state()?;
    let cors = config::create_cors()?;

    build_rocket(state)
        .attach(cors)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed: {e}"))?;

    Ok(())
}
