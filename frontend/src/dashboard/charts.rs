use crate::models::{SentimentCount, VideoRecord, WordWeight};
use crate::utils::{bar_percent, format_number, word_font_size};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum VideoMetric {
    Views,
    Likes,
}

impl VideoMetric {
    fn value(&self, video: &VideoRecord) -> u64 {
        match self {
            VideoMetric::Views => video.views,
            VideoMetric::Likes => video.likes,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            VideoMetric::Views => "Views per Video",
            VideoMetric::Likes => "Likes per Video",
        }
    }

    fn bar_class(&self) -> &'static str {
        match self {
            VideoMetric::Views => "bg-blue-500",
            VideoMetric::Likes => "bg-purple-500",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub videos: Vec<VideoRecord>,
    pub metric: VideoMetric,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let metric = props.metric;
    let max = props
        .videos
        .iter()
        .map(|v| metric.value(v))
        .max()
        .unwrap_or(0);

    html! {
        <div class="mb-6">
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{ metric.title() }</h3>
            {
                if props.videos.is_empty() {
                    html! { <p class="text-gray-500 text-sm">{"No videos to chart."}</p> }
                } else {
                    html! {
                        <div class="space-y-1">
                            { for props.videos.iter().map(|video| {
                                let value = metric.value(video);
                                html! {
                                    <div key={video.video_id.clone()} class="flex items-center text-sm">
                                        <span class="w-48 truncate text-gray-700 mr-2" title={video.title.clone()}>
                                            { video.title.clone() }
                                        </span>
                                        <div class="flex-grow bg-gray-100 rounded h-4 mr-2">
                                            <div
                                                class={classes!("h-4", "rounded", metric.bar_class())}
                                                style={format!("width: {:.1}%", bar_percent(value, max))}
                                            />
                                        </div>
                                        <span class="w-24 text-right text-gray-600">{ format_number(value) }</span>
                                    </div>
                                }
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SentimentHistogramProps {
    pub counts: Vec<SentimentCount>,
}

#[function_component(SentimentHistogram)]
pub fn sentiment_histogram(props: &SentimentHistogramProps) -> Html {
    let max = props.counts.iter().map(|c| c.count).max().unwrap_or(0) as u64;

    html! {
        <div class="mb-6">
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{"Sentiment Distribution"}</h3>
            <div class="flex items-end h-40 space-x-4">
                { for props.counts.iter().map(|entry| html! {
                    <div key={entry.sentiment.label()} class="flex flex-col items-center justify-end h-full w-20">
                        <span class="text-sm text-gray-700 mb-1">{ entry.count }</span>
                        <div
                            class={classes!("w-full", "rounded-t", entry.sentiment.color_class())}
                            style={format!("height: {:.1}%", bar_percent(entry.count as u64, max))}
                        />
                        <span class="text-xs text-gray-600 mt-1">{ entry.sentiment.label() }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WordCloudProps {
    pub words: Vec<WordWeight>,
}

#[function_component(WordCloud)]
pub fn word_cloud(props: &WordCloudProps) -> Html {
    // Nothing to render for videos without comments.
    if props.words.is_empty() {
        return html! {};
    }

    let min = props.words.iter().map(|w| w.count).min().unwrap_or(0);
    let max = props.words.iter().map(|w| w.count).max().unwrap_or(0);

    html! {
        <div class="mb-6">
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{"Comment Word Cloud"}</h3>
            <div class="flex flex-wrap items-center justify-center gap-2 p-4 bg-gray-50 rounded-lg">
                { for props.words.iter().map(|w| html! {
                    <span
                        key={w.word.clone()}
                        class="text-blue-700"
                        style={format!("font-size: {:.2}rem", word_font_size(w.count, min, max))}
                        title={format!("{} mentions", w.count)}
                    >
                        { w.word.clone() }
                    </span>
                }) }
            </div>
        </div>
    }
}
