use crate::dashboard::api::{fetch_comment_analysis, CsvExport};
use crate::dashboard::charts::{SentimentHistogram, WordCloud};
use crate::dashboard::components::{CsvDownloadButton, ErrorMessage};
use crate::models::{CommentAnalysis, CommentRecord, VideoRecord};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CommentPanelProps {
    pub videos: Vec<VideoRecord>,
}

/// Video picker plus the sentiment breakdown of the selected video's comments.
#[function_component(CommentPanel)]
pub fn comment_panel(props: &CommentPanelProps) -> Html {
    let selected = use_state(Option::<String>::default);
    let analysis = use_state(Option::<CommentAnalysis>::default);
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);

    let on_select = {
        let selected = selected.clone();
        let analysis = analysis.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: Event| {
            let video_id = e.target_unchecked_into::<HtmlSelectElement>().value();
            analysis.set(None);
            error_message.set(None);

            if video_id.is_empty() {
                selected.set(None);
                return;
            }
            selected.set(Some(video_id.clone()));
            loading.set(true);

            let analysis = analysis.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_comment_analysis(&video_id).await {
                    Ok(result) => analysis.set(Some(result)),
                    Err(e) => error_message.set(Some(e)),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-gray-800 mb-2">{"Comment Sentiment"}</h2>
            <select
                class="w-full p-2 border border-gray-300 rounded mb-4"
                onchange={on_select}
                disabled={*loading || props.videos.is_empty()}
            >
                <option value="" selected={selected.is_none()}>{"Select a video..."}</option>
                { for props.videos.iter().map(|video| html! {
                    <option
                        key={video.video_id.clone()}
                        value={video.video_id.clone()}
                        selected={selected.as_deref() == Some(video.video_id.as_str())}
                    >
                        { video.title.clone() }
                    </option>
                }) }
            </select>

            <ErrorMessage message={(*error_message).clone()} />

            {
                if *loading {
                    html! { <p class="text-gray-600 text-center">{"Analyzing comments..."}</p> }
                } else if let Some(result) = &*analysis {
                    html! {
                        <>
                            <CommentTable comments={result.comments.clone()} />
                            <SentimentHistogram counts={result.sentiment_counts.clone()} />
                            <WordCloud words={result.word_cloud.clone()} />
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CommentTableProps {
    pub comments: Vec<CommentRecord>,
}

#[function_component(CommentTable)]
pub fn comment_table(props: &CommentTableProps) -> Html {
    html! {
        <div class="mb-6">
            <div class="flex items-center justify-between mb-2">
                <h3 class="text-lg font-semibold text-gray-800">
                    { format!("Comments ({})", props.comments.len()) }
                </h3>
                <CsvDownloadButton export={CsvExport::Sentiments(props.comments.clone())} />
            </div>
            {
                if props.comments.is_empty() {
                    html! { <p class="text-gray-500">{"No comments available for this video."}</p> }
                } else {
                    html! {
                        <div class="max-h-96 overflow-y-auto">
                            <table class="w-full text-sm border border-gray-200">
                                <thead class="bg-gray-100 sticky top-0">
                                    <tr>
                                        <th class="text-left p-2">{"Comment"}</th>
                                        <th class="text-left p-2 w-28">{"Sentiment"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for props.comments.iter().map(|c| html! {
                                        <tr class="border-b border-gray-200">
                                            <td class="p-2 whitespace-pre-wrap">{ c.text.clone() }</td>
                                            <td class="p-2">
                                                <span class={classes!("text-white", "text-xs", "px-2", "py-1", "rounded", c.sentiment.color_class())}>
                                                    { c.sentiment.label() }
                                                </span>
                                            </td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    }
                }
            }
        </div>
    }
}
