use crate::dashboard::api::{fetch_channel, fetch_videos};
use crate::dashboard::charts::{BarChart, VideoMetric};
use crate::dashboard::comments::CommentPanel;
use crate::dashboard::components::{ChannelForm, ChannelInfo, ErrorMessage, VideoTable};
use crate::env_variable_utils::get_app_name;
use crate::models::{ChannelSummary, VideoRecord};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Dashboard /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to the dashboard"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

fn get_channel_param() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params()
        .get("channel")
        .filter(|value| !value.trim().is_empty())
}

fn update_channel_param(input: &str) {
    if let Some(window) = web_sys::window() {
        let Ok(href) = window.location().href() else {
            return;
        };
        let Ok(url) = web_sys::Url::new(&href) else {
            return;
        };
        url.search_params().set("channel", input);

        // Update the URL without reloading the page
        if let Ok(history) = window.history() {
            let _ =
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url.href()));
        }
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let channel_input = use_state(|| get_channel_param().unwrap_or_default());
    let channel = use_state(Option::<ChannelSummary>::default);
    let videos = use_state(Vec::<VideoRecord>::default);
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);

    // Channel lookup, then video collection for its uploads playlist.
    let load_channel = {
        let channel = channel.clone();
        let videos = videos.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        move |input: String| {
            channel.set(None);
            videos.set(Vec::new());
            error_message.set(None);
            loading.set(true);

            let channel = channel.clone();
            let videos = videos.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_channel(&input).await {
                    Ok(summary) => {
                        let playlist = summary.uploads_playlist_id.clone();
                        channel.set(Some(summary));
                        match fetch_videos(&playlist).await {
                            Ok(list) => videos.set(list),
                            Err(e) => error_message.set(Some(e)),
                        }
                    }
                    Err(e) => error_message.set(Some(e)),
                }
                loading.set(false);
            });
        }
    };

    // Restore a channel shared via `?channel=`
    {
        let load_channel = load_channel.clone();
        let initial = (*channel_input).clone();
        use_effect_with((), move |_| {
            if !initial.is_empty() {
                load_channel(initial);
            }
            || ()
        });
    }

    let on_submit = {
        let channel_input = channel_input.clone();
        Callback::from(move |input: String| {
            if input.is_empty() {
                return;
            }
            channel_input.set(input.clone());
            update_channel_param(&input);
            load_channel(input);
        })
    };

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-5xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    { get_app_name() }
                </h1>

                <ChannelForm
                    input={(*channel_input).clone()}
                    loading={*loading}
                    on_submit={on_submit}
                />

                <ErrorMessage message={(*error_message).clone()} />

                {
                    if *loading {
                        html! { <p class="text-gray-600 text-center">{"Loading channel data..."}</p> }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(summary) = &*channel {
                        html! {
                            <>
                                <ChannelInfo channel={summary.clone()} />
                                if !*loading {
                                    <VideoTable videos={(*videos).clone()} />
                                    <BarChart videos={(*videos).clone()} metric={VideoMetric::Views} />
                                    <BarChart videos={(*videos).clone()} metric={VideoMetric::Likes} />
                                    <CommentPanel
                                        key={summary.uploads_playlist_id.clone()}
                                        videos={(*videos).clone()}
                                    />
                                }
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
