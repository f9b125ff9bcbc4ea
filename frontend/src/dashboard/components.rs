use crate::dashboard::api::{download_csv, CsvExport};
use crate::models::{ChannelSummary, VideoRecord};
use crate::utils::{format_duration, format_number};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChannelFormProps {
    pub input: String,
    pub loading: bool,
    pub on_submit: Callback<String>,
}

#[function_component(ChannelForm)]
pub fn channel_form(props: &ChannelFormProps) -> Html {
    let current_input = use_state(|| props.input.clone());

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(value);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*current_input).trim().to_string());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex mb-4">
            <input
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Channel ID, @handle or channel URL..."
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button
                type="submit"
                class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                disabled={props.loading || current_input.trim().is_empty()}
            >
                { if props.loading { "Loading..." } else { "Analyze" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChannelInfoProps {
    pub channel: ChannelSummary,
}

#[function_component(ChannelInfo)]
pub fn channel_info(props: &ChannelInfoProps) -> Html {
    html! {
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-gray-800 mb-2">{"Channel Info"}</h2>
            <table class="w-full text-sm border border-gray-200">
                <tbody>
                    { for props.channel.labeled().into_iter().map(|(label, value)| html! {
                        <tr key={label} class="border-b border-gray-200">
                            <th class="text-left p-2 bg-gray-50 w-48 font-medium text-gray-700">{ label }</th>
                            <td class="p-2 text-gray-800">{ value }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoTableProps {
    pub videos: Vec<VideoRecord>,
}

#[function_component(VideoTable)]
pub fn video_table(props: &VideoTableProps) -> Html {
    html! {
        <div class="mb-6">
            <div class="flex items-center justify-between mb-2">
                <h2 class="text-2xl font-bold text-gray-800">{"Videos"}</h2>
                <CsvDownloadButton export={CsvExport::Videos(props.videos.clone())} />
            </div>
            {
                if props.videos.is_empty() {
                    html! { <p class="text-gray-500">{"This channel has no uploaded videos."}</p> }
                } else {
                    html! {
                        <div class="overflow-x-auto">
                            <table class="w-full text-sm border border-gray-200">
                                <thead class="bg-gray-100">
                                    <tr>
                                        <th class="text-left p-2">{"Title"}</th>
                                        <th class="text-right p-2">{"Views"}</th>
                                        <th class="text-right p-2">{"Likes"}</th>
                                        <th class="text-right p-2">{"Comments"}</th>
                                        <th class="text-right p-2">{"Duration"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for props.videos.iter().map(|video| html! {
                                        <tr key={video.video_id.clone()} class="border-b border-gray-200">
                                            <td class="p-2">
                                                <a
                                                    href={format!("https://www.youtube.com/watch?v={}", video.video_id)}
                                                    target="_blank"
                                                    class="text-blue-600 hover:underline"
                                                >
                                                    { video.title.clone() }
                                                </a>
                                            </td>
                                            <td class="p-2 text-right">{ format_number(video.views) }</td>
                                            <td class="p-2 text-right">{ format_number(video.likes) }</td>
                                            <td class="p-2 text-right">{ format_number(video.comments) }</td>
                                            <td class="p-2 text-right">{ format_duration(video.duration_seconds) }</td>
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

#[derive(Properties, PartialEq)]
pub struct CsvDownloadButtonProps {
    pub export: CsvExport,
}

#[function_component(CsvDownloadButton)]
pub fn csv_download_button(props: &CsvDownloadButtonProps) -> Html {
    let busy = use_state(|| false);
    let error_message = use_state(Option::<String>::default);

    let on_click = {
        let export = props.export.clone();
        let busy = busy.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: MouseEvent| {
            let export = export.clone();
            let busy = busy.clone();
            let error_message = error_message.clone();
            busy.set(true);
            error_message.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = download_csv(&export).await {
                    log::error!("{} export failed: {e}", export.filename());
                    error_message.set(Some(e));
                }
                busy.set(false);
            });
        })
    };

    html! {
        <span class="flex items-center">
            {
                if let Some(msg) = &*error_message {
                    html! { <span class="text-red-600 text-xs mr-2">{ msg.clone() }</span> }
                } else {
                    html! {}
                }
            }
            <button
                type="button"
                onclick={on_click}
                disabled={*busy}
                class="bg-green-600 text-white text-sm px-3 py-1 rounded hover:bg-green-700 disabled:opacity-50"
            >
                { if *busy { "Preparing..." } else { "Download CSV" } }
            </button>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    match &props.message {
        Some(msg) => html! {
            <p class="text-red-600 text-center mb-4">{ format!("Error: {msg}") }</p>
        },
        None => html! {},
    }
}
