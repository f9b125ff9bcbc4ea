mod dashboard;
mod env_variable_utils;
mod models;
mod router;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, BACKEND_URL};
use crate::router::{switch, Route};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let app_name = get_app_name();
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&app_name);
    }

    yew::Renderer::<App>::new().render();

    if is_debug_mode() {
        console::log_1(&format!("{app_name}: talking to backend at {}", &*BACKEND_URL).into());
    }
}
