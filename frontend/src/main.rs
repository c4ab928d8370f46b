use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod session;
mod types;
mod views;

use components::{apply_theme, use_toasts_provider, ToastHost};
use session::use_session_provider;
use types::AppState;
use views::{AuthView, Shell};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let app_state = use_context_provider(|| Signal::new(AppState::default()));
    use_toasts_provider();
    let session = use_session_provider();

    // Keep the document root's `dark` class in step with the theme flag.
    use_effect(move || apply_theme(app_state.read().theme));

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        if session.is_authenticated() {
            Shell {}
        } else {
            AuthView {}
        }

        ToastHost {}
    }
}
