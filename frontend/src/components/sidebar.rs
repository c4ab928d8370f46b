use dioxus::prelude::*;

use crate::types::{AppState, Destination};

#[component]
pub fn Sidebar(current: Signal<Destination>, on_logout: EventHandler<()>) -> Element {
    let mut app_state = use_context::<Signal<AppState>>();
    let theme = app_state.read().theme;

    rsx! {
        nav {
            class: "w-64 bg-gray-100 dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700",
            div {
                class: "flex flex-col h-full px-4 py-6",
                div {
                    class: "mb-8",
                    h1 {
                        class: "text-xl font-semibold text-gray-800 dark:text-white",
                        "Courseshare"
                    }
                    p {
                        class: "text-sm text-gray-600 dark:text-gray-400",
                        "Assignment Share"
                    }
                }
                ul {
                    class: "space-y-2",
                    for destination in Destination::ALL {
                        li {
                            button {
                                onclick: move |_| current.set(destination),
                                class: if current() == destination {
                                    "w-full px-4 py-2 rounded-lg text-left transition-colors bg-gray-900 dark:bg-white text-white dark:text-gray-900"
                                } else {
                                    "w-full px-4 py-2 rounded-lg text-left transition-colors text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700"
                                },
                                "{destination.label()}"
                            }
                        }
                    }
                }
                div {
                    class: "mt-auto space-y-2",
                    button {
                        onclick: move |_| {
                            let next = app_state.read().theme.toggled();
                            app_state.write().theme = next;
                        },
                        class: "w-full px-4 py-2 rounded-lg bg-gray-200 dark:bg-gray-700 text-gray-900 dark:text-white hover:bg-gray-300 dark:hover:bg-gray-600",
                        if theme.is_dark() { "Light Mode" } else { "Dark Mode" }
                    }
                    button {
                        onclick: move |_| on_logout.call(()),
                        class: "w-full px-4 py-2 rounded-lg bg-red-100 dark:bg-red-900 text-red-600 dark:text-red-400 hover:bg-red-200",
                        "Logout"
                    }
                }
            }
        }
    }
}
