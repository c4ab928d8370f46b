use dioxus::prelude::*;

const WELCOME_IMAGE: &str =
    "https://juowzxgwkyjhsywosjdq.supabase.co/storage/v1/object/public/assignments/b23b2j3430871.jpg";

/// Two counters handed down from the shell. No fetching of its own.
#[component]
pub fn DashboardView(uploaded_assignments: u32, uploaded_answers: u32) -> Element {
    rsx! {
        div {
            class: "space-y-6",
            h2 {
                class: "text-3xl font-semibold text-gray-900 dark:text-white",
                "Dashboard"
            }
            img {
                src: "{WELCOME_IMAGE}",
                alt: "Welcome",
                class: "w-full h-64 object-contain rounded-lg mb-6",
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                div {
                    class: "p-6 bg-white dark:bg-gray-800 rounded-lg shadow-sm",
                    h3 {
                        class: "text-lg font-medium text-gray-600 dark:text-gray-300 mb-2",
                        "Uploaded Assignments"
                    }
                    p {
                        class: "text-4xl font-semibold text-gray-900 dark:text-white",
                        "{uploaded_assignments}"
                    }
                }
                div {
                    class: "p-6 bg-white dark:bg-gray-800 rounded-lg shadow-sm",
                    h3 {
                        class: "text-lg font-medium text-gray-600 dark:text-gray-300 mb-2",
                        "Uploaded Answers"
                    }
                    p {
                        class: "text-4xl font-semibold text-gray-900 dark:text-white",
                        "{uploaded_answers}"
                    }
                }
            }
        }
    }
}
