use dioxus::prelude::*;
use tracing::error;
use uuid::Uuid;

use courseshare_core::filtering::filter_assignments;
use courseshare_core::models::Assignment;

use crate::api::db::ASSIGNMENTS_TABLE;
use crate::components::use_toasts;
use crate::session::use_session;

const WELCOME_IMAGE: &str =
    "https://juowzxgwkyjhsywosjdq.supabase.co/storage/v1/object/public/assignments/b23b2j3430871.jpg";

/// Everyone's uploads. The whole collection is fetched once per mount,
/// newest first; searching filters the in-memory list on every keystroke.
/// Selecting a card switches to a detail presentation of that one row.
#[component]
pub fn BrowseView() -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let mut search_query = use_signal(String::new);
    let mut selected = use_signal(|| None::<Uuid>);

    let assignments = use_resource(move || async move {
        match session
            .db()
            .from(ASSIGNMENTS_TABLE)
            .select("*")
            .order("created_at", true)
            .fetch::<Assignment>()
            .await
        {
            Ok(rows) => rows,
            Err(fetch_error) => {
                error!("Failed to fetch assignments: {fetch_error}");
                toasts.error("Error", "Failed to fetch assignments");
                Vec::new()
            }
        }
    });

    let rows: Vec<Assignment> = (*assignments.read()).clone().unwrap_or_default();

    if let Some(id) = selected() {
        if let Some(assignment) = rows.iter().find(|assignment| assignment.id == id) {
            return rsx! {
                AssignmentDetail {
                    assignment: assignment.clone(),
                    on_back: move |_| selected.set(None),
                }
            };
        }
    }

    let visible: Vec<Assignment> = filter_assignments(&rows, &search_query())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div {
            class: "space-y-6",
            h2 {
                class: "text-3xl font-semibold text-gray-900 dark:text-white",
                "Home Assignments"
            }
            img {
                src: "{WELCOME_IMAGE}",
                alt: "Welcome",
                class: "w-full h-64 object-contain rounded-lg mb-6",
            }
            div {
                input {
                    r#type: "text",
                    placeholder: "Search by course code or name...",
                    value: "{search_query}",
                    oninput: move |evt| search_query.set(evt.value()),
                    class: "w-full px-4 py-3 rounded-lg bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700",
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                if visible.is_empty() {
                    div {
                        class: "col-span-full text-center py-8 text-gray-500 dark:text-gray-400",
                        "No assignments found."
                    }
                } else {
                    for assignment in visible {
                        {
                            let id = assignment.id;
                            rsx! {
                                div {
                                    key: "{id}",
                                    onclick: move |_| selected.set(Some(id)),
                                    class: "cursor-pointer p-6 bg-white dark:bg-gray-800 rounded-lg shadow-sm hover:shadow-md",
                                    h3 {
                                        class: "text-lg font-semibold text-gray-900 dark:text-white mb-2",
                                        "{assignment.title}"
                                    }
                                    div {
                                        class: "space-y-2",
                                        p {
                                            class: "text-sm text-gray-600 dark:text-gray-300",
                                            "Course Code: {assignment.code}"
                                        }
                                        p {
                                            class: "text-sm text-gray-600 dark:text-gray-300",
                                            "Year: {assignment.year}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AssignmentDetail(assignment: Assignment, on_back: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "max-w-4xl mx-auto space-y-6",
            button {
                onclick: move |_| on_back.call(()),
                class: "mb-4 px-4 py-2 bg-gray-200 dark:bg-gray-700 text-gray-900 dark:text-white rounded-lg hover:bg-gray-300 dark:hover:bg-gray-600 transition-colors",
                "Back to List"
            }
            div {
                class: "bg-white dark:bg-gray-800 rounded-lg p-6 space-y-6",
                h2 {
                    class: "text-2xl font-semibold text-gray-900 dark:text-white",
                    "{assignment.title}"
                }
                div {
                    class: "grid grid-cols-2 gap-4",
                    p {
                        class: "text-gray-600 dark:text-gray-300",
                        "Course Code: {assignment.code}"
                    }
                    p {
                        class: "text-gray-600 dark:text-gray-300",
                        "Year: {assignment.year} · {assignment.semester.label()}"
                    }
                }
                div {
                    class: "space-y-4",
                    div {
                        h3 {
                            class: "text-xl font-semibold mb-2 text-gray-900 dark:text-white",
                            "Questions"
                        }
                        div {
                            class: "p-4 bg-gray-50 dark:bg-gray-700 text-gray-900 dark:text-white rounded-lg whitespace-pre-wrap",
                            "{assignment.questions}"
                        }
                    }
                    div {
                        h3 {
                            class: "text-xl font-semibold mb-2 text-gray-900 dark:text-white",
                            "Answers"
                        }
                        div {
                            class: "p-4 bg-gray-50 dark:bg-gray-700 text-gray-900 dark:text-white rounded-lg whitespace-pre-wrap",
                            "{assignment.answers}"
                        }
                    }
                }
            }
        }
    }
}
