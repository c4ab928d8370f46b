use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use tracing::warn;

use courseshare_core::models::{
    Assignment, NewAssignment, Semester, MAX_YEAR, MIN_YEAR, PLACEHOLDER_FILE_PATH,
};

use crate::api::db::ASSIGNMENTS_TABLE;
use crate::components::use_toasts;
use crate::session::use_session;

const WELCOME_GIF: &str =
    "https://juowzxgwkyjhsywosjdq.supabase.co/storage/v1/object/public/assignments/bhrami.gif";

fn current_year() -> i32 {
    Utc::now().year()
}

/// Upload form plus the caller's own previous uploads. Field completeness is
/// enforced by the inputs' `required` attributes; by the time the form
/// submits, every field is populated.
#[component]
pub fn UploadView(on_uploaded: EventHandler<()>) -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let mut title = use_signal(String::new);
    let mut course_code = use_signal(String::new);
    let mut year = use_signal(current_year);
    let mut semester = use_signal(|| None::<Semester>);
    let mut questions = use_signal(String::new);
    let mut answers = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut refresh = use_signal(|| 0u64);

    // Own uploads: server-filtered to the current identity, newest first.
    // Re-runs whenever `refresh` is bumped after a successful submit; the
    // task is dropped with the view.
    let own_uploads = use_resource(move || async move {
        let _refresh = refresh();
        let Some(user) = session.current_user() else {
            return Vec::new();
        };
        match session
            .db()
            .from(ASSIGNMENTS_TABLE)
            .select("*")
            .eq("user_id", user.id)
            .order("created_at", true)
            .fetch::<Assignment>()
            .await
        {
            Ok(rows) => rows,
            Err(error) => {
                warn!("Failed to fetch own uploads: {error}");
                toasts.error("Error", "Failed to fetch uploaded assignments");
                Vec::new()
            }
        }
    });

    let handle_submit = move |_: Event<FormData>| {
        if submitting() {
            return;
        }
        let Some(semester_value) = semester() else {
            return;
        };
        let user = match session.require_user() {
            Ok(user) => user,
            Err(message) => {
                toasts.error("Error", message);
                return;
            }
        };
        let row = NewAssignment {
            user_id: user.id,
            title: title(),
            code: course_code(),
            year: year(),
            semester: semester_value,
            questions: questions(),
            answers: answers(),
            file_path: PLACEHOLDER_FILE_PATH.to_string(),
        };
        submitting.set(true);
        spawn(async move {
            match session.db().insert(ASSIGNMENTS_TABLE, &row).await {
                Ok(()) => {
                    on_uploaded.call(());
                    let next_refresh = *refresh.peek() + 1;
                    refresh.set(next_refresh);
                    toasts.success("Success", "Assignment uploaded successfully");
                    title.set(String::new());
                    course_code.set(String::new());
                    year.set(current_year());
                    semester.set(None);
                    questions.set(String::new());
                    answers.set(String::new());
                }
                // The backend's message, verbatim; the form keeps its state.
                Err(error) => toasts.error("Error", error.to_string()),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "space-y-6",
            h2 {
                class: "text-3xl font-semibold text-gray-900 dark:text-white",
                "Upload Assignment"
            }
            img {
                src: "{WELCOME_GIF}",
                alt: "Welcome",
                class: "w-full h-64 object-contain rounded-lg mb-6",
            }
            form {
                onsubmit: handle_submit,
                class: "p-6 bg-white dark:bg-gray-800 rounded-lg shadow-sm space-y-4",
                div {
                    input {
                        r#type: "text",
                        placeholder: "Course Title",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                        required: true,
                        class: "w-full px-4 py-3 rounded-lg bg-gray-100 dark:bg-gray-700",
                    }
                }
                div {
                    input {
                        r#type: "text",
                        placeholder: "Course Code",
                        value: "{course_code}",
                        oninput: move |evt| course_code.set(evt.value()),
                        required: true,
                        class: "w-full px-4 py-3 rounded-lg bg-gray-100 dark:bg-gray-700",
                    }
                }
                div {
                    class: "grid grid-cols-2 gap-4",
                    input {
                        r#type: "number",
                        placeholder: "Year",
                        value: "{year}",
                        min: "{MIN_YEAR}",
                        max: "{MAX_YEAR}",
                        oninput: move |evt| {
                            if let Ok(value) = evt.value().parse() {
                                year.set(value);
                            }
                        },
                        required: true,
                        class: "px-4 py-3 rounded-lg bg-gray-100 dark:bg-gray-700",
                    }
                    select {
                        value: semester().map(Semester::as_str).unwrap_or(""),
                        onchange: move |evt| semester.set(evt.value().parse().ok()),
                        required: true,
                        class: "px-4 py-3 rounded-lg bg-gray-100 dark:bg-gray-700",
                        option { value: "", "Select Semester" }
                        for choice in Semester::ALL {
                            option {
                                value: "{choice.as_str()}",
                                selected: semester() == Some(choice),
                                "{choice.label()}"
                            }
                        }
                    }
                }
                div {
                    textarea {
                        placeholder: "Enter your questions here...",
                        value: "{questions}",
                        oninput: move |evt| questions.set(evt.value()),
                        required: true,
                        class: "min-h-52 w-full px-4 py-3 rounded-lg bg-gray-100 dark:bg-gray-700",
                    }
                }
                div {
                    textarea {
                        placeholder: "Enter your answers here...",
                        value: "{answers}",
                        oninput: move |evt| answers.set(evt.value()),
                        required: true,
                        class: "min-h-52 w-full px-4 py-3 rounded-lg bg-gray-100 dark:bg-gray-700",
                    }
                }
                button {
                    r#type: "submit",
                    disabled: submitting(),
                    class: "w-full py-3 font-semibold rounded-lg bg-gray-900 dark:bg-white text-white dark:text-gray-900 hover:bg-gray-800 disabled:opacity-50",
                    if submitting() { "Uploading..." } else { "Upload Assignment" }
                }
            }
            match &*own_uploads.read() {
                Some(uploads) if !uploads.is_empty() => rsx! {
                    div {
                        class: "mt-8",
                        h3 {
                            class: "text-xl font-semibold mb-4 text-gray-900 dark:text-white",
                            "Your Uploaded Assignments"
                        }
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                            for upload in uploads {
                                div {
                                    key: "{upload.id}",
                                    class: "p-4 bg-white dark:bg-gray-800 rounded-lg shadow-sm",
                                    h4 {
                                        class: "font-semibold text-lg mb-2 text-gray-900 dark:text-white",
                                        "{upload.title}"
                                    }
                                    p {
                                        class: "text-sm text-gray-600 dark:text-gray-300",
                                        "Code: {upload.code}"
                                    }
                                    p {
                                        class: "text-sm text-gray-600 dark:text-gray-300",
                                        "Year: {upload.year}"
                                    }
                                }
                            }
                        }
                    }
                },
                _ => rsx! {},
            }
        }
    }
}
