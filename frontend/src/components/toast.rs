//! Transient notices: one visible slot, auto-hidden after a fixed window.
//! A second trigger while a notice is showing replaces it and restarts the
//! window instead of queueing.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const NOTICE_MILLIS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct NoticeState {
    current: Option<Notice>,
    /// Bumped on every trigger so a stale timer cannot hide a newer notice.
    generation: u64,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    state: Signal<NoticeState>,
}

pub fn use_toasts_provider() -> Toasts {
    let state = use_signal(NoticeState::default);
    use_context_provider(|| Toasts { state })
}

pub fn use_toasts() -> Toasts {
    use_context()
}

impl Toasts {
    pub fn success(&self, title: impl Into<String>, body: impl Into<String>) {
        self.show(NoticeKind::Success, title.into(), body.into());
    }

    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) {
        self.show(NoticeKind::Error, title.into(), body.into());
    }

    fn show(&self, kind: NoticeKind, title: String, body: String) {
        let mut state = self.state;
        let generation = state.peek().generation + 1;
        state.set(NoticeState {
            current: Some(Notice { kind, title, body }),
            generation,
        });
        spawn(async move {
            TimeoutFuture::new(NOTICE_MILLIS).await;
            if state.peek().generation == generation {
                state.set(NoticeState {
                    current: None,
                    generation,
                });
            }
        });
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let state = toasts.state;

    let Some(notice) = state.read().current.clone() else {
        return rsx! {};
    };
    let card_class = match notice.kind {
        NoticeKind::Success => {
            "rounded-lg border border-green-500 bg-white dark:bg-gray-800 shadow-xl p-4"
        }
        NoticeKind::Error => {
            "rounded-lg border border-red-500 bg-white dark:bg-gray-800 shadow-xl p-4"
        }
    };

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-50 w-full max-w-sm",
            div {
                class: "{card_class}",
                p {
                    class: "font-semibold text-gray-900 dark:text-white",
                    "{notice.title}"
                }
                p {
                    class: "text-sm text-gray-600 dark:text-gray-300 mt-1",
                    "{notice.body}"
                }
            }
        }
    }
}
