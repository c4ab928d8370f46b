//! Celebration overlay after a successful upload. It stays up for a fixed
//! two seconds; triggering it again mid-flight restarts the same overlay
//! rather than stacking a second one.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

pub const UPLOAD_OVERLAY_MILLIS: u32 = 2_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub visible: bool,
    pub generation: u64,
}

pub fn show_upload_overlay(mut state: Signal<OverlayState>) {
    let generation = state.peek().generation + 1;
    state.set(OverlayState {
        visible: true,
        generation,
    });
}

#[component]
pub fn UploadOverlay(state: Signal<OverlayState>) -> Element {
    // Each trigger bumps the generation; only the matching timer hides.
    use_effect(move || {
        let snapshot = *state.read();
        if !snapshot.visible {
            return;
        }
        spawn(async move {
            TimeoutFuture::new(UPLOAD_OVERLAY_MILLIS).await;
            let mut state = state;
            if state.peek().generation == snapshot.generation {
                state.write().visible = false;
            }
        });
    });

    rsx! {
        if state.read().visible {
            div {
                class: "fixed inset-x-0 bottom-0 z-50 flex justify-center pb-8 pointer-events-none",
                div {
                    class: "rounded-lg bg-gray-900 dark:bg-white text-white dark:text-gray-900 shadow-xl px-8 py-6 text-center",
                    p { class: "text-3xl", "🎉" }
                    p {
                        class: "font-semibold mt-2",
                        "Assignment uploaded!"
                    }
                }
            }
        }
    }
}
