use dioxus::prelude::*;
use tracing::warn;

use courseshare_core::models::UploadStats;

use crate::components::{show_upload_overlay, use_toasts, OverlayState, Sidebar, UploadOverlay};
use crate::session::use_session;
use crate::types::Destination;
use crate::views::{BrowseView, DashboardView, ProfileView, UploadView};

/// Authenticated layout: the sidebar picks which single view is mounted.
/// The upload counters and the celebration overlay live here so the
/// dashboard and the upload form stay presentational.
#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let mut destination = use_signal(Destination::default);
    let mut stats = use_signal(UploadStats::default);
    let overlay = use_signal(OverlayState::default);

    let handle_logout = move |_| {
        spawn(async move {
            match session.logout().await {
                Ok(()) => {
                    destination.set(Destination::Dashboard);
                    toasts.success("Success", "Successfully logged out");
                }
                Err(error) => {
                    warn!("Logout failed: {error}");
                    toasts.error("Error", "Failed to logout");
                }
            }
        });
    };

    let handle_uploaded = move |_| {
        stats.write().record_upload();
        show_upload_overlay(overlay);
    };

    rsx! {
        div {
            class: "flex h-screen bg-gray-50 dark:bg-gray-900",
            Sidebar { current: destination, on_logout: handle_logout }
            main {
                class: "flex-1 overflow-auto relative",
                UploadOverlay { state: overlay }
                div {
                    class: "max-w-6xl mx-auto px-4 py-8",
                    match destination() {
                        Destination::Dashboard => rsx! {
                            DashboardView {
                                uploaded_assignments: stats.read().assignments,
                                uploaded_answers: stats.read().answers,
                            }
                        },
                        Destination::Profile => rsx! { ProfileView {} },
                        Destination::Upload => rsx! { UploadView { on_uploaded: handle_uploaded } },
                        Destination::Browse => rsx! { BrowseView {} },
                    }
                }
            }
        }
    }
}
