use dioxus::prelude::*;
use tracing::warn;

use courseshare_core::models::{AuthUser, Profile};

use crate::api::db::PROFILES_TABLE;
use crate::components::{format_member_since, use_toasts};
use crate::session::use_session;

#[derive(Clone, PartialEq)]
enum ProfileLoad {
    Loaded { profile: Profile, user: AuthUser },
    Unauthenticated,
    Failed,
}

/// The current user's profile row. "Member since" comes from the stored
/// creation timestamp, not the clock at render time.
#[component]
pub fn ProfileView() -> Element {
    let session = use_session();
    let toasts = use_toasts();

    let profile = use_resource(move || async move {
        let user = match session.require_user() {
            Ok(user) => user,
            Err(message) => {
                toasts.error("Error", message);
                return ProfileLoad::Unauthenticated;
            }
        };
        match session
            .db()
            .from(PROFILES_TABLE)
            .select("*")
            .eq("id", user.id)
            .fetch_single::<Profile>()
            .await
        {
            Ok(row) => ProfileLoad::Loaded { profile: row, user },
            Err(error) => {
                warn!("Failed to fetch profile: {error}");
                toasts.error("Error", "Failed to fetch profile");
                ProfileLoad::Failed
            }
        }
    });

    rsx! {
        div {
            class: "space-y-6",
            h2 {
                class: "text-3xl font-semibold text-gray-900 dark:text-white",
                "My Profile"
            }
            match &*profile.read() {
                None => rsx! {
                    div {
                        class: "text-center text-gray-500 dark:text-gray-400",
                        "Loading..."
                    }
                },
                Some(ProfileLoad::Unauthenticated) => rsx! {
                    div {
                        class: "p-6 bg-white dark:bg-gray-800 rounded-lg shadow-sm text-gray-600 dark:text-gray-300",
                        "You are not signed in."
                    }
                },
                Some(ProfileLoad::Failed) => rsx! {
                    div {
                        class: "p-6 bg-white dark:bg-gray-800 rounded-lg shadow-sm text-gray-600 dark:text-gray-300",
                        "Could not load your profile."
                    }
                },
                Some(ProfileLoad::Loaded { profile: row, user }) => {
                    let username = row.username.clone().unwrap_or_else(|| "User".to_string());
                    let display_name = row.username.clone().unwrap_or_else(|| "Not set".to_string());
                    let membership = if user.is_anonymous { "Guest user" } else { "Member" };
                    let joined = format_member_since(row.created_at.or(user.created_at));
                    rsx! {
                        div {
                            class: "p-6 bg-white dark:bg-gray-800 rounded-lg shadow-sm",
                            div {
                                class: "space-y-4",
                                div {
                                    h3 {
                                        class: "text-xl font-semibold text-gray-900 dark:text-white",
                                        "{username}"
                                    }
                                    p {
                                        class: "text-gray-500 dark:text-gray-400",
                                        "{membership}"
                                    }
                                }
                                div {
                                    h3 {
                                        class: "text-sm font-medium text-gray-500 dark:text-gray-400",
                                        "Username"
                                    }
                                    p {
                                        class: "text-lg text-gray-900 dark:text-white",
                                        "{display_name}"
                                    }
                                }
                                div {
                                    h3 {
                                        class: "text-sm font-medium text-gray-500 dark:text-gray-400",
                                        "Member Since"
                                    }
                                    p {
                                        class: "text-lg text-gray-900 dark:text-white",
                                        "{joined}"
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
