use dioxus::prelude::*;

use courseshare_core::auth::SignUpOutcome;

use crate::components::use_toasts;
use crate::session::use_session;

/// Login/signup card shown while no session exists. Field completeness and
/// the email/password shape are re-checked by the session controller before
/// anything goes over the wire; the confirmation-password match is the one
/// check that lives here.
#[component]
pub fn AuthView() -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut is_signup = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let handle_submit = move |_: Event<FormData>| {
        if busy() {
            return;
        }
        let email_value = email();
        let password_value = password();

        if is_signup() {
            if password_value != confirm_password() {
                toasts.error("Error", "Passwords do not match");
                return;
            }
            busy.set(true);
            spawn(async move {
                match session.signup(&email_value, &password_value).await {
                    Ok(SignUpOutcome::AlreadyRegistered) => {
                        toasts.error(
                            "Account exists",
                            "This email is already registered. Please sign in.",
                        );
                    }
                    Ok(SignUpOutcome::ConfirmationRequired) => {
                        toasts.success(
                            "Success",
                            "Account created! Please check your email for verification.",
                        );
                        email.set(String::new());
                        password.set(String::new());
                        confirm_password.set(String::new());
                    }
                    Err(message) => toasts.error("Error", message),
                }
                busy.set(false);
            });
        } else {
            busy.set(true);
            spawn(async move {
                match session.login(&email_value, &password_value).await {
                    Ok(()) => toasts.success("Success", "Successfully logged in"),
                    Err(message) => toasts.error("Error", message),
                }
                busy.set(false);
            });
        }
    };

    let handle_guest = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            match session.guest_login().await {
                Ok(()) => toasts.success("Welcome!", "You are now browsing as a guest."),
                Err(message) => toasts.error("Error", message),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 px-4",
            div {
                class: "w-full max-w-md",
                div {
                    class: "bg-white dark:bg-gray-800 rounded-lg shadow-xl overflow-hidden",
                    div {
                        class: "px-8 py-6",
                        h2 {
                            class: "text-2xl font-semibold text-gray-800 dark:text-white mb-2",
                            "Courseshare"
                        }
                        p {
                            class: "text-gray-600 dark:text-gray-400 mb-6",
                            "Assignment Share"
                        }
                        form {
                            onsubmit: handle_submit,
                            class: "space-y-4",
                            div {
                                label {
                                    r#for: "email",
                                    class: "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1",
                                    "Email"
                                }
                                input {
                                    id: "email",
                                    r#type: "email",
                                    placeholder: "Enter your email",
                                    value: "{email}",
                                    oninput: move |evt| email.set(evt.value()),
                                    required: true,
                                    class: "w-full px-4 py-3 rounded-lg bg-gray-100 dark:bg-gray-700 text-sm",
                                }
                            }
                            div {
                                label {
                                    r#for: "password",
                                    class: "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1",
                                    "Password"
                                }
                                input {
                                    id: "password",
                                    r#type: "password",
                                    placeholder: "Enter your password",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                    required: true,
                                    minlength: "6",
                                    class: "w-full px-4 py-3 rounded-lg bg-gray-100 dark:bg-gray-700 text-sm",
                                }
                            }
                            if is_signup() {
                                div {
                                    label {
                                        r#for: "confirm-password",
                                        class: "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1",
                                        "Confirm Password"
                                    }
                                    input {
                                        id: "confirm-password",
                                        r#type: "password",
                                        placeholder: "Confirm your password",
                                        value: "{confirm_password}",
                                        oninput: move |evt| confirm_password.set(evt.value()),
                                        required: true,
                                        minlength: "6",
                                        class: "w-full px-4 py-3 rounded-lg bg-gray-100 dark:bg-gray-700 text-sm",
                                    }
                                }
                            }
                            button {
                                r#type: "submit",
                                disabled: busy(),
                                class: "w-full py-3 font-semibold rounded-lg bg-gray-900 dark:bg-white text-white dark:text-gray-900 hover:bg-gray-800 disabled:opacity-50",
                                if is_signup() { "Create Account" } else { "Sign In" }
                            }
                            button {
                                r#type: "button",
                                onclick: move |_| {
                                    is_signup.set(!is_signup());
                                    password.set(String::new());
                                    confirm_password.set(String::new());
                                },
                                class: "w-full py-3 font-semibold rounded-lg bg-gray-100 dark:bg-gray-700 text-gray-900 dark:text-white hover:bg-gray-200 dark:hover:bg-gray-600",
                                if is_signup() { "Already have an account? Sign In" } else { "Need an account? Sign Up" }
                            }
                            div {
                                class: "relative my-4 text-center text-sm text-gray-500 dark:text-gray-400",
                                "or"
                            }
                            button {
                                r#type: "button",
                                onclick: handle_guest,
                                disabled: busy(),
                                class: "w-full py-3 font-semibold rounded-lg border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-700",
                                "Continue as Guest"
                            }
                        }
                    }
                }
            }
        }
    }
}
