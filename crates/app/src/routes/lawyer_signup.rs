use dioxus::prelude::*;
use shared_types::AppError;

use crate::auth::use_auth;
use crate::routes::Route;

/// Lawyer registration: creates the account plus the directory entry that
/// makes the session resolve as a lawyer.
#[component]
pub fn LawyerSignup() -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut domain = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().push(Route::Profile {});
    }

    let handle_signup = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        match server::api::register_lawyer(name(), email(), password(), domain(), phone()).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().push(Route::Profile {});
            }
            Err(e) => {
                error_msg.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    };

    rsx! {
        div { class: "auth-page",
            shared_ui::Card {
                shared_ui::CardHeader {
                    shared_ui::CardTitle { "Join as a lawyer" }
                    shared_ui::CardDescription {
                        "Get matched with consumers whose cases need real representation."
                    }
                }
                shared_ui::CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "form-error", "{err}" }
                    }
                    form { class: "form-stack", onsubmit: handle_signup,
                        shared_ui::Input {
                            label: "Full name",
                            value: name(),
                            on_input: move |evt: FormEvent| name.set(evt.value()),
                        }
                        shared_ui::Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        shared_ui::Input {
                            label: "Password",
                            input_type: "password",
                            placeholder: "At least 8 characters",
                            value: password(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        shared_ui::Input {
                            label: "Practice area",
                            placeholder: "e.g. Consumer Protection",
                            value: domain(),
                            on_input: move |evt: FormEvent| domain.set(evt.value()),
                        }
                        shared_ui::Input {
                            label: "Phone (optional)",
                            input_type: "tel",
                            value: phone(),
                            on_input: move |evt: FormEvent| phone.set(evt.value()),
                        }
                        shared_ui::Button { disabled: loading(),
                            if loading() { "Creating..." } else { "Sign up" }
                        }
                    }
                }
                shared_ui::CardFooter {
                    span { class: "muted",
                        "Already registered? "
                        Link { to: Route::LawyerLogin {}, "Log in" }
                    }
                }
            }
        }
    }
}
