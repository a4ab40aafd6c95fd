use dioxus::prelude::*;
use shared_types::AppError;

use crate::auth::use_auth;
use crate::routes::Route;

/// Email/password login for consumers.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in — the dashboard is the obvious destination.
    if auth.is_authenticated() {
        navigator().push(Route::Profile {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        match server::api::login(email(), password()).await {
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
                    shared_ui::CardTitle { "Log in" }
                    shared_ui::CardDescription { "Pick up where you left off." }
                }
                shared_ui::CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "form-error", "{err}" }
                    }
                    form { class: "form-stack", onsubmit: handle_login,
                        shared_ui::Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        shared_ui::Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        shared_ui::Button { disabled: loading(),
                            if loading() { "Logging in..." } else { "Log in" }
                        }
                    }
                }
                shared_ui::CardFooter {
                    span { class: "muted",
                        "New here? "
                        Link { to: Route::Signup {}, "Create an account" }
                        " · Practicing lawyer? "
                        Link { to: Route::LawyerLogin {}, "Lawyer login" }
                    }
                }
            }
        }
    }
}
