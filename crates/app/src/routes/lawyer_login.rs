use dioxus::prelude::*;
use shared_types::AppError;

use crate::auth::use_auth;
use crate::routes::Route;

/// Login entry point for lawyers. Uses the same credentials as the regular
/// login; what makes a session a lawyer session is the directory match, not
/// which page the user typed their password on.
#[component]
pub fn LawyerLogin() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().push(Route::Profile {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        match server::api::login(email(), password()).await {
            Ok(user) => {
                // The dashboard branches on the resolved role, so a valid
                // account without a directory row lands on the consumer view.
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
                    shared_ui::CardTitle { "Lawyer login" }
                    shared_ui::CardDescription { "Access your case board and client requests." }
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
                        "Not registered yet? "
                        Link { to: Route::LawyerSignup {}, "Join as a lawyer" }
                    }
                }
            }
        }
    }
}
