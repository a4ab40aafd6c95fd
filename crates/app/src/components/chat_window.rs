use dioxus::prelude::*;
use shared_types::ChatMessage;
use uuid::Uuid;

use crate::auth::use_auth;

/// Maximum consecutive poll errors before the loop stops.
/// Reopening the chat restarts the listener.
#[allow(dead_code)]
const MAX_CONSECUTIVE_ERRORS: u32 = 10;

/// Case chat thread. Polls for new messages while mounted; the poll loop is
/// a coroutine, so it is dropped together with the component on unmount.
#[component]
#[allow(unused_variables, unused_mut)]
pub fn ChatWindow(case_id: Uuid) -> Element {
    let auth = use_auth();
    let my_id = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.id)
        .unwrap_or_default();

    let mut messages = use_signal(Vec::<ChatMessage>::new);
    let mut draft = use_signal(String::new);
    let mut send_error = use_signal(|| Option::<String>::None);

    use_coroutine(move |_: UnboundedReceiver<()>| async move {
        // During SSR server functions execute as direct calls and this loop
        // would block the render. Only poll on the hydrated client.
        #[cfg(feature = "server")]
        return;

        #[cfg(not(feature = "server"))]
        {
            let mut consecutive_errors: u32 = 0;

            loop {
                let last_id = messages.read().last().map(|m: &ChatMessage| m.id);
                match server::api::poll_messages(case_id, last_id).await {
                    Ok(fresh) => {
                        consecutive_errors = 0;
                        if !fresh.is_empty() {
                            let mut list = messages.write();
                            for msg in fresh {
                                if !list.iter().any(|m| m.id == msg.id) {
                                    list.push(msg);
                                }
                            }
                        }
                        // The server holds empty polls for a few seconds, so
                        // looping immediately does not hammer it.
                    }
                    Err(_) => {
                        consecutive_errors += 1;
                        if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                            break;
                        }
                    }
                }
            }
        }
    });

    let handle_send = move |evt: FormEvent| async move {
        evt.prevent_default();
        let body = draft().trim().to_string();
        if body.is_empty() {
            return;
        }
        send_error.set(None);

        match server::api::send_message(case_id, body).await {
            Ok(msg) => {
                draft.set(String::new());
                let mut list = messages.write();
                if !list.iter().any(|m| m.id == msg.id) {
                    list.push(msg);
                }
            }
            Err(e) => {
                send_error.set(Some(shared_types::AppError::friendly_message(&e.to_string())));
            }
        }
    };

    rsx! {
        div { class: "chat-window",
            div { class: "chat-messages",
                if messages.read().is_empty() {
                    p { class: "muted", "No messages yet. Say hello." }
                }
                for msg in messages.read().iter() {
                    div {
                        key: "{msg.id}",
                        class: if msg.sender_id == my_id { "chat-bubble mine" } else { "chat-bubble theirs" },
                        p { class: "chat-body", "{msg.body}" }
                        span { class: "chat-time", {msg.created_at.format("%H:%M").to_string()} }
                    }
                }
            }

            if let Some(err) = send_error() {
                div { class: "form-error", "{err}" }
            }

            form { class: "chat-compose", onsubmit: handle_send,
                shared_ui::Input {
                    value: draft(),
                    placeholder: "Type a message...",
                    on_input: move |evt: FormEvent| draft.set(evt.value()),
                }
                shared_ui::Button { "Send" }
            }
        }
    }
}
