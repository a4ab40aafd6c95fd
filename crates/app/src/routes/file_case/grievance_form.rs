use dioxus::prelude::*;
use shared_types::{AppError, GrievanceResult};

/// First wizard step: free-text grievance in any language, with an optional
/// supporting document. At least one of the two must be present.
#[component]
pub fn GrievanceForm(on_complete: EventHandler<GrievanceResult>) -> Element {
    let mut text = use_signal(String::new);
    let mut file_name = use_signal(|| Option::<String>::None);
    let mut file_bytes = use_signal(|| Option::<Vec<u8>>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_file = move |evt: FormEvent| async move {
        let files = evt.files();
        if let Some(f) = files.first() {
            let name = f.name();
            match f.read_bytes().await {
                Ok(bytes) => {
                    file_bytes.set(Some(bytes.to_vec()));
                    file_name.set(Some(name));
                    error_msg.set(None);
                }
                Err(_) => {
                    error_msg.set(Some("Failed to read the file.".to_string()));
                }
            }
        }
    };

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if loading() {
            return;
        }

        let grievance_text = text().trim().to_string();
        if grievance_text.is_empty() && file_bytes().is_none() {
            error_msg.set(Some(
                "Describe your grievance or attach a document.".to_string(),
            ));
            return;
        }

        loading.set(true);
        error_msg.set(None);

        match server::api::process_grievance(grievance_text, file_name(), file_bytes()).await {
            Ok(result) => on_complete.call(result),
            Err(e) => {
                error_msg.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    };

    rsx! {
        shared_ui::Card {
            shared_ui::CardHeader {
                shared_ui::CardTitle { "What happened?" }
                shared_ui::CardDescription {
                    "Write in whichever language you are comfortable with. "
                    "We will translate and classify it for you."
                }
            }
            shared_ui::CardContent {
                if let Some(err) = error_msg() {
                    div { class: "form-error", "{err}" }
                }
                form { class: "form-stack", onsubmit: handle_submit,
                    shared_ui::Textarea {
                        label: "Your grievance",
                        placeholder: "e.g. I paid for a refrigerator that was never delivered...",
                        rows: 8,
                        value: text(),
                        on_input: move |evt: FormEvent| text.set(evt.value()),
                    }

                    div { class: "file-field",
                        shared_ui::Label { "Supporting document (optional)" }
                        input {
                            r#type: "file",
                            accept: ".pdf,.txt,image/jpeg,image/png",
                            onchange: handle_file,
                        }
                        if let Some(name) = file_name() {
                            span { class: "muted", "Attached: {name}" }
                        }
                    }

                    shared_ui::Button { disabled: loading(),
                        if loading() { "Classifying..." } else { "Continue" }
                    }
                }
            }
        }
    }
}
