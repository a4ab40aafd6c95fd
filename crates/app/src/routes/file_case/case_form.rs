use dioxus::prelude::*;
use shared_types::{validate_case_details, CaseDetails, CaseFormInput};

/// Second wizard step: defendant, claim amount, incident date, location.
/// Validation is local and shows at most one message; nothing is sent to the
/// server until the form is clean.
#[component]
pub fn CaseForm(
    input: Signal<CaseFormInput>,
    category: String,
    analyzing: bool,
    analyze_error: Option<String>,
    on_back: EventHandler<()>,
    on_submit: EventHandler<CaseDetails>,
) -> Element {
    let mut validation_error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if analyzing {
            return;
        }
        match validate_case_details(&input.read()) {
            Ok(details) => {
                validation_error.set(None);
                on_submit.call(details);
            }
            Err(msg) => validation_error.set(Some(msg)),
        }
    };

    rsx! {
        shared_ui::Card {
            shared_ui::CardHeader {
                shared_ui::CardTitle { "Case details" }
                shared_ui::CardDescription {
                    "Classified as "
                    shared_ui::Badge { variant: shared_ui::BadgeVariant::Secondary, "{category}" }
                }
            }
            shared_ui::CardContent {
                if let Some(err) = validation_error() {
                    div { class: "form-error", "{err}" }
                }
                if let Some(err) = analyze_error {
                    div { class: "form-error", "{err}" }
                }
                form { class: "form-stack", onsubmit: handle_submit,
                    shared_ui::Input {
                        label: "Defendant name",
                        placeholder: "Company or person you are filing against",
                        value: input.read().defendant_name.clone(),
                        on_input: move |evt: FormEvent| input.write().defendant_name = evt.value(),
                    }
                    shared_ui::Input {
                        label: "Claim amount (₹)",
                        placeholder: "e.g. 25000",
                        value: input.read().claim_amount.clone(),
                        on_input: move |evt: FormEvent| input.write().claim_amount = evt.value(),
                    }
                    shared_ui::Input {
                        label: "Incident date",
                        input_type: "date",
                        value: input.read().incident_date.clone(),
                        on_input: move |evt: FormEvent| input.write().incident_date = evt.value(),
                    }
                    div { class: "form-row",
                        shared_ui::Input {
                            label: "City",
                            value: input.read().city.clone(),
                            on_input: move |evt: FormEvent| input.write().city = evt.value(),
                        }
                        shared_ui::Input {
                            label: "State",
                            value: input.read().state.clone(),
                            on_input: move |evt: FormEvent| input.write().state = evt.value(),
                        }
                        shared_ui::Input {
                            label: "PIN code",
                            value: input.read().pin_code.clone(),
                            on_input: move |evt: FormEvent| input.write().pin_code = evt.value(),
                        }
                    }

                    div { class: "wizard-actions",
                        shared_ui::Button {
                            variant: shared_ui::ButtonVariant::Outline,
                            // Buttons default to type=submit; this one must not
                            // trigger the form.
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_back.call(());
                            },
                            "Back"
                        }
                        shared_ui::Button { disabled: analyzing,
                            if analyzing { "Analyzing..." } else { "Analyze my case" }
                        }
                    }
                }
            }
        }
    }
}
