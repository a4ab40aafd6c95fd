use base64::Engine as _;
use dioxus::prelude::*;
use shared_types::{AnalysisResult, AppError, FeatureFlags, LawyerProfile};

use crate::routes::profile::sample_data;

/// Final wizard step: winnability meter, applicable sections, reasoning,
/// courtroom script, and precedents. The case itself is saved server-side in
/// the background; the dashboard is where it shows up.
#[component]
pub fn AnalysisView(
    analysis: AnalysisResult,
    category: String,
    on_back: EventHandler<()>,
) -> Element {
    let flags = use_context::<FeatureFlags>();
    let score = analysis.confidence_score;
    let recommends = analysis.recommends_lawyer();

    rsx! {
        shared_ui::Card {
            shared_ui::CardHeader {
                shared_ui::CardTitle { "Case analysis" }
                shared_ui::CardDescription {
                    shared_ui::Badge {
                        variant: shared_ui::BadgeVariant::Secondary,
                        "{analysis.complexity.as_str()} case"
                    }
                }
            }
            shared_ui::CardContent {
                div { class: "confidence-meter",
                    div { class: "confidence-label-row",
                        span { "Winnability" }
                        span { class: "confidence-value", "{score}%" }
                    }
                    shared_ui::Progress {
                        value: Some(score as f64),
                        shared_ui::ProgressIndicator {}
                    }
                }

                if !analysis.legal_sections.is_empty() {
                    div { class: "analysis-sections",
                        h3 { "Applicable sections" }
                        div { class: "badge-row",
                            for section in analysis.legal_sections.iter() {
                                shared_ui::Badge { key: "{section}", "{section}" }
                            }
                        }
                    }
                }

                div { class: "analysis-reasoning",
                    h3 { "Assessment" }
                    p { "{analysis.reasoning}" }
                }

                if !analysis.kanoon_cases.is_empty() {
                    div { class: "analysis-precedents",
                        h3 { "Similar cases" }
                        ul {
                            for case in analysis.kanoon_cases.iter() {
                                li { key: "{case.title}",
                                    if let Some(url) = case.url.as_ref() {
                                        a { href: "{url}", target: "_blank", "{case.title}" }
                                    } else {
                                        span { "{case.title}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        CourtroomScript {
            script: analysis.courtroom_script.clone(),
            speech_enabled: flags.speech,
        }

        if recommends {
            RecommendedLawyers { category }
        }

        shared_ui::Card {
            shared_ui::CardContent {
                p { class: "muted",
                    "Your case has been saved. Visit your dashboard to track it, "
                    "download the complaint PDF, and talk to a lawyer."
                }
                div { class: "wizard-actions",
                    shared_ui::Button {
                        variant: shared_ui::ButtonVariant::Outline,
                        onclick: move |_| on_back.call(()),
                        "Back"
                    }
                    Link { to: crate::routes::Route::Profile {},
                        shared_ui::Button { "Go to dashboard" }
                    }
                }
            }
        }
    }
}

/// What the complainant can say in front of the judge, with optional audio
/// playback when speech synthesis is enabled.
#[component]
fn CourtroomScript(script: String, speech_enabled: bool) -> Element {
    let mut audio_src = use_signal(|| Option::<String>::None);
    let mut speaking = use_signal(|| false);
    let mut speak_error = use_signal(|| Option::<String>::None);

    let script_for_speech = script.clone();
    let handle_speak = move |_| {
        let script = script_for_speech.clone();
        async move {
            speaking.set(true);
            speak_error.set(None);
            match server::api::speak_script(script).await {
                Ok(bytes) => {
                    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                    audio_src.set(Some(format!("data:audio/mpeg;base64,{encoded}")));
                }
                Err(e) => {
                    speak_error.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
            speaking.set(false);
        }
    };

    rsx! {
        shared_ui::Card {
            shared_ui::CardHeader {
                shared_ui::CardTitle { "Courtroom script" }
                shared_ui::CardDescription {
                    "Read this out when presenting your case in person."
                }
            }
            shared_ui::CardContent {
                p { class: "courtroom-script", "{script}" }

                if let Some(err) = speak_error() {
                    div { class: "form-error", "{err}" }
                }

                if speech_enabled {
                    if let Some(src) = audio_src() {
                        audio { src: "{src}", controls: true, autoplay: true }
                    } else {
                        shared_ui::Button {
                            variant: shared_ui::ButtonVariant::Secondary,
                            disabled: speaking(),
                            onclick: handle_speak,
                            if speaking() { "Generating audio..." } else { "Listen" }
                        }
                    }
                }
            }
        }
    }
}

/// Lawyer suggestions shown when the case is complex or the odds are weak.
/// Falls back to sample profiles so the panel is never empty.
#[component]
fn RecommendedLawyers(category: String) -> Element {
    let resource = use_server_future(move || {
        let category = category.clone();
        async move { server::api::recommended_lawyers(category).await }
    })?;

    let lawyers: Vec<LawyerProfile> = match resource.read().as_ref() {
        Some(Ok(list)) if !list.is_empty() => list.clone(),
        // Error or empty directory: show sample profiles rather than nothing.
        Some(_) => sample_data::sample_lawyers(),
        None => return rsx! { shared_ui::Skeleton { style: "height: 8rem;" } },
    };

    rsx! {
        shared_ui::Card {
            shared_ui::CardHeader {
                shared_ui::CardTitle { "This case could use a lawyer" }
                shared_ui::CardDescription {
                    "Based on the complexity and odds, talking to a professional is worth it."
                }
            }
            shared_ui::CardContent {
                div { class: "lawyer-grid",
                    for lawyer in lawyers {
                        div { key: "{lawyer.id}", class: "lawyer-card-row",
                            img {
                                class: "lawyer-card-avatar",
                                src: "{lawyer.avatar_url()}",
                                alt: "{lawyer.name}",
                            }
                            div {
                                p { class: "lawyer-card-name", "{lawyer.name}" }
                                shared_ui::Badge {
                                    variant: shared_ui::BadgeVariant::Secondary,
                                    {lawyer.domain_or_general().to_string()}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
