use base64::Engine as _;
use dioxus::prelude::*;
use shared_types::{
    active_cases, to_case_display, to_lawyer_card, AppError, CaseRecord, LawyerCard, LawyerProfile,
};
use uuid::Uuid;

use super::sample_data;
use crate::auth::use_auth;
use crate::components::ChatWindow;
use crate::format_helpers::{format_date_human, format_rupees};
use crate::routes::Route;

/// The consumer's dashboard: their cases, document downloads, chat with
/// assigned lawyers, and lawyer recommendations. Every remote read here is
/// best-effort; a failure shows an empty panel rather than an error page.
#[component]
pub fn UserDashboard() -> Element {
    let auth = use_auth();
    let display_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();

    let mut cases_resource =
        use_server_future(move || async move { server::api::list_my_cases().await })?;

    let cases: Option<Vec<CaseRecord>> = match cases_resource.read().as_ref() {
        None => None,
        Some(Ok(list)) => Some(list.clone()),
        Some(Err(_)) => Some(Vec::new()),
    };

    rsx! {
        shared_ui::PageHeader {
            shared_ui::PageTitle { "Welcome back, {display_name}" }
            shared_ui::PageActions {
                Link { to: Route::FileCase {},
                    shared_ui::Button { "File a new case" }
                }
            }
        }

        match cases {
            None => rsx! {
                div { class: "dashboard-grid",
                    for i in 0..3 {
                        shared_ui::Skeleton { key: "{i}", style: "height: 10rem;" }
                    }
                }
            },
            Some(list) => {
                let displays: Vec<_> = list.iter().map(to_case_display).collect();
                let active_count = active_cases(&displays).len();
                let category = list
                    .first()
                    .and_then(|c| c.legal_category.clone())
                    .unwrap_or_default();
                let engage_case = list
                    .iter()
                    .find(|c| c.assigned_lawyer_id.is_none() && c.status != "Closed")
                    .map(|c| c.id);

                rsx! {
                    div { class: "stat-row",
                        StatCard { label: "Total cases", value: list.len() }
                        StatCard { label: "Active cases", value: active_count }
                    }

                    if list.is_empty() {
                        shared_ui::Card {
                            shared_ui::CardContent {
                                p { class: "muted",
                                    "You haven't filed any cases yet. Describe your "
                                    "grievance and we will handle the paperwork."
                                }
                                Link { to: Route::FileCase {},
                                    shared_ui::Button { "Get started" }
                                }
                            }
                        }
                    } else {
                        section { class: "dashboard-section",
                            h2 { "Your cases" }
                            div { class: "dashboard-grid",
                                for case in list.iter() {
                                    CaseCard { key: "{case.id}", case: case.clone() }
                                }
                            }
                        }
                    }

                    RecommendationsPanel {
                        category,
                        engage_case,
                        on_engaged: move |_| cases_resource.restart(),
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: usize) -> Element {
    rsx! {
        shared_ui::Card {
            shared_ui::CardContent {
                p { class: "stat-value", "{value}" }
                p { class: "stat-label", "{label}" }
            }
        }
    }
}

/// One filed case: display line, status, complaint download, and chat once a
/// lawyer is on board.
#[component]
fn CaseCard(case: CaseRecord) -> Element {
    let display = to_case_display(&case);
    let case_id = case.id;
    let has_lawyer = case.assigned_lawyer_id.is_some();
    let filed = format_date_human(&display.filed_on);

    let mut show_chat = use_signal(|| false);
    let mut pdf_href = use_signal(|| Option::<String>::None);
    let mut pdf_busy = use_signal(|| false);
    let mut pdf_error = use_signal(|| Option::<String>::None);

    let handle_pdf = move |_| async move {
        pdf_busy.set(true);
        pdf_error.set(None);
        match server::api::generate_complaint_pdf(case_id).await {
            Ok(bytes) => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                pdf_href.set(Some(format!("data:application/pdf;base64,{encoded}")));
            }
            Err(e) => {
                pdf_error.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        pdf_busy.set(false);
    };

    rsx! {
        shared_ui::Card {
            shared_ui::CardHeader {
                shared_ui::CardTitle { "{display.title}" }
                shared_ui::CardDescription { "{display.subtitle}" }
            }
            shared_ui::CardContent {
                div { class: "case-meta",
                    shared_ui::Badge {
                        variant: if display.status == "Closed" {
                            shared_ui::BadgeVariant::Secondary
                        } else {
                            shared_ui::BadgeVariant::Primary
                        },
                        "{display.status}"
                    }
                    span { class: "muted", "Filed {filed}" }
                    if case.claim_amount > 0.0 {
                        span { class: "muted", {format_rupees(case.claim_amount)} }
                    }
                    if let Some(score) = case.confidence_score {
                        span { class: "muted", "Winnability {score}%" }
                    }
                }

                if let Some(err) = pdf_error() {
                    div { class: "form-error", "{err}" }
                }

                if show_chat() {
                    ChatWindow { case_id }
                }
            }
            shared_ui::CardFooter {
                if let Some(href) = pdf_href() {
                    a { href: "{href}", download: "complaint-{case_id}.pdf",
                        shared_ui::Button {
                            variant: shared_ui::ButtonVariant::Secondary,
                            "Save PDF"
                        }
                    }
                } else {
                    shared_ui::Button {
                        variant: shared_ui::ButtonVariant::Outline,
                        disabled: pdf_busy(),
                        onclick: handle_pdf,
                        if pdf_busy() { "Preparing..." } else { "Complaint PDF" }
                    }
                }

                if has_lawyer {
                    shared_ui::Button {
                        variant: shared_ui::ButtonVariant::Ghost,
                        onclick: move |_| show_chat.toggle(),
                        if show_chat() { "Hide chat" } else { "Chat with your lawyer" }
                    }
                }
            }
        }
    }
}

/// Up to three recommended lawyers, matched to the latest case's category.
/// Empty directory or a failed fetch falls back to sample cards.
#[component]
fn RecommendationsPanel(
    category: String,
    engage_case: Option<Uuid>,
    on_engaged: EventHandler<()>,
) -> Element {
    let resource = use_server_future(move || {
        let category = category.clone();
        async move { server::api::recommended_lawyers(category).await }
    })?;

    let lawyers: Vec<LawyerProfile> = match resource.read().as_ref() {
        Some(Ok(list)) => list.clone(),
        Some(Err(_)) => Vec::new(),
        None => return rsx! { shared_ui::Skeleton { style: "height: 8rem;" } },
    };

    rsx! {
        section { class: "dashboard-section",
            h2 { "Recommended lawyers" }
            div { class: "dashboard-grid",
                if lawyers.is_empty() {
                    for card in sample_data::sample_lawyer_cards() {
                        RecommendationCard { key: "{card.name}", card, action: None }
                    }
                } else {
                    for lawyer in lawyers {
                        RecommendationCard {
                            key: "{lawyer.id}",
                            card: to_lawyer_card(&lawyer),
                            action: engage_case.map(|case_id| EngageAction {
                                case_id,
                                lawyer_id: lawyer.id,
                            }),
                            on_engaged,
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
struct EngageAction {
    case_id: Uuid,
    lawyer_id: i64,
}

#[component]
fn RecommendationCard(
    card: LawyerCard,
    action: Option<EngageAction>,
    on_engaged: Option<EventHandler<()>>,
) -> Element {
    let mut engaging = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_engage = move |_| async move {
        let Some(action) = action else { return };
        engaging.set(true);
        error_msg.set(None);
        match server::api::engage_lawyer(action.case_id, action.lawyer_id).await {
            Ok(true) => {
                if let Some(handler) = on_engaged {
                    handler.call(());
                }
            }
            Ok(false) => {
                error_msg.set(Some("That case already has a lawyer.".to_string()));
            }
            Err(e) => {
                error_msg.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        engaging.set(false);
    };

    rsx! {
        shared_ui::Card {
            shared_ui::CardContent {
                div { class: "lawyer-card-row",
                    img { class: "lawyer-card-avatar", src: "{card.avatar_url}", alt: "{card.name}" }
                    div {
                        p { class: "lawyer-card-name", "{card.name}" }
                        shared_ui::Badge {
                            variant: shared_ui::BadgeVariant::Secondary,
                            "{card.domain}"
                        }
                        p { class: "muted", "★ {card.rating}" }
                    }
                }
                if let Some(err) = error_msg() {
                    div { class: "form-error", "{err}" }
                }
            }
            if action.is_some() {
                shared_ui::CardFooter {
                    shared_ui::Button {
                        variant: shared_ui::ButtonVariant::Outline,
                        disabled: engaging(),
                        onclick: handle_engage,
                        if engaging() { "Requesting..." } else { "Request this lawyer" }
                    }
                }
            }
        }
    }
}
