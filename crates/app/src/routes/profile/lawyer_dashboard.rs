use dioxus::prelude::*;
use shared_types::{
    split_lawyer_board, to_case_display, CaseDisplay, CaseRecord, HotspotBucket, LawyerProfile,
    LAWYER_DISPLAY_RATING,
};

use super::sample_data;
use crate::components::ChatWindow;
use crate::format_helpers::{format_date_human, initials};

/// The lawyer's board: active cases, new requests, and chat with clients.
/// Activity and hearings panels carry fixed sample content.
#[component]
pub fn LawyerDashboard(profile: LawyerProfile) -> Element {
    let board_resource =
        use_server_future(move || async move { server::api::lawyer_case_board().await })?;

    let board: Option<Vec<CaseRecord>> = match board_resource.read().as_ref() {
        None => None,
        Some(Ok(list)) => Some(list.clone()),
        Some(Err(_)) => Some(Vec::new()),
    };

    let avatar_initials = initials(&profile.name);
    let domain = profile.domain_or_general().to_string();
    let lawyer_id = profile.id;

    rsx! {
        shared_ui::PageHeader {
            div { class: "lawyer-header",
                shared_ui::Avatar {
                    shared_ui::AvatarFallback { "{avatar_initials}" }
                }
                div {
                    shared_ui::PageTitle { "{profile.name}" }
                    div { class: "lawyer-header-meta",
                        shared_ui::Badge {
                            variant: shared_ui::BadgeVariant::Secondary,
                            "{domain}"
                        }
                        span { class: "muted", "★ {LAWYER_DISPLAY_RATING}" }
                    }
                }
            }
        }

        match board {
            None => rsx! {
                div { class: "dashboard-grid",
                    for i in 0..3 {
                        shared_ui::Skeleton { key: "{i}", style: "height: 10rem;" }
                    }
                }
            },
            Some(records) => {
                let displays: Vec<CaseDisplay> = records.iter().map(to_case_display).collect();
                let (board_cases, requests) = split_lawyer_board(displays);
                let my_cases: Vec<&CaseRecord> = records
                    .iter()
                    .filter(|c| c.assigned_lawyer_id == Some(lawyer_id))
                    .collect();

                rsx! {
                    section { class: "dashboard-section",
                        h2 { "New requests" }
                        if requests.is_empty() {
                            p { class: "muted", "No new requests right now." }
                        } else {
                            div { class: "dashboard-grid",
                                for case in requests.iter() {
                                    BoardCaseCard { key: "{case.id}", case: case.clone() }
                                }
                            }
                        }
                    }

                    section { class: "dashboard-section",
                        h2 { "Case board" }
                        if board_cases.is_empty() {
                            p { class: "muted", "Nothing on the board yet." }
                        } else {
                            div { class: "dashboard-grid",
                                for case in board_cases.iter() {
                                    BoardCaseCard { key: "{case.id}", case: case.clone() }
                                }
                            }
                        }
                    }

                    if !my_cases.is_empty() {
                        section { class: "dashboard-section",
                            h2 { "Client conversations" }
                            div { class: "dashboard-grid",
                                for case in my_cases {
                                    ClientChatCard {
                                        key: "{case.id}",
                                        case: (*case).clone(),
                                    }
                                }
                            }
                        }
                    }

                    GrievanceInsights {}

                    div { class: "dashboard-split",
                        section { class: "dashboard-section",
                            h2 { "Recent activity" }
                            ul { class: "activity-list",
                                for line in sample_data::sample_activity() {
                                    li { key: "{line}", "{line}" }
                                }
                            }
                        }
                        section { class: "dashboard-section",
                            h2 { "Upcoming hearings" }
                            ul { class: "activity-list",
                                for (matter, date) in sample_data::sample_hearings() {
                                    li { key: "{matter}",
                                        span { "{matter}" }
                                        span { class: "muted", {format_date_human(date)} }
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

/// Where grievances are being filed, from the analytics log. The panel stays
/// hidden entirely when analytics is off or nothing has been logged yet.
#[component]
fn GrievanceInsights() -> Element {
    let summary_resource =
        use_server_future(move || async move { server::api::analytics_summary().await })?;
    let hotspots_resource =
        use_server_future(move || async move { server::api::grievance_hotspots().await })?;

    let summary = match summary_resource.read().as_ref() {
        Some(Ok(s)) => s.clone(),
        Some(Err(_)) => return rsx! {},
        None => return rsx! { shared_ui::Skeleton { style: "height: 6rem;" } },
    };
    if summary.total_cases == 0 {
        return rsx! {};
    }

    let hotspots: Vec<HotspotBucket> = match hotspots_resource.read().as_ref() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        section { class: "dashboard-section",
            h2 { "Grievance hotspots" }
            div { class: "stat-row",
                shared_ui::Card {
                    shared_ui::CardContent {
                        p { class: "stat-value", "{summary.total_cases}" }
                        p { class: "stat-label", "Grievances logged" }
                    }
                }
                if let Some(category) = summary.top_category {
                    shared_ui::Card {
                        shared_ui::CardContent {
                            p { class: "stat-value", "{category}" }
                            p { class: "stat-label", "Top category" }
                        }
                    }
                }
                if let Some(state) = summary.top_state {
                    shared_ui::Card {
                        shared_ui::CardContent {
                            p { class: "stat-value", "{state}" }
                            p { class: "stat-label", "Top state" }
                        }
                    }
                }
            }
            if !hotspots.is_empty() {
                ul { class: "activity-list",
                    for bucket in hotspots.iter().take(5) {
                        li { key: "{bucket.legal_category}-{bucket.city}",
                            span { "{bucket.legal_category} in {bucket.city}, {bucket.state}" }
                            span { class: "muted", "{bucket.count} filed" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BoardCaseCard(case: CaseDisplay) -> Element {
    let filed = format_date_human(&case.filed_on);

    rsx! {
        shared_ui::Card {
            shared_ui::CardHeader {
                shared_ui::CardTitle { "{case.title}" }
                shared_ui::CardDescription { "{case.subtitle}" }
            }
            shared_ui::CardContent {
                div { class: "case-meta",
                    shared_ui::Badge { "{case.status}" }
                    span { class: "muted", "Filed {filed}" }
                }
            }
        }
    }
}

#[component]
fn ClientChatCard(case: CaseRecord) -> Element {
    let display = to_case_display(&case);
    let case_id = case.id;
    let mut show_chat = use_signal(|| false);

    rsx! {
        shared_ui::Card {
            shared_ui::CardHeader {
                shared_ui::CardTitle { "{display.title}" }
            }
            shared_ui::CardContent {
                if show_chat() {
                    ChatWindow { case_id }
                }
            }
            shared_ui::CardFooter {
                shared_ui::Button {
                    variant: shared_ui::ButtonVariant::Ghost,
                    onclick: move |_| show_chat.toggle(),
                    if show_chat() { "Hide chat" } else { "Open chat" }
                }
            }
        }
    }
}
