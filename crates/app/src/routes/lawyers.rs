use dioxus::prelude::*;
use shared_types::{AppError, LawyerProfile};

use crate::auth::use_auth;
use crate::routes::Route;

/// Public lawyer directory with name/practice-area search. Consulting a
/// lawyer opens a pending case with them and lands on the dashboard.
#[component]
pub fn LawyerDirectory() -> Element {
    let resource = use_server_future(move || async move { server::api::list_lawyers().await })?;
    let mut query = use_signal(String::new);

    let lawyers = resource.read().as_ref().cloned();

    rsx! {
        shared_ui::PageHeader {
            shared_ui::PageTitle { "Find a lawyer" }
        }

        div { class: "lawyer-search",
            shared_ui::Input {
                placeholder: "Search by name or practice area...",
                value: query(),
                on_input: move |evt: FormEvent| query.set(evt.value()),
            }
        }

        match lawyers {
            None => rsx! {
                div { class: "lawyer-grid",
                    for i in 0..6 {
                        shared_ui::Skeleton { key: "{i}", style: "height: 8rem;" }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                div { class: "form-error",
                    {AppError::friendly_message(&e.to_string())}
                }
            },
            Some(Ok(list)) => {
                let filtered = filter_lawyers(&list, &query());
                if filtered.is_empty() {
                    rsx! {
                        p { class: "muted",
                            if list.is_empty() {
                                "No lawyers have joined the directory yet. Check back soon."
                            } else {
                                "No lawyers match your search."
                            }
                        }
                    }
                } else {
                    rsx! {
                        div { class: "lawyer-grid",
                            for lawyer in filtered {
                                LawyerDirectoryCard { key: "{lawyer.id}", lawyer: lawyer.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Case-insensitive match on name or practice area. Blank query keeps all.
fn filter_lawyers(list: &[LawyerProfile], query: &str) -> Vec<LawyerProfile> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return list.to_vec();
    }
    list.iter()
        .filter(|l| {
            l.name.to_lowercase().contains(&needle)
                || l.domain_or_general().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
fn LawyerDirectoryCard(lawyer: LawyerProfile) -> Element {
    let auth = use_auth();
    let logged_in = auth.is_authenticated();
    let lawyer_id = lawyer.id;
    let avatar = lawyer.avatar_url();
    let domain = lawyer.domain_or_general().to_string();

    let mut requesting = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_consult = move |_| async move {
        requesting.set(true);
        error_msg.set(None);
        match server::api::request_consultation(lawyer_id).await {
            Ok(_) => {
                navigator().push(Route::Profile {});
            }
            Err(e) => {
                error_msg.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        requesting.set(false);
    };

    rsx! {
        shared_ui::Card {
            shared_ui::CardContent {
                div { class: "lawyer-card-row",
                    img { class: "lawyer-card-avatar", src: "{avatar}", alt: "{lawyer.name}" }
                    div {
                        p { class: "lawyer-card-name", "{lawyer.name}" }
                        shared_ui::Badge {
                            variant: shared_ui::BadgeVariant::Secondary,
                            "{domain}"
                        }
                        if let Some(phone) = lawyer.phone.as_ref() {
                            p { class: "muted", "{phone}" }
                        }
                        p { class: "muted", "{lawyer.email}" }
                    }
                }
                if let Some(err) = error_msg() {
                    div { class: "form-error", "{err}" }
                }
            }
            shared_ui::CardFooter {
                if logged_in {
                    shared_ui::Button {
                        disabled: requesting(),
                        onclick: handle_consult,
                        if requesting() { "Requesting..." } else { "Consult" }
                    }
                } else {
                    Link { to: Route::Login {},
                        shared_ui::Button {
                            variant: shared_ui::ButtonVariant::Outline,
                            "Log in to consult"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lawyer(id: i64, name: &str, domain: Option<&str>) -> LawyerProfile {
        LawyerProfile {
            id,
            name: name.to_string(),
            email: format!("l{id}@example.com"),
            domain: domain.map(str::to_string),
            phone: None,
        }
    }

    #[test]
    fn blank_query_keeps_everyone() {
        let list = vec![lawyer(1, "Kavya Rao", None), lawyer(2, "Rohan Desai", None)];
        assert_eq!(filter_lawyers(&list, "   ").len(), 2);
    }

    #[test]
    fn matches_name_case_insensitively() {
        let list = vec![lawyer(1, "Kavya Rao", None), lawyer(2, "Rohan Desai", None)];
        let hits = filter_lawyers(&list, "kavya");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn matches_practice_area_including_general_fallback() {
        let list = vec![
            lawyer(1, "Kavya Rao", Some("Medical Negligence")),
            lawyer(2, "Rohan Desai", None),
        ];
        assert_eq!(filter_lawyers(&list, "negligence")[0].id, 1);
        assert_eq!(filter_lawyers(&list, "general")[0].id, 2);
    }
}
