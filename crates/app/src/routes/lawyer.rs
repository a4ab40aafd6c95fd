use dioxus::prelude::*;

use crate::routes::Route;

/// Landing page pitched at lawyers.
#[component]
pub fn LawyerLanding() -> Element {
    rsx! {
        section { class: "hero",
            h1 { "Clients who already did the paperwork." }
            p { class: "muted",
                "CourtMate sends you consumer cases that have been classified, "
                "analyzed, and documented before they reach your desk. You see the "
                "grievance, the claimed amount, and the winnability estimate up front."
            }
            div { class: "hero-actions",
                Link { to: Route::LawyerSignup {},
                    shared_ui::Button { "Join the directory" }
                }
                Link { to: Route::LawyerLogin {},
                    shared_ui::Button {
                        variant: shared_ui::ButtonVariant::Outline,
                        "Lawyer login"
                    }
                }
            }
        }

        section { class: "how-it-works",
            h2 { "What you get" }
            ul {
                li { "A case board of new consumer grievances in your practice area." }
                li { "Structured case files: category, sections, precedents, claim amount." }
                li { "In-app chat with the complainant once you take a case." }
            }
        }
    }
}
