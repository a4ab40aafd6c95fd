use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaComments, FaFilePdf, FaScaleBalanced};
use dioxus_free_icons::Icon;
use shared_types::LEGAL_CATEGORIES;

use crate::auth::use_auth;
use crate::routes::Route;

/// Public landing page.
#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let logged_in = auth.is_authenticated();

    rsx! {
        section { class: "hero",
            Icon { icon: FaScaleBalanced, width: 48, height: 48, fill: "var(--cm-primary)" }
            h1 { "Your consumer grievance, heard." }
            p { class: "muted",
                "Describe what went wrong in your own words — any language. "
                "CourtMate classifies your complaint, estimates how winnable it is, "
                "and prepares the paperwork and the words to say before the forum."
            }
            div { class: "hero-actions",
                if logged_in {
                    Link { to: Route::FileCase {},
                        shared_ui::Button { "File a case" }
                    }
                } else {
                    Link { to: Route::Signup {},
                        shared_ui::Button { "Get started" }
                    }
                    Link { to: Route::Login {},
                        shared_ui::Button {
                            variant: shared_ui::ButtonVariant::Outline,
                            "Log in"
                        }
                    }
                }
            }
        }

        section { class: "category-grid",
            h2 { "What we handle" }
            div { class: "category-cards",
                for category in LEGAL_CATEGORIES.iter() {
                    shared_ui::Card { key: "{category}",
                        shared_ui::CardContent {
                            p { class: "category-name", "{category}" }
                        }
                    }
                }
            }
        }

        section { class: "how-it-works",
            h2 {
                Icon { icon: FaComments, width: 20, height: 20, fill: "currentColor" }
                " How it works"
            }
            ol {
                li { "Tell us what happened — type it, or upload the bill or notice you received." }
                li { "Fill in the defendant, the amount, and when it happened." }
                li { "Get a winnability score, the legal sections that apply, and a courtroom script." }
                li {
                    Icon { icon: FaFilePdf, width: 14, height: 14, fill: "currentColor" }
                    " Download the complaint as a ready-to-file PDF, or connect with a lawyer."
                }
            }
        }
    }
}
