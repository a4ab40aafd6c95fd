use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer-inner",
                span { class: "muted", "CourtMate — consumer grievances, filed with confidence." }
                nav { class: "site-footer-nav",
                    Link { class: "navbar-item", to: Route::About {}, "About" }
                    Link { class: "navbar-item", to: Route::Contact {}, "Contact" }
                    Link { class: "navbar-item", to: Route::LawyerLanding {}, "For Lawyers" }
                }
            }
        }
    }
}
