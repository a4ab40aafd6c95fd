use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        shared_ui::PageHeader {
            shared_ui::PageTitle { "Contact" }
        }

        shared_ui::Card {
            shared_ui::CardContent {
                div { class: "prose",
                    p { "Questions, corrections, or a forum that should know about us?" }
                    p {
                        "Write to "
                        a { href: "mailto:support@courtmate.example", "support@courtmate.example" }
                        " and we will get back within two working days."
                    }
                    p { class: "muted",
                        "For anything urgent about an already-filed case, contact the "
                        "forum registry directly — CourtMate does not file on your behalf."
                    }
                }
            }
        }
    }
}
