use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        shared_ui::PageHeader {
            shared_ui::PageTitle { "About CourtMate" }
        }

        div { class: "prose",
            p {
                "Most consumer grievances never reach a forum. The forms are in the "
                "wrong language, the legal sections are opaque, and standing up in "
                "front of a bench without a script is terrifying."
            }
            p {
                "CourtMate walks you from a plain-language description of what "
                "happened to a classified, analyzed, ready-to-file complaint. It "
                "estimates how winnable your case is, cites the sections that apply, "
                "and writes out what to say. When a case is genuinely complex, it "
                "points you at lawyers who practice in that area instead."
            }
            p {
                "CourtMate prepares documents and suggestions from your own "
                "description. It is not a law firm and does not give legal advice."
            }
        }
    }
}
