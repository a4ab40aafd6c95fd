use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { class: "muted", "No page at /{route.join(\"/\")}" }
            Link { to: Route::Landing {},
                shared_ui::Button { "Back to home" }
            }
        }
    }
}
