use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod components;
pub mod format_helpers;
mod routes;

use auth::AuthState;
use routes::Route;

const THEME_CSS: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();

        // Warm the shared pool and run migrations before serving traffic.
        server::db::get_db().await;

        // Grievance uploads can carry scanned documents (default 20 MB cap).
        let max_body: usize = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20 * 1024 * 1024);

        let router = dioxus::server::router(App)
            .layer(axum::extract::DefaultBodyLimit::max(max_body))
            .layer(axum::middleware::from_fn(
                server::auth::middleware::auth_middleware,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "page-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
