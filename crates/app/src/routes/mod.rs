pub mod about;
pub mod contact;
pub mod file_case;
pub mod landing;
pub mod lawyer;
pub mod lawyer_login;
pub mod lawyer_signup;
pub mod lawyers;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod signup;

use dioxus::prelude::*;

use crate::auth::use_auth;

use about::About;
use contact::Contact;
use file_case::FileCase;
use landing::Landing;
use lawyer::LawyerLanding;
use lawyer_login::LawyerLogin;
use lawyer_signup::LawyerSignup;
use lawyers::LawyerDirectory;
use login::Login;
use not_found::NotFound;
use profile::Profile;
use signup::Signup;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Landing {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/lawyerlogin")]
    LawyerLogin {},
    #[route("/lawyersignup")]
    LawyerSignup {},
    #[route("/lawyer")]
    LawyerLanding {},
    #[route("/lawyers")]
    LawyerDirectory {},
    #[layout(AuthGuard)]
    #[route("/file-case")]
    FileCase {},
    #[route("/profile")]
    Profile {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout. Redirects to /login if not authenticated.
///
/// Uses `use_server_future` with `?` so the component suspends during SSR
/// until the auth check completes; the `SuspenseBoundary` in `App` shows the
/// loading state in the meantime.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "page-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "page-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Shared layout: top navbar, routed content, footer.
#[component]
fn AppLayout() -> Element {
    let mut auth = use_auth();
    let logged_in = auth.is_authenticated();

    let handle_logout = move |_| async move {
        if let Err(e) = server::api::logout().await {
            tracing::warn!("logout failed: {e}");
        }
        auth.clear_auth();
        navigator().push(Route::Landing {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        shared_ui::Navbar {
            Link { class: "brand", to: Route::Landing {},
                span { class: "brand-name", "CourtMate" }
            }
            nav { class: "navbar-nav",
                Link { class: "navbar-item", to: Route::Landing {}, "Home" }
                Link { class: "navbar-item", to: Route::About {}, "About" }
                Link { class: "navbar-item", to: Route::LawyerDirectory {}, "Find a Lawyer" }
                Link { class: "navbar-item", to: Route::Contact {}, "Contact" }
                if logged_in {
                    Link { class: "navbar-item", to: Route::FileCase {}, "File a Case" }
                    Link { class: "navbar-item", to: Route::Profile {}, "My Dashboard" }
                    shared_ui::Button {
                        variant: shared_ui::ButtonVariant::Ghost,
                        onclick: handle_logout,
                        "Log out"
                    }
                } else {
                    Link { class: "navbar-item", to: Route::Login {}, "Log in" }
                    Link { class: "navbar-item", to: Route::Signup {}, "Sign up" }
                }
            }
        }

        main { class: "page-main",
            Outlet::<Route> {}
        }

        crate::components::Footer {}
    }
}
