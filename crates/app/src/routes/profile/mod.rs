mod lawyer_dashboard;
pub(crate) mod sample_data;
mod user_dashboard;

use dioxus::prelude::*;
use shared_types::SessionRole;

use crate::auth::use_session_role;
use lawyer_dashboard::LawyerDashboard;
use user_dashboard::UserDashboard;

/// Role-branched dashboard. The AuthGuard layout has already resolved the
/// session by the time this mounts; the role decides which dashboard renders.
#[component]
pub fn Profile() -> Element {
    let role = use_session_role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        match role {
            SessionRole::Lawyer(profile) => rsx! {
                LawyerDashboard { profile }
            },
            SessionRole::User => rsx! {
                UserDashboard {}
            },
        }
    }
}
