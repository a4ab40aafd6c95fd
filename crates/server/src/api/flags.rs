use dioxus::prelude::*;
use shared_types::FeatureFlags;

/// Current feature flags, for client-side UI gating. The server functions
/// re-check flags themselves; this only controls what the UI offers.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    use crate::config::feature_flags;

    Ok(feature_flags().clone())
}
