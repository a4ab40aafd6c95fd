use dioxus::prelude::*;

/// Synthesize audio for a courtroom script. Gated on the `speech` feature
/// flag; returns raw audio bytes for client-side playback.
#[server]
pub async fn speak_script(script: String) -> Result<Vec<u8>, ServerFnError> {
    use crate::ai;
    use crate::api::auth::require_auth;
    use crate::config::feature_flags;
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;

    require_auth()?;

    if !feature_flags().speech {
        return Err(AppError::forbidden("Speech playback is not enabled").into_server_fn_error());
    }

    let script = script.trim().to_string();
    if script.is_empty() {
        return Err(AppError::bad_request("Nothing to speak").into_server_fn_error());
    }

    ai::synthesize_speech(&script)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}
