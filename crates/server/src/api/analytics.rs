use dioxus::prelude::*;
use shared_types::{AnalyticsSummary, HotspotBucket};

const HOTSPOT_LIMIT: i64 = 20;

/// Aggregated grievance hotspots, largest buckets first. Empty when the
/// analytics flag is off rather than an error, so pages degrade quietly.
#[server]
pub async fn grievance_hotspots() -> Result<Vec<HotspotBucket>, ServerFnError> {
    use crate::config::feature_flags;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;

    if !feature_flags().analytics {
        return Ok(Vec::new());
    }

    let pool = get_db().await;
    repo::analytics::hotspots(pool, HOTSPOT_LIMIT)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Headline numbers over all logged filing events.
#[server]
pub async fn analytics_summary() -> Result<AnalyticsSummary, ServerFnError> {
    use crate::config::feature_flags;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;

    if !feature_flags().analytics {
        return Ok(AnalyticsSummary {
            total_cases: 0,
            top_category: None,
            top_state: None,
        });
    }

    let pool = get_db().await;
    repo::analytics::summary(pool)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}
