use super::{ListRequest, run_list};
use crate::app::App;
use crate::cli::PagingArgs;
use crate::error::Result;
use chrono::{Duration, Utc};
use gateway_client::Filter;
use gateway_client::api::access_logs;

/// Widest search window accepted by `--since-minutes` (30 days)
pub const MAX_SINCE_MINUTES: i64 = 30 * 24 * 60;

/// Search the access logs of one stage over a window ending now
pub async fn execute(
    app: &App,
    gateway_id: u64,
    stage: u64,
    query: Option<String>,
    since_minutes: i64,
    paging: PagingArgs,
) -> Result<()> {
    run_list(
        app,
        access_logs::lister(&app.client),
        ListRequest {
            title: format!("Access logs of gateway {}", gateway_id),
            context_id: gateway_id.to_string(),
            filter: log_filter(stage, query, since_minutes),
            paging,
            search_key: Some("query"),
        },
    )
    .await
}

fn log_filter(stage: u64, query: Option<String>, since_minutes: i64) -> Filter {
    let filter = Filter::new();
    filter.set("stage_id", stage);
    if let Some(query) = query.filter(|q| !q.trim().is_empty()) {
        filter.set("query", query);
    }

    let end = Utc::now();
    let start = end - Duration::minutes(since_minutes.clamp(1, MAX_SINCE_MINUTES));
    access_logs::set_time_range(&filter, start, end);
    filter
}
