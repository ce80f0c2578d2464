use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use gateway_client::api::access_logs::AccessLog;
use gateway_client::api::gateways::Gateway;
use gateway_client::api::permissions::PermissionApply;
use gateway_client::api::plugins::PluginBinding;
use gateway_client::api::releases::ReleaseHistory;
use gateway_client::api::stages::Stage;
use gateway_client::Pagination;

/// A record that can be shown as a table row
pub trait TableRow {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

/// Render rows as a table, or a placeholder line when empty
pub fn render_table<T: TableRow>(rows: &[T]) -> String {
    if rows.is_empty() {
        return "No data".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(T::headers());
    for row in rows {
        table.add_row(row.cells());
    }
    table.to_string()
}

/// One-line pagination summary, with pages counted from 1
pub fn render_footer(pagination: &Pagination) -> String {
    format!(
        "Page {} of {} ({} per page, {} total)",
        pagination.page + 1,
        pagination.total_pages().max(1),
        pagination.limit,
        pagination.count
    )
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

impl TableRow for Gateway {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Description", "Active", "Public", "Maintainers", "Updated"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            or_dash(Some(&self.description)),
            yes_no(self.is_active()),
            yes_no(self.is_public),
            self.maintainers.join(", "),
            or_dash(self.updated_time.as_deref()),
        ]
    }
}

impl TableRow for Stage {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Description", "Active", "Released version"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            or_dash(Some(&self.description)),
            yes_no(self.status == 1),
            or_dash(self.release_version.as_deref()),
        ]
    }
}

impl TableRow for ReleaseHistory {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Stages", "Version", "Status", "Comment", "By", "Created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.stage_names.join(", "),
            self.resource_version_display.clone(),
            or_dash(Some(&self.status)),
            or_dash(Some(&self.comment)),
            self.created_by.clone(),
            or_dash(self.created_time.as_deref()),
        ]
    }
}

impl TableRow for PluginBinding {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Code", "Name", "Scope", "Config"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.code.clone(),
            or_dash(Some(&self.name)),
            format!("{}:{}", self.scope_type, self.scope_id),
            self.config.to_string(),
        ]
    }
}

impl TableRow for PermissionApply {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "App", "Dimension", "Days", "Reason", "Applied by", "Created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.bk_app_code.clone(),
            self.grant_dimension.clone(),
            self.expire_days.to_string(),
            or_dash(Some(&self.reason)),
            self.applied_by.clone(),
            or_dash(self.created_time.as_deref()),
        ]
    }
}

impl TableRow for AccessLog {
    fn headers() -> Vec<&'static str> {
        vec!["Time", "Request ID", "Method", "Path", "Status", "App", "Duration (ms)", "Error"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.time()
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| self.timestamp.to_string()),
            self.request_id.clone(),
            self.method.clone(),
            self.http_path.clone(),
            self.status.to_string(),
            or_dash(Some(&self.app_code)),
            self.request_duration.to_string(),
            or_dash(Some(&self.error)),
        ]
    }
}
