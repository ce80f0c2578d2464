use super::{ListRequest, run_list};
use crate::app::App;
use crate::cli::PermissionAction;
use crate::error::{Result, ResultExt};
use crate::ui;
use gateway_client::Filter;
use gateway_client::api::permissions::{self, ApprovalRequest, ApprovalStatus};

pub async fn execute(app: &App, action: PermissionAction) -> Result<()> {
    match action {
        PermissionAction::List {
            gateway_id,
            app_code,
            paging,
        } => {
            let filter = Filter::new();
            if let Some(app_code) = app_code {
                filter.set("bk_app_code", app_code);
            }
            run_list(
                app,
                permissions::lister(&app.client),
                ListRequest {
                    title: format!("Permission requests of gateway {}", gateway_id),
                    context_id: gateway_id.to_string(),
                    filter,
                    paging,
                    search_key: Some("bk_app_code"),
                },
            )
            .await
        }
        PermissionAction::Approve {
            gateway_id,
            ids,
            reject,
            comment,
        } => {
            let status = if reject {
                ApprovalStatus::Rejected
            } else {
                ApprovalStatus::Approved
            };
            let request = ApprovalRequest {
                ids: ids.clone(),
                status,
                comment,
            };
            permissions::approve_permission_applies(&app.client, gateway_id, &request)
                .await
                .with_context(|| "Failed to update permission requests")?;

            let verb = if reject { "Rejected" } else { "Approved" };
            ui::success_message(&format!("{} {} request(s)", verb, ids.len()));
            Ok(())
        }
    }
}
