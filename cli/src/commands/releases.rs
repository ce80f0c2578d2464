use super::{ListRequest, run_list};
use crate::app::App;
use crate::cli::ReleaseAction;
use crate::error::{Result, ResultExt};
use crate::ui;
use gateway_client::Filter;
use gateway_client::api::releases::{self, PublishRequest};

pub async fn execute(app: &App, action: ReleaseAction) -> Result<()> {
    match action {
        ReleaseAction::List { gateway_id, paging } => {
            run_list(
                app,
                releases::lister(&app.client),
                ListRequest {
                    title: format!("Release history of gateway {}", gateway_id),
                    context_id: gateway_id.to_string(),
                    filter: Filter::new(),
                    paging,
                    search_key: Some("keyword"),
                },
            )
            .await
        }
        ReleaseAction::Publish {
            gateway_id,
            stage,
            resource_version,
            comment,
        } => {
            let request = PublishRequest {
                stage_id: stage,
                resource_version_id: resource_version,
                comment,
            };
            ui::status_message(&format!(
                "Publishing version {} to stage {}",
                resource_version, stage
            ));
            let history = releases::publish_release(&app.client, gateway_id, &request)
                .await
                .with_context(|| format!("Failed to publish to stage {}", stage))?;

            ui::success_message(&format!(
                "Published {} (release {}, {})",
                history.resource_version_display, history.id, history.status
            ));
            Ok(())
        }
    }
}
