use super::{ListRequest, run_list};
use crate::app::App;
use crate::cli::StageAction;
use crate::error::Result;
use gateway_client::Filter;
use gateway_client::api::stages;

pub async fn execute(app: &App, action: StageAction) -> Result<()> {
    match action {
        StageAction::List { gateway_id, paging } => {
            run_list(
                app,
                stages::lister(&app.client),
                ListRequest {
                    title: format!("Stages of gateway {}", gateway_id),
                    context_id: gateway_id.to_string(),
                    filter: Filter::new(),
                    paging,
                    search_key: None,
                },
            )
            .await
        }
    }
}
