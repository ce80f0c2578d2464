use super::{ListRequest, run_list};
use crate::app::App;
use crate::cli::PluginAction;
use crate::error::Result;
use gateway_client::Filter;
use gateway_client::api::plugins;

pub async fn execute(app: &App, action: PluginAction) -> Result<()> {
    match action {
        PluginAction::List {
            gateway_id,
            code,
            paging,
        } => {
            let filter = Filter::new();
            if let Some(code) = code {
                filter.set("code", code);
            }
            run_list(
                app,
                plugins::lister(&app.client),
                ListRequest {
                    title: format!("Plugin bindings of gateway {}", gateway_id),
                    context_id: gateway_id.to_string(),
                    filter,
                    paging,
                    search_key: Some("code"),
                },
            )
            .await
        }
    }
}
