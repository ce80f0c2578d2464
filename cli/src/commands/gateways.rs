use super::{ListRequest, run_list};
use crate::app::App;
use crate::cli::GatewayAction;
use crate::error::{Result, ResultExt};
use crate::render::render_table;
use crate::ui;
use dialoguer::{Confirm, theme::ColorfulTheme};
use gateway_client::Filter;
use gateway_client::api::gateways;

pub async fn execute(app: &App, action: GatewayAction) -> Result<()> {
    match action {
        GatewayAction::List { name, paging } => {
            let filter = Filter::new();
            if let Some(name) = name {
                filter.set("name", name);
            }
            run_list(
                app,
                gateways::lister(&app.client),
                ListRequest {
                    title: "Gateways".to_string(),
                    context_id: String::new(),
                    filter,
                    paging,
                    search_key: Some("name"),
                },
            )
            .await
        }
        GatewayAction::Get { id } => {
            let gateway = gateways::get_gateway(&app.client, id)
                .await
                .with_context(|| format!("Failed to load gateway {}", id))?;

            ui::section_header(&format!("Gateway {}", gateway.name));
            println!("{}", render_table(std::slice::from_ref(&gateway)));
            ui::info_message(&format!("Created by {}", or_unknown(&gateway.created_by)));
            Ok(())
        }
        GatewayAction::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Delete gateway {}?", id))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ui::info_message("Aborted");
                    return Ok(());
                }
            }

            gateways::delete_gateway(&app.client, id)
                .await
                .with_context(|| format!("Failed to delete gateway {}", id))?;
            ui::success_message(&format!("Deleted gateway {}", id));
            Ok(())
        }
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() { "unknown" } else { value }
}
