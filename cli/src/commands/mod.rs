pub mod access_logs;
pub mod gateways;
pub mod init;
pub mod permissions;
pub mod plugins;
pub mod releases;
pub mod stages;

use crate::app::App;
use crate::cli::PagingArgs;
use crate::error::{Result, ResultExt};
use crate::pager;
use crate::progress::LoadingSpinner;
use crate::render::{TableRow, render_footer, render_table};
use crate::ui;
use gateway_client::{FETCH_ALL_PAGE_SIZE, Filter, ListController, ListFetcher, ListOptions};

/// A list command ready to run
pub struct ListRequest {
    pub title: String,
    pub context_id: String,
    pub filter: Filter,
    pub paging: PagingArgs,
    /// Filter key edited by the interactive search, if the list supports one
    pub search_key: Option<&'static str>,
}

/// Rows per page for the given paging flags
pub fn page_size(paging: &PagingArgs, default_limit: u64) -> u64 {
    if paging.all {
        FETCH_ALL_PAGE_SIZE
    } else {
        paging.limit.unwrap_or(default_limit).max(1)
    }
}

/// Show one page of a list, or browse it with `--interactive`
pub async fn run_list<T, F>(app: &App, fetcher: F, request: ListRequest) -> Result<()>
where
    T: TableRow + Clone + Send + Sync + 'static,
    F: ListFetcher<T> + 'static,
{
    let ListRequest {
        title,
        context_id,
        filter,
        paging,
        search_key,
    } = request;

    let options = ListOptions {
        limit: page_size(&paging, app.default_limit()),
        ..ListOptions::default()
    };
    let list = ListController::with_options(fetcher, context_id, Some(filter), options);
    let page = paging.page.saturating_sub(1);

    if paging.interactive && !paging.all {
        return pager::browse(list, &title, page, search_key).await;
    }

    let spinner = LoadingSpinner::new(&format!("Loading {}...", title.to_lowercase()));
    let result = list.handle_page_change(page).await;
    drop(spinner);
    result.with_context(|| format!("Failed to load {}", title.to_lowercase()))?;

    ui::section_header(&title);
    println!("{}", render_table(&list.rows()));
    if !paging.all {
        ui::info_message(&render_footer(&list.pagination()));
    }
    Ok(())
}
