use crate::error::{CliError, Result};
use crate::progress::{LoadingSpinner, wait_until_loaded};
use crate::render::{TableRow, render_footer, render_table};
use crate::ui;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use gateway_client::{ApiResult, FetchOutcome, ListController, ListFetcher, ListState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagerAction {
    Next,
    Previous,
    Search,
    PageSize,
    Refresh,
    Quit,
}

impl PagerAction {
    fn label(&self) -> &'static str {
        match self {
            Self::Next => "Next page",
            Self::Previous => "Previous page",
            Self::Search => "Search",
            Self::PageSize => "Change page size",
            Self::Refresh => "Refresh",
            Self::Quit => "Quit",
        }
    }
}

fn available_actions<T>(state: &ListState<T>, searchable: bool) -> Vec<PagerAction> {
    let mut actions = Vec::new();
    if state.pagination.has_next() {
        actions.push(PagerAction::Next);
    }
    if state.pagination.page > 0 {
        actions.push(PagerAction::Previous);
    }
    if searchable {
        actions.push(PagerAction::Search);
    }
    actions.extend([PagerAction::PageSize, PagerAction::Refresh, PagerAction::Quit]);
    actions
}

/// Browse a list interactively until the user quits
///
/// The list is mounted for the duration of the session, so searches go
/// through the filter and are fetched by the list's own watcher.
pub async fn browse<T, F>(
    list: ListController<T, F>,
    title: &str,
    start_page: u64,
    search_key: Option<&'static str>,
) -> Result<()>
where
    T: TableRow + Clone + Send + Sync + 'static,
    F: ListFetcher<T> + 'static,
{
    let mut states = list.subscribe();
    let _mounted = list.mount();
    let mut state = wait_until_loaded(&mut states, "Loading...", true).await;
    check_login(&state)?;

    if start_page > 0 {
        apply(list.handle_page_change(start_page)).await?;
        state = list.snapshot();
    }

    loop {
        ui::section_header(title);
        println!("{}", render_table(&state.rows));
        ui::info_message(&render_footer(&state.pagination));

        let actions = available_actions(&state, search_key.is_some());
        let labels: Vec<&'static str> = actions.iter().map(PagerAction::label).collect();
        let choice = prompt(move || {
            Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Action")
                .items(&labels)
                .default(0)
                .interact()
        })
        .await?;

        let page = state.pagination.page;
        match actions[choice] {
            PagerAction::Next => apply(list.handle_page_change(page + 1)).await?,
            PagerAction::Previous => apply(list.handle_page_change(page.saturating_sub(1))).await?,
            PagerAction::Refresh => apply(list.get_list()).await?,
            PagerAction::PageSize => {
                let current = state.pagination.limit;
                let limit: u64 = prompt(move || {
                    Input::with_theme(&ColorfulTheme::default())
                        .with_prompt("Rows per page")
                        .default(current)
                        .validate_with(|value: &u64| {
                            if *value == 0 { Err("must be at least 1") } else { Ok(()) }
                        })
                        .interact_text()
                })
                .await?;
                apply(list.handle_page_size_change(limit)).await?;
            }
            PagerAction::Search => {
                let (Some(key), Some(filter)) = (search_key, list.filter()) else {
                    continue;
                };
                let current = filter
                    .get()
                    .get(key)
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                let text: String = prompt(move || {
                    Input::with_theme(&ColorfulTheme::default())
                        .with_prompt("Search (empty to clear)")
                        .with_initial_text(current)
                        .allow_empty(true)
                        .interact_text()
                })
                .await?;

                states.borrow_and_update();
                let changed = if text.trim().is_empty() {
                    filter.remove(key)
                } else {
                    filter.set(key, text.trim())
                };
                if changed {
                    let searched = wait_until_loaded(&mut states, "Searching...", true).await;
                    check_login(&searched)?;
                }
            }
            PagerAction::Quit => break,
        }

        state = list.snapshot();
    }

    Ok(())
}

/// Run a page action with a spinner
///
/// Failures were already reported by the client's notifier; only an expired
/// session ends the session.
async fn apply<Fut>(action: Fut) -> Result<()>
where
    Fut: std::future::Future<Output = ApiResult<FetchOutcome>>,
{
    let spinner = LoadingSpinner::new("Loading...");
    let result = action.await;
    drop(spinner);

    match result {
        Err(err) if err.code == 401 => Err(err.into()),
        Err(err) => {
            tracing::debug!("page action failed: {}", err);
            Ok(())
        }
        Ok(_) => Ok(()),
    }
}

fn check_login<T>(state: &ListState<T>) -> Result<()> {
    match &state.last_error {
        Some(err) if err.code == 401 => Err(err.clone().into()),
        _ => Ok(()),
    }
}

async fn prompt<R, P>(interact: P) -> Result<R>
where
    R: Send + 'static,
    P: FnOnce() -> dialoguer::Result<R> + Send + 'static,
{
    tokio::task::spawn_blocking(interact)
        .await
        .map_err(|e| CliError::Message(format!("Prompt failed: {}", e)))?
        .map_err(Into::into)
}
