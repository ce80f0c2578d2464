use crate::error::{ApiResult, RequestError};
use crate::list::filter::Filter;
use crate::pagination::{ListQuery, Pagination, DEFAULT_PAGE_SIZE};
use crate::traits::ListFetcher;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};

/// Which of several overlapping responses is applied to the list state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Only the response of the most recently issued fetch is applied
    #[default]
    LatestIssued,
    /// Every successful response is applied as it resolves; the last one to
    /// resolve wins
    LastResolved,
}

/// What happened to the response of a successful fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows and count were replaced
    Applied,
    /// A newer fetch was issued meanwhile; the response was discarded
    Superseded,
}

/// Observable state of a list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub pagination: Pagination,
    /// At least one fetch is outstanding
    pub loading: bool,
    /// Error of the most recent failed fetch, cleared by the next applied one
    pub last_error: Option<RequestError>,
}

impl<T> ListState<T> {
    fn new(limit: u64) -> Self {
        Self {
            rows: Vec::new(),
            pagination: Pagination::new(limit),
            loading: false,
            last_error: None,
        }
    }
}

/// Construction options for a [`ListController`]
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub limit: u64,
    pub ordering: ResponseOrdering,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            ordering: ResponseOrdering::default(),
        }
    }
}

struct Inner<T, F> {
    fetcher: F,
    context_id: String,
    filter: Option<Filter>,
    ordering: ResponseOrdering,
    state: watch::Sender<ListState<T>>,
    issued: AtomicU64,
    in_flight: AtomicUsize,
}

/// Pagination and rows of one list, kept in sync with a fetch function
///
/// Clones share state, so a mounted watcher and direct calls drive the same
/// list.
pub struct ListController<T, F> {
    inner: Arc<Inner<T, F>>,
}

impl<T, F> Clone for ListController<T, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, F> ListController<T, F>
where
    T: Clone + Send + Sync + 'static,
    F: ListFetcher<T> + 'static,
{
    /// Create a controller with the default page size and ordering
    pub fn new<S: Into<String>>(fetcher: F, context_id: S, filter: Option<Filter>) -> Self {
        Self::with_options(fetcher, context_id, filter, ListOptions::default())
    }

    pub fn with_options<S: Into<String>>(
        fetcher: F,
        context_id: S,
        filter: Option<Filter>,
        options: ListOptions,
    ) -> Self {
        let (state, _) = watch::channel(ListState::new(options.limit));
        Self {
            inner: Arc::new(Inner {
                fetcher,
                context_id: context_id.into(),
                filter,
                ordering: options.ordering,
                state,
                issued: AtomicU64::new(0),
                in_flight: AtomicUsize::new(0),
            }),
        }
    }

    pub fn context_id(&self) -> &str {
        &self.inner.context_id
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.inner.filter.as_ref()
    }

    pub fn rows(&self) -> Vec<T> {
        self.inner.state.borrow().rows.clone()
    }

    pub fn pagination(&self) -> Pagination {
        self.inner.state.borrow().pagination
    }

    pub fn loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    pub fn last_error(&self) -> Option<RequestError> {
        self.inner.state.borrow().last_error.clone()
    }

    pub fn snapshot(&self) -> ListState<T> {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<ListState<T>> {
        self.inner.state.subscribe()
    }

    /// Fetch the current page with the current filter
    ///
    /// On success the rows and count are replaced, unless the ordering policy
    /// discards the response. On failure the error is recorded and returned;
    /// rows are left untouched.
    pub async fn get_list(&self) -> ApiResult<FetchOutcome> {
        let seq = self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let (in_flight, pagination) = InFlight::start(&self.inner);

        let query = ListQuery {
            page: pagination.page,
            limit: pagination.limit,
            filters: self.inner.filter.as_ref().map(Filter::get).unwrap_or_else(Map::new),
        };
        tracing::debug!(
            context = %self.inner.context_id,
            seq,
            page = query.page,
            limit = query.limit,
            "fetching list"
        );

        let result = self.inner.fetcher.fetch(&self.inner.context_id, query).await;

        let mut outcome = FetchOutcome::Superseded;
        let current = self.is_current(seq);
        in_flight.finish(|state| {
            if !current {
                return;
            }
            match &result {
                Ok(page) => {
                    state.rows = page.results.clone();
                    state.pagination.count = page.count;
                    state.last_error = None;
                    outcome = FetchOutcome::Applied;
                }
                Err(error) => state.last_error = Some(error.clone()),
            }
        });

        if outcome == FetchOutcome::Superseded && result.is_ok() {
            tracing::debug!(context = %self.inner.context_id, seq, "discarding superseded response");
        }

        result.map(|_| outcome)
    }

    /// Move to `page` and fetch it
    pub async fn handle_page_change(&self, page: u64) -> ApiResult<FetchOutcome> {
        self.inner
            .state
            .send_modify(|state| state.pagination.page = page);
        self.get_list().await
    }

    /// Change the page size and fetch again; the page index is kept
    pub async fn handle_page_size_change(&self, limit: u64) -> ApiResult<FetchOutcome> {
        self.inner
            .state
            .send_modify(|state| state.pagination.limit = limit);
        self.get_list().await
    }

    /// Start watching: fetch now, then after every filter change
    ///
    /// The watcher stops when the returned [`MountedList`] is dropped.
    pub fn mount(&self) -> MountedList {
        let controller = self.clone();
        let changes = self.inner.filter.as_ref().map(Filter::subscribe);
        MountedList {
            task: tokio::spawn(controller.watch(changes)),
        }
    }

    async fn watch(self, changes: Option<watch::Receiver<Map<String, Value>>>) {
        let mut fetches = JoinSet::new();
        fetches.spawn(self.clone().fetch_in_background());

        let Some(mut changes) = changes else {
            while fetches.join_next().await.is_some() {}
            return;
        };

        loop {
            tokio::select! {
                changed = changes.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    changes.borrow_and_update();
                    fetches.spawn(self.clone().fetch_in_background());
                }
                Some(_) = fetches.join_next(), if !fetches.is_empty() => {}
            }
        }

        while fetches.join_next().await.is_some() {}
    }

    async fn fetch_in_background(self) {
        if let Err(error) = self.get_list().await {
            tracing::warn!(context = %self.inner.context_id, "list fetch failed: {}", error);
        }
    }

    fn is_current(&self, seq: u64) -> bool {
        match self.inner.ordering {
            ResponseOrdering::LatestIssued => self.inner.issued.load(Ordering::SeqCst) == seq,
            ResponseOrdering::LastResolved => true,
        }
    }
}

/// One outstanding fetch, counted in `in_flight` until finished or dropped
///
/// Dropping an unfinished guard happens when the fetch future is cancelled
/// (aborted watcher, timeout, `select!`); the count and `loading` are still
/// brought back down.
struct InFlight<'a, T, F> {
    inner: &'a Inner<T, F>,
    finished: bool,
}

impl<'a, T, F> InFlight<'a, T, F> {
    fn start(inner: &'a Inner<T, F>) -> (Self, Pagination) {
        let mut pagination = Pagination::default();
        inner.state.send_modify(|state| {
            inner.in_flight.fetch_add(1, Ordering::SeqCst);
            state.loading = true;
            pagination = state.pagination;
        });
        (
            Self {
                inner,
                finished: false,
            },
            pagination,
        )
    }

    /// Release the fetch and apply its result in the same state update
    fn finish(mut self, apply: impl FnOnce(&mut ListState<T>)) {
        self.finished = true;
        self.release(apply);
    }

    fn release(&self, apply: impl FnOnce(&mut ListState<T>)) {
        self.inner.state.send_modify(|state| {
            let remaining = self.inner.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
            state.loading = remaining > 0;
            apply(state);
        });
    }
}

impl<T, F> Drop for InFlight<'_, T, F> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!(context = %self.inner.context_id, "list fetch cancelled");
            self.release(|_| {});
        }
    }
}

/// A mounted list watcher; dropping it stops the watcher
pub struct MountedList {
    task: JoinHandle<()>,
}

impl MountedList {
    /// Stop watching; the watcher and its outstanding fetches are aborted on drop
    pub fn unmount(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for MountedList {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Page;
    use crate::testing::MockFetcher;
    use serde_json::json;
    use std::time::Duration;

    async fn wait_for_calls<T: Clone>(fetcher: &MockFetcher<T>, expected: usize) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while fetcher.call_count() < expected {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("fetcher was not called in time");
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn test_get_list_replaces_rows_and_count() {
        let fetcher = MockFetcher::new();
        fetcher.push(Ok(Page::new(vec![1, 2, 3], 30)));
        fetcher.push(Ok(Page::new(vec![4], 31)));
        let list = ListController::new(fetcher.clone(), "gw-1", None);

        assert_eq!(list.get_list().await.unwrap(), FetchOutcome::Applied);
        assert_eq!(list.rows(), vec![1, 2, 3]);
        assert_eq!(list.pagination().count, 30);

        list.get_list().await.unwrap();
        assert_eq!(list.rows(), vec![4]);
        assert_eq!(list.pagination().count, 31);
        assert!(!list.loading());
        assert_eq!(fetcher.calls()[0].0, "gw-1");
    }

    #[tokio::test]
    async fn test_query_merges_pagination_and_filter() {
        let fetcher: MockFetcher<u32> = MockFetcher::new();
        let filter = Filter::new();
        filter.set("kind", "http");
        let list = ListController::new(fetcher.clone(), "", Some(filter));

        list.handle_page_change(3).await.unwrap();

        let (_, query) = fetcher.calls().remove(0);
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(query.row_offset(), 30);
        assert_eq!(query.filters.get("kind"), Some(&json!("http")));
        assert_eq!(list.pagination().page, 3);
    }

    #[tokio::test]
    async fn test_page_size_change_keeps_page() {
        let fetcher: MockFetcher<u32> = MockFetcher::new();
        let list = ListController::new(fetcher.clone(), "", None);

        list.handle_page_change(2).await.unwrap();
        list.handle_page_size_change(50).await.unwrap();

        let pagination = list.pagination();
        assert_eq!(pagination.limit, 50);
        assert_eq!(pagination.page, 2);

        let (_, query) = fetcher.calls().pop().unwrap();
        assert_eq!(query.limit, 50);
        assert_eq!(query.page, 2);
        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_returned_and_rows_kept() {
        let fetcher = MockFetcher::new();
        fetcher.push(Ok(Page::new(vec!["a".to_string()], 1)));
        fetcher.push(Err(RequestError::new(500, "boom")));
        let list = ListController::new(fetcher, "", None);

        list.get_list().await.unwrap();
        let err = list.get_list().await.unwrap_err();

        assert_eq!(err.message, "boom");
        assert_eq!(list.rows(), vec!["a".to_string()]);
        assert_eq!(list.pagination().count, 1);
        assert!(!list.loading());
        assert_eq!(list.last_error(), Some(err));
    }

    #[tokio::test]
    async fn test_options_set_initial_limit() {
        let fetcher: MockFetcher<u32> = MockFetcher::new();
        let list = ListController::with_options(
            fetcher.clone(),
            "",
            None,
            ListOptions {
                limit: crate::pagination::FETCH_ALL_PAGE_SIZE,
                ..ListOptions::default()
            },
        );

        list.get_list().await.unwrap();
        assert_eq!(fetcher.calls()[0].1.limit, 10_000);
    }

    #[tokio::test]
    async fn test_loading_flag_tracks_outstanding_fetch() {
        let fetcher = MockFetcher::new();
        let release = fetcher.push_gated(Ok(Page::new(vec![1], 1)));
        let list = ListController::new(fetcher.clone(), "", None);

        let pending = tokio::spawn({
            let list = list.clone();
            async move { list.get_list().await }
        });
        wait_for_calls(&fetcher, 1).await;
        assert!(list.loading());

        release.send(()).unwrap();
        pending.await.unwrap().unwrap();
        assert!(!list.loading());
    }

    #[tokio::test]
    async fn test_unmount_during_fetch_clears_loading() {
        let fetcher = MockFetcher::new();
        let _release = fetcher.push_gated(Ok(Page::new(vec![1], 1)));
        let list = ListController::new(fetcher.clone(), "", Some(Filter::new()));

        let mounted = list.mount();
        wait_for_calls(&fetcher, 1).await;
        assert!(list.loading());

        mounted.unmount();
        settle().await;
        assert!(!list.loading());

        list.get_list().await.unwrap();
        assert!(!list.loading());
        assert!(list.rows().is_empty());
    }

    #[tokio::test]
    async fn test_timed_out_fetch_clears_loading() {
        let fetcher = MockFetcher::new();
        let _release = fetcher.push_gated(Ok(Page::new(vec![1], 1)));
        let list = ListController::new(fetcher.clone(), "", None);

        let timed_out = tokio::time::timeout(Duration::from_millis(20), list.get_list()).await;
        assert!(timed_out.is_err());
        assert!(!list.loading());

        assert_eq!(list.get_list().await.unwrap(), FetchOutcome::Applied);
        assert!(!list.loading());
    }

    #[tokio::test]
    async fn test_cancelled_fetch_keeps_other_fetch_loading() {
        let fetcher = MockFetcher::new();
        let _cancelled = fetcher.push_gated(Ok(Page::new(vec![1], 1)));
        let release = fetcher.push_gated(Ok(Page::new(vec![2], 1)));
        let list = ListController::new(fetcher.clone(), "", None);

        let cancelled = tokio::spawn({
            let list = list.clone();
            async move { list.get_list().await }
        });
        wait_for_calls(&fetcher, 1).await;
        let pending = tokio::spawn({
            let list = list.clone();
            async move { list.get_list().await }
        });
        wait_for_calls(&fetcher, 2).await;

        cancelled.abort();
        settle().await;
        assert!(list.loading());

        release.send(()).unwrap();
        pending.await.unwrap().unwrap();
        assert!(!list.loading());
        assert_eq!(list.rows(), vec![2]);
    }

    #[tokio::test]
    async fn test_mount_fetches_once() {
        let fetcher = MockFetcher::returning(Page::new(vec![1], 1));
        let list = ListController::new(fetcher.clone(), "", Some(Filter::new()));

        let mounted = list.mount();
        wait_for_calls(&fetcher, 1).await;
        settle().await;

        assert_eq!(fetcher.call_count(), 1);
        assert_eq!(list.rows(), vec![1]);
        assert!(!mounted.is_finished());
        drop(mounted);
    }

    #[tokio::test]
    async fn test_filter_changes_trigger_batched_fetch() {
        let fetcher: MockFetcher<u32> = MockFetcher::new();
        let filter = Filter::new();
        let list = ListController::new(fetcher.clone(), "", Some(filter.clone()));

        let _mounted = list.mount();
        wait_for_calls(&fetcher, 1).await;

        filter.set("kind", "http");
        filter.set("status", 1);
        wait_for_calls(&fetcher, 2).await;
        settle().await;
        assert_eq!(fetcher.call_count(), 2);

        let (_, query) = fetcher.calls().pop().unwrap();
        assert_eq!(query.filters.get("kind"), Some(&json!("http")));
        assert_eq!(query.filters.get("status"), Some(&json!(1)));

        filter.update(|map| {
            map.insert("labels".to_string(), json!({"env": {"name": "prod"}}));
        });
        wait_for_calls(&fetcher, 3).await;
    }

    #[tokio::test]
    async fn test_unchanged_filter_write_does_not_fetch() {
        let fetcher: MockFetcher<u32> = MockFetcher::new();
        let filter = Filter::new();
        filter.set("kind", "http");
        let list = ListController::new(fetcher.clone(), "", Some(filter.clone()));

        let _mounted = list.mount();
        wait_for_calls(&fetcher, 1).await;

        filter.set("kind", "http");
        settle().await;
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unmount_stops_watching() {
        let fetcher: MockFetcher<u32> = MockFetcher::new();
        let filter = Filter::new();
        let list = ListController::new(fetcher.clone(), "", Some(filter.clone()));

        let mounted = list.mount();
        wait_for_calls(&fetcher, 1).await;
        mounted.unmount();
        settle().await;

        filter.set("kind", "grpc");
        settle().await;
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mounted_failure_is_recorded() {
        let fetcher: MockFetcher<u32> = MockFetcher::failing(RequestError::new(503, "unavailable"));
        let list = ListController::new(fetcher.clone(), "", None);

        let mounted = list.mount();
        wait_for_calls(&fetcher, 1).await;
        settle().await;

        // without a filter there is nothing left to watch
        assert!(mounted.is_finished());
        assert_eq!(list.last_error().map(|e| e.code), Some(503));
        assert!(list.rows().is_empty());
    }

    async fn race(ordering: ResponseOrdering) -> Vec<u32> {
        let fetcher = MockFetcher::new();
        let release_a = fetcher.push_gated(Ok(Page::new(vec![1], 1)));
        let release_b = fetcher.push_gated(Ok(Page::new(vec![2], 1)));
        let filter = Filter::new();
        filter.set("x", 1);
        let list = ListController::with_options(
            fetcher.clone(),
            "",
            Some(filter.clone()),
            ListOptions {
                ordering,
                ..ListOptions::default()
            },
        );

        let fetch_a = tokio::spawn({
            let list = list.clone();
            async move { list.get_list().await }
        });
        wait_for_calls(&fetcher, 1).await;

        filter.set("x", 2);
        let fetch_b = tokio::spawn({
            let list = list.clone();
            async move { list.get_list().await }
        });
        wait_for_calls(&fetcher, 2).await;

        release_b.send(()).unwrap();
        let outcome_b = fetch_b.await.unwrap().unwrap();
        assert_eq!(outcome_b, FetchOutcome::Applied);
        release_a.send(()).unwrap();
        let outcome_a = fetch_a.await.unwrap().unwrap();

        let calls = fetcher.calls();
        assert_eq!(calls[0].1.filters.get("x"), Some(&json!(1)));
        assert_eq!(calls[1].1.filters.get("x"), Some(&json!(2)));

        match ordering {
            ResponseOrdering::LatestIssued => assert_eq!(outcome_a, FetchOutcome::Superseded),
            ResponseOrdering::LastResolved => assert_eq!(outcome_a, FetchOutcome::Applied),
        }
        assert!(!list.loading());
        list.rows()
    }

    #[tokio::test]
    async fn test_race_latest_issued_keeps_newest_request() {
        assert_eq!(race(ResponseOrdering::LatestIssued).await, vec![2]);
    }

    #[tokio::test]
    async fn test_race_last_resolved_keeps_last_response() {
        assert_eq!(race(ResponseOrdering::LastResolved).await, vec![1]);
    }

    #[tokio::test]
    async fn test_subscribers_see_state_changes() {
        let fetcher = MockFetcher::returning(Page::new(vec![7], 70));
        let list = ListController::new(fetcher, "", None);
        let mut rx = list.subscribe();

        list.get_list().await.unwrap();

        assert!(rx.has_changed().unwrap());
        let state = rx.borrow_and_update().clone();
        assert_eq!(state.rows, vec![7]);
        assert_eq!(state.pagination.count, 70);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_closure_fetcher() {
        let list: ListController<String, _> = ListController::new(
            |context: String, query: ListQuery| async move {
                Ok::<_, RequestError>(Page::new(vec![format!("{}:{}", context, query.page)], 1))
            },
            "gw-9",
            None,
        );

        list.handle_page_change(4).await.unwrap();
        assert_eq!(list.rows(), vec!["gw-9:4".to_string()]);
    }
}
