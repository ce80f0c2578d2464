use crate::error::{ApiResult, RequestError};
use crate::navigation::Navigator;
use crate::notify::{Notification, Notifier};
use crate::pagination::{ListQuery, Page};
use crate::traits::ListFetcher;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Notifier that keeps every notification it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Navigator with a fixed location that records navigation targets
#[derive(Debug)]
pub struct RecordingNavigator {
    href: String,
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new<S: Into<String>>(href: S) -> Self {
        Self {
            href: href.into(),
            visited: Mutex::new(Vec::new()),
        }
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_href(&self) -> String {
        self.href.clone()
    }

    fn navigate(&self, url: &str) {
        self.visited.lock().unwrap().push(url.to_string());
    }
}

struct Scripted<T> {
    result: ApiResult<Page<T>>,
    release: Option<oneshot::Receiver<()>>,
}

struct MockState<T> {
    calls: Vec<(String, ListQuery)>,
    script: VecDeque<Scripted<T>>,
    fallback: ApiResult<Page<T>>,
}

/// Scripted list fetcher
///
/// Calls consume scripted results in order and fall back to a fixed result
/// once the script is exhausted. Gated results only resolve after their
/// release sender fires, which lets tests choose the order in which
/// overlapping fetches complete.
pub struct MockFetcher<T> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T> Clone for MockFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone> MockFetcher<T> {
    /// Fetcher returning an empty page until scripted otherwise
    pub fn new() -> Self {
        Self::returning(Page::new(Vec::new(), 0))
    }

    /// Fetcher returning `page` for every unscripted call
    pub fn returning(page: Page<T>) -> Self {
        Self::with_fallback(Ok(page))
    }

    /// Fetcher failing with `error` for every unscripted call
    pub fn failing(error: RequestError) -> Self {
        Self::with_fallback(Err(error))
    }

    fn with_fallback(fallback: ApiResult<Page<T>>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                calls: Vec::new(),
                script: VecDeque::new(),
                fallback,
            })),
        }
    }

    /// Script the result of the next call
    pub fn push(&self, result: ApiResult<Page<T>>) {
        self.state.lock().unwrap().script.push_back(Scripted {
            result,
            release: None,
        });
    }

    /// Script the result of the next call, held until the returned sender fires
    pub fn push_gated(&self, result: ApiResult<Page<T>>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.lock().unwrap().script.push_back(Scripted {
            result,
            release: Some(rx),
        });
        tx
    }

    pub fn calls(&self) -> Vec<(String, ListQuery)> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }
}

impl<T: Clone> Default for MockFetcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListFetcher<T> for MockFetcher<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn fetch(&self, context_id: &str, query: ListQuery) -> ApiResult<Page<T>> {
        let step = {
            let mut state = self.state.lock().unwrap();
            state.calls.push((context_id.to_string(), query));
            match state.script.pop_front() {
                Some(step) => step,
                None => Scripted {
                    result: state.fallback.clone(),
                    release: None,
                },
            }
        };

        if let Some(release) = step.release {
            let _ = release.await;
        }

        step.result
    }
}
