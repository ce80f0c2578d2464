use gateway_client::ListState;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::sync::watch;

/// Spinner shown while a list is loading
pub struct LoadingSpinner {
    bar: ProgressBar,
}

impl LoadingSpinner {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }
}

/// Wait until the list has no outstanding fetch, showing a spinner meanwhile
///
/// With `expect_change` set, the current state is treated as stale and the
/// wait only ends after at least one further update.
pub async fn wait_until_loaded<T: Clone>(
    receiver: &mut watch::Receiver<ListState<T>>,
    message: &str,
    expect_change: bool,
) -> ListState<T> {
    let _spinner = LoadingSpinner::new(message);
    let mut needs_change = expect_change;

    loop {
        if !needs_change {
            let state = receiver.borrow_and_update();
            if !state.loading {
                return state.clone();
            }
        }
        if receiver.changed().await.is_err() {
            return receiver.borrow().clone();
        }
        needs_change = false;
    }
}

impl Drop for LoadingSpinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
