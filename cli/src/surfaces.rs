use crate::ui;
use gateway_client::{ConsoleEvent, EventBus, Navigator, Notification, Notifier};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// Notifier printing to the terminal
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        ui::notification(notification.theme, &notification.message);
    }
}

/// Navigator that cannot leave the terminal, so it prints the target instead
pub struct TerminalNavigator {
    site_url: String,
}

impl TerminalNavigator {
    pub fn new<S: Into<String>>(site_url: S) -> Self {
        Self {
            site_url: site_url.into(),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn current_href(&self) -> String {
        self.site_url.clone()
    }

    fn navigate(&self, url: &str) {
        ui::login_prompt(url);
    }
}

/// Print the login prompt whenever the API asks for the login overlay
pub fn spawn_login_listener(events: &EventBus) -> JoinHandle<()> {
    let mut receiver = events.subscribe();
    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(ConsoleEvent::ShowLoginModal(login)) => {
                    ui::login_prompt(&login.login_plain_url);
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!("login listener skipped {} events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
