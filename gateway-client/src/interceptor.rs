//! Central handling of failed API requests.
//!
//! Every failure is classified by status code before it is handed back to the
//! caller:
//!
//! * `400` is logged with its payload and then takes the generic path.
//! * `401` either publishes [`ConsoleEvent::ShowLoginModal`] when the payload
//!   carries a login descriptor, or navigates to the login page. Nothing else
//!   happens for a 401.
//! * Anything else takes the generic path: a notification when the request
//!   opted in with `global_error`.
//!
//! The interceptor never absorbs an error; [`ErrorInterceptor::intercept`]
//! returns the original error for the caller to propagate.

use crate::error::RequestError;
use crate::events::{ConsoleEvent, EventBus, LoginRequired};
use crate::http::RequestConfig;
use crate::navigation::{login_redirect_url, Navigator};
use crate::notify::{Notification, Notifier};
use std::sync::Arc;

/// A failed request as seen by the interceptor
#[derive(Debug, Clone, PartialEq)]
pub struct RequestFailure {
    pub status: u16,
    pub error: RequestError,
}

impl RequestFailure {
    pub fn new(status: u16, error: RequestError) -> Self {
        Self { status, error }
    }
}

impl From<RequestError> for RequestFailure {
    fn from(error: RequestError) -> Self {
        Self {
            status: error.code,
            error,
        }
    }
}

/// Classifies failed requests and triggers the matching side effect
#[derive(Clone)]
pub struct ErrorInterceptor {
    login_url: String,
    events: EventBus,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ErrorInterceptor {
    pub fn new<S: Into<String>>(
        login_url: S,
        events: EventBus,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            login_url: login_url.into(),
            events,
            notifier,
            navigator,
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Handle a failed request and hand the original error back
    pub fn intercept(&self, failure: RequestFailure, config: &RequestConfig) -> RequestError {
        let RequestFailure { status, error } = failure;

        match status {
            400 => {
                tracing::error!(
                    code = error.code,
                    response = ?error.response,
                    "bad request: {}",
                    error.message
                );
            }
            401 => {
                self.handle_unauthorized(&error);
                return error;
            }
            _ => {}
        }

        if config.global_error {
            self.notifier.notify(Notification::error(error.message.clone()));
        }

        error
    }

    fn handle_unauthorized(&self, error: &RequestError) {
        let login = error
            .data()
            .and_then(|data| serde_json::from_value::<LoginRequired>(data.clone()).ok());

        match login {
            Some(login) => {
                tracing::info!("session expired, requesting login overlay");
                self.events.emit(ConsoleEvent::ShowLoginModal(login));
            }
            None => {
                let target = login_redirect_url(&self.login_url, &self.navigator.current_href());
                tracing::info!("session expired, redirecting to {}", target);
                self.navigator.navigate(&target);
            }
        }
    }
}
