//! Process-wide publish/subscribe channel for console events
//!
//! The HTTP layer publishes here instead of reaching into UI code; any number
//! of listeners may subscribe.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Capacity of the event channel before slow subscribers start lagging
pub const EVENT_BUS_CAPACITY: usize = 64;

/// Login overlay descriptor sent by the API when a session has expired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequired {
    pub width: u32,
    pub height: u32,
    pub login_url: String,
    pub login_plain_url: String,
}

/// Events published on the console event bus
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEvent {
    /// Ask a listener to render the login overlay
    ShowLoginModal(LoginRequired),
}

impl ConsoleEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShowLoginModal(_) => "show-login-modal",
        }
    }
}

/// Broadcast event bus shared by the client and its listeners
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ConsoleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUS_CAPACITY);
        Self { sender }
    }

    /// Publish an event, returning how many listeners received it
    pub fn emit(&self, event: ConsoleEvent) -> usize {
        let name = event.name();
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::debug!("no listeners for event {}", name);
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
