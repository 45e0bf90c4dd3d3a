use std::sync::Mutex;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::common::{ChatEvent, ChatMessage};

/// Failure to hand a message to a listener.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("event channel closed")]
    ChannelClosed,
}

/// Receives every message the hub broadcasts. Callbacks run synchronously
/// on the sending task and must not block significantly.
pub trait HubListener: Send {
    fn on_message(&self, message: &ChatMessage) -> Result<(), DeliveryError>;
}

/// In-process broadcast hub. One instance per running application,
/// constructed at startup and injected wherever messages are sent.
///
/// The listener list is append-only and kept in registration order; a
/// failing listener is logged and skipped so the remaining listeners still
/// receive the message.
pub struct ChatHub {
    listeners: Mutex<Vec<Box<dyn HubListener>>>,
}

impl ChatHub {
    pub fn new() -> Self {
        log::info!("Chat hub initialized");
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn attach(&self, listener: Box<dyn HubListener>) {
        self.listeners
            .lock()
            .expect("listener list lock poisoned")
            .push(listener);
    }

    /// Broadcasts synchronously to every listener, in registration order,
    /// on the calling task. Never blocks the sender and never drops a
    /// message; there is no queueing or retry.
    pub fn send_message(&self, message: ChatMessage) {
        let listeners = self.listeners.lock().expect("listener list lock poisoned");
        for listener in listeners.iter() {
            if let Err(err) = listener.on_message(&message) {
                log::warn!("Listener rejected message {}: {err}", message.id);
            }
        }
    }
}

impl Default for ChatHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Production listener: clones each delivered message onto the UI event
/// channel. The channel is unbounded, so the hub's fan-out never blocks.
pub struct EventForwarder {
    event_sender: mpsc::UnboundedSender<ChatEvent>,
}

impl EventForwarder {
    pub fn new(event_sender: mpsc::UnboundedSender<ChatEvent>) -> Self {
        Self { event_sender }
    }
}

impl HubListener for EventForwarder {
    fn on_message(&self, message: &ChatMessage) -> Result<(), DeliveryError> {
        self.event_sender
            .send(ChatEvent::Delivered(message.clone()))
            .map_err(|_| DeliveryError::ChannelClosed)
    }
}

/// Logs every delivered message; used by the headless mode.
pub struct LogListener;

impl HubListener for LogListener {
    fn on_message(&self, message: &ChatMessage) -> Result<(), DeliveryError> {
        log::info!("{}", message.render());
        Ok(())
    }
}
