use std::sync::Arc;

use tokio::sync::mpsc;

use crate::common::{ChatCommand, ChatMessage};
use crate::engine::hub::ChatHub;
use crate::session::SessionConfig;

/// Content substituted when the user sends a system message with no text.
pub const DEFAULT_SYSTEM_ALERT: &str = "Default system alert sent by user.";

/// Owns the send orchestration: receives commands from the presentation
/// surface, applies the blank-input rules, builds the message and hands it
/// to the hub. Runs until the command channel closes.
pub struct ChatService {
    hub: Arc<ChatHub>,
    session: SessionConfig,
    command_receiver: mpsc::Receiver<ChatCommand>,
}

impl ChatService {
    pub fn new(
        hub: Arc<ChatHub>,
        session: SessionConfig,
        command_receiver: mpsc::Receiver<ChatCommand>,
    ) -> Self {
        Self {
            hub,
            session,
            command_receiver,
        }
    }

    pub async fn run(mut self) {
        log::info!("Chat service started for {}", self.session.username());

        while let Some(command) = self.command_receiver.recv().await {
            match command {
                ChatCommand::Send {
                    kind,
                    content,
                    timestamp,
                } => self.send_user_message(&kind, &content, timestamp),
            }
        }

        log::info!("Chat service stopped");
    }

    /// A blank text message is dropped; a blank system message falls back
    /// to [`DEFAULT_SYSTEM_ALERT`]. The session username is the sender for
    /// everything the user sends.
    pub fn send_user_message(&self, kind: &str, raw_input: &str, timestamp: bool) {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() && kind == "text" {
            return;
        }
        let content = if trimmed.is_empty() && kind == "system" {
            DEFAULT_SYSTEM_ALERT
        } else {
            trimmed
        };

        let mut message = ChatMessage::create(kind, self.session.username(), content);
        if timestamp {
            message = message.with_timestamp();
        }
        self.hub.send_message(message);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::engine::hub::{DeliveryError, HubListener};

    struct Recorder {
        seen: Arc<Mutex<Vec<ChatMessage>>>,
    }

    impl HubListener for Recorder {
        fn on_message(&self, message: &ChatMessage) -> Result<(), DeliveryError> {
            self.seen.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    fn service_with_recorder(username: &str) -> (ChatService, Arc<Mutex<Vec<ChatMessage>>>) {
        let hub = Arc::new(ChatHub::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        hub.attach(Box::new(Recorder { seen: seen.clone() }));

        let session = SessionConfig::builder().username(username).build();
        let (_cmd_tx, cmd_rx) = mpsc::channel(1);
        (ChatService::new(hub, session, cmd_rx), seen)
    }

    #[test]
    fn blank_text_input_is_a_no_op() {
        let (service, seen) = service_with_recorder("Alice");
        service.send_user_message("text", "   ", true);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn blank_system_input_gets_default_alert() {
        let (service, seen) = service_with_recorder("Alice");
        service.send_user_message("system", "", false);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].render().contains(DEFAULT_SYSTEM_ALERT));
    }

    #[test]
    fn text_send_uses_session_username() {
        let (service, seen) = service_with_recorder("Alice");
        service.send_user_message("text", " hello ", false);

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].render(), "Alice: hello");
    }

    #[test]
    fn unknown_kind_falls_back_silently() {
        let (service, seen) = service_with_recorder("Alice");
        service.send_user_message("voice", "hi", false);

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].render(), "Alice: Error: Unknown message type.");
    }

    #[test]
    fn timestamp_flag_decorates_the_message() {
        let (service, seen) = service_with_recorder("Alice");
        service.send_user_message("text", "hello", true);

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].decorations().len(), 1);
    }
}
