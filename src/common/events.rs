use crate::common::types::ChatMessage;

/// Events delivered from the hub to the UI.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    Delivered(ChatMessage),
}
