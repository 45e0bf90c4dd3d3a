use crate::common::{ChatMessage, MessageBody};
use crate::session::SessionConfig;

/// Style class of a transcript line, decided by the message body variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStyle {
    System,
    OwnText,
    OtherText,
}

/// One transcript line, rendered once at delivery.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub text: String,
    pub style: EntryStyle,
}

/// Local UI state.
pub struct AppState {
    pub transcript: Vec<TranscriptEntry>,
    pub input_text: String,
    pub include_timestamp: bool,
    pub session: SessionConfig,
}

impl AppState {
    pub fn new(session: SessionConfig, include_timestamp: bool) -> Self {
        Self {
            transcript: vec![TranscriptEntry {
                text: "--- Chat Session Started ---".to_string(),
                style: EntryStyle::OtherText,
            }],
            input_text: String::new(),
            include_timestamp,
            session,
        }
    }

    pub fn push_message(&mut self, message: &ChatMessage) {
        let style = self.classify(message);
        self.transcript.push(TranscriptEntry {
            text: message.render(),
            style,
        });
    }

    fn classify(&self, message: &ChatMessage) -> EntryStyle {
        match message.body() {
            MessageBody::System { .. } => EntryStyle::System,
            MessageBody::Plain { sender, .. } if sender == self.session.username() => {
                EntryStyle::OwnText
            }
            MessageBody::Plain { .. } => EntryStyle::OtherText,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_for(username: &str) -> AppState {
        let session = SessionConfig::builder().username(username).build();
        AppState::new(session, true)
    }

    #[test]
    fn transcript_starts_with_banner() {
        let state = state_for("Alice");
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].text, "--- Chat Session Started ---");
    }

    #[test]
    fn styles_follow_body_variant_and_sender() {
        let mut state = state_for("Alice");
        state.push_message(&ChatMessage::system("notice"));
        state.push_message(&ChatMessage::plain("Alice", "mine"));
        state.push_message(&ChatMessage::plain("Bob", "theirs"));

        let styles: Vec<_> = state.transcript[1..].iter().map(|e| e.style).collect();
        assert_eq!(
            styles,
            vec![EntryStyle::System, EntryStyle::OwnText, EntryStyle::OtherText]
        );
    }

    #[test]
    fn decorated_messages_classify_by_inner_body() {
        let mut state = state_for("Alice");
        state.push_message(&ChatMessage::system("notice").with_timestamp());
        assert_eq!(state.transcript[1].style, EntryStyle::System);
    }
}
