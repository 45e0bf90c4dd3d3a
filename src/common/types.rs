use chrono::Local;
use uuid::Uuid;

/// Sender name stamped on every system message.
pub const SYSTEM_SENDER: &str = "SYSTEM";

/// Content substituted when a message is created with an unknown type tag.
pub const UNKNOWN_TYPE_FALLBACK: &str = "Error: Unknown message type.";

/// Base variant of a chat utterance. Closed set: a message is either
/// user-originated plain text or infrastructure-originated system text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Plain { sender: String, content: String },
    System { content: String },
}

impl MessageBody {
    fn base_text(&self) -> String {
        match self {
            MessageBody::Plain { sender, content } => format!("{sender}: {content}"),
            MessageBody::System { content } => format!("[{SYSTEM_SENDER}] {content}"),
        }
    }
}

/// Composable text transform applied on top of the base text at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// Prepends `[HH:MM:SS]` read from the local wall clock when `render`
    /// is called, not when the decoration was added.
    Timestamp,
}

impl Decoration {
    fn apply(&self, inner: String) -> String {
        match self {
            Decoration::Timestamp => {
                format!("[{}] {inner}", Local::now().format("%H:%M:%S"))
            }
        }
    }
}

/// Domain model for one chat message. Body and decorations are fixed at
/// construction; decorations only affect the rendered text.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    body: MessageBody,
    decorations: Vec<Decoration>,
}

impl ChatMessage {
    fn new(body: MessageBody) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            body,
            decorations: Vec::new(),
        }
    }

    pub fn plain(sender: &str, content: &str) -> Self {
        Self::new(MessageBody::Plain {
            sender: sender.to_string(),
            content: content.to_string(),
        })
    }

    pub fn system(content: &str) -> Self {
        Self::new(MessageBody::System {
            content: content.to_string(),
        })
    }

    /// Builds a message from a type tag, compared case-insensitively.
    /// `"system"` ignores the sender argument; an unrecognized tag silently
    /// falls back to a plain message carrying [`UNKNOWN_TYPE_FALLBACK`].
    pub fn create(type_tag: &str, sender: &str, content: &str) -> Self {
        if type_tag.eq_ignore_ascii_case("text") {
            Self::plain(sender, content)
        } else if type_tag.eq_ignore_ascii_case("system") {
            Self::system(content)
        } else {
            Self::plain(sender, UNKNOWN_TYPE_FALLBACK)
        }
    }

    /// Adds a timestamp prefix to the rendered text. Applying it again
    /// nests another prefix.
    pub fn with_timestamp(mut self) -> Self {
        self.decorations.push(Decoration::Timestamp);
        self
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn sender(&self) -> &str {
        match &self.body {
            MessageBody::Plain { sender, .. } => sender,
            MessageBody::System { .. } => SYSTEM_SENDER,
        }
    }

    pub fn content(&self) -> &str {
        match &self.body {
            MessageBody::Plain { content, .. } | MessageBody::System { content } => content,
        }
    }

    /// Display text: base text plus every decoration, most recently added
    /// decoration leftmost.
    pub fn render(&self) -> String {
        self.decorations
            .iter()
            .fold(self.body.base_text(), |text, decoration| {
                decoration.apply(text)
            })
    }
}
