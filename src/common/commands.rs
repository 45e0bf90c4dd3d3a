/// Commands the presentation surface sends down to the chat service.
#[derive(Debug, Clone)]
pub enum ChatCommand {
    /// User-initiated send. `kind` is the message type tag (`"text"` or
    /// `"system"` from the UI buttons); `timestamp` controls whether the
    /// message gets a timestamp prefix.
    Send {
        kind: String,
        content: String,
        timestamp: bool,
    },
}
