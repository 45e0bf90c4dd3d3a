use rand::Rng;

const DEFAULT_THEME: &str = "Light Mode";

/// Per-run identity and display configuration. Built once at startup and
/// cloned into whatever needs it; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    username: String,
    theme: String,
}

impl SessionConfig {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }
}

/// Fluent accumulator for [`SessionConfig`]. Defaulting happens at `build`:
/// a missing or blank username becomes `Guest-NNN`, a missing theme becomes
/// `"Light Mode"`. The builder can be reused; each `build` re-applies the
/// defaults against its current state.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    username: Option<String>,
    theme: Option<String>,
}

impl SessionBuilder {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn build(&self) -> SessionConfig {
        let username = match &self.username {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Guest-{}", rand::thread_rng().gen_range(0..1000)),
        };
        let theme = self
            .theme
            .clone()
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        SessionConfig { username, theme }
    }
}
