//! Notification state for the navigator

/// Placeholder messages produced by confirm actions, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationLog {
    messages: Vec<String>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Most recent message
    pub fn latest(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
