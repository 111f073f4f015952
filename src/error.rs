//! Error types for TimeMachine
//!
//! The search core is total; these errors only come from the surfaces around it
//! (terminal, window, browser, clipboard, output encoding).

use thiserror::Error;

/// Main error type for TimeMachine operations
#[derive(Error, Debug)]
pub enum TimeMachineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("GUI error: {0}")]
    Gui(String),

    #[error("Failed to open '{link}': {source}")]
    OpenLink {
        link: String,
        source: std::io::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for TimeMachine operations
pub type Result<T> = std::result::Result<T, TimeMachineError>;

impl TimeMachineError {
    /// Create a terminal error with context
    pub fn terminal(context: &str, err: impl std::fmt::Display) -> Self {
        TimeMachineError::Terminal(format!("{}: {}", context, err))
    }

    /// Check if this error is recoverable (the interactive view keeps running)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TimeMachineError::OpenLink { .. } | TimeMachineError::Clipboard(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_and_clipboard_failures_are_recoverable() {
        let open = TimeMachineError::OpenLink {
            link: "https://openai.com/research".to_string(),
            source: std::io::Error::other("no browser"),
        };
        assert!(open.is_recoverable());
        assert!(TimeMachineError::Clipboard("busy".into()).is_recoverable());
        assert!(!TimeMachineError::Gui("no display".into()).is_recoverable());
    }

    #[test]
    fn open_link_message_names_the_link() {
        let err = TimeMachineError::OpenLink {
            link: "https://openai.com/research".to_string(),
            source: std::io::Error::other("no browser"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to open 'https://openai.com/research': no browser"
        );
    }
}
