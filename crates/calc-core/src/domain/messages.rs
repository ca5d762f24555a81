//! Localised user-facing messages.

/// Keys of the messages the display layer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Generic message shown for any failed or cancelled calculation.
    SyntaxError,
}

impl MessageKey {
    /// Stable identifier used in message tables and config files.
    pub fn id(self) -> &'static str {
        match self {
            Self::SyntaxError => "syntax_error",
        }
    }

    /// Built-in English text.
    pub fn default_text(self) -> &'static str {
        match self {
            Self::SyntaxError => "Error",
        }
    }
}

/// Source of localised strings.
pub trait MessageBundle: Send + Sync {
    fn message(&self, key: MessageKey) -> String;
}

/// Bundle that always returns the built-in English text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl MessageBundle for DefaultMessages {
    fn message(&self, key: MessageKey) -> String {
        key.default_text().to_string()
    }
}
