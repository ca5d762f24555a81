//! Message bundle backed by the `[messages]` config section.

use calc_core::{MessageBundle, MessageKey};

use crate::infrastructure::storage::config::MessagesConfig;

/// Serves configured message overrides, falling back to the built-in text
/// when an override is blank.
#[derive(Debug, Clone)]
pub struct ConfiguredMessageBundle {
    syntax_error: String,
}

impl ConfiguredMessageBundle {
    pub fn new(config: &MessagesConfig) -> Self {
        Self {
            syntax_error: config.syntax_error.trim().to_string(),
        }
    }
}

impl MessageBundle for ConfiguredMessageBundle {
    fn message(&self, key: MessageKey) -> String {
        let configured = match key {
            MessageKey::SyntaxError => &self.syntax_error,
        };
        if configured.is_empty() {
            key.default_text().to_string()
        } else {
            configured.clone()
        }
    }
}
