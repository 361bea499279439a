//! Process-wide default messages for validation failures.
//!
//! Consumers may reword the stock messages once at startup, before any
//! validation runs; built-in validations resolve their default text from
//! this table at registration time.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Symbolic condition a default message is keyed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// A value failed a presence check.
    Blank,
    /// A value failed a consumer-defined check with no specific message.
    Invalid,
}

impl MessageKey {
    fn builtin(self) -> &'static str {
        match self {
            Self::Blank => "can't be blank",
            Self::Invalid => "is invalid",
        }
    }
}

fn overrides() -> &'static RwLock<HashMap<MessageKey, String>> {
    static TABLE: OnceLock<RwLock<HashMap<MessageKey, String>>> = OnceLock::new();
    TABLE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// The current default message for `key`, falling back to the built-in
/// text when no override was installed.
///
/// # Example
///
/// ```rust
/// use standin::{default_message, MessageKey};
///
/// assert_eq!(default_message(MessageKey::Blank), "can't be blank");
/// ```
pub fn default_message(key: MessageKey) -> String {
    let table = overrides().read().unwrap_or_else(PoisonError::into_inner);
    table
        .get(&key)
        .cloned()
        .unwrap_or_else(|| key.builtin().to_string())
}

/// Replace the default message for `key`, process-wide. Validations
/// registered afterwards pick up the new text.
pub fn set_default_message(key: MessageKey, message: impl Into<String>) {
    let mut table = overrides().write().unwrap_or_else(PoisonError::into_inner);
    table.insert(key, message.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_has_a_builtin_message() {
        assert_eq!(default_message(MessageKey::Blank), "can't be blank");
    }

    #[test]
    fn overrides_replace_the_builtin_text() {
        // Uses the Invalid key so parallel presence tests keep seeing the
        // stock Blank text.
        assert_eq!(default_message(MessageKey::Invalid), "is invalid");

        set_default_message(MessageKey::Invalid, "no good");
        assert_eq!(default_message(MessageKey::Invalid), "no good");
    }
}
