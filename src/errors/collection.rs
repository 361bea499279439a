//! Per-record error storage keyed by attribute.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Key an error message is recorded under: one attribute, or the record
/// as a whole.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    /// Sentinel for errors about the whole record rather than one attribute.
    Base,
    /// A single named attribute.
    Attribute(String),
}

impl ErrorKey {
    /// The key's identifier: `"base"` for the sentinel, otherwise the
    /// attribute name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Base => "base",
            Self::Attribute(name) => name,
        }
    }
}

impl From<&str> for ErrorKey {
    fn from(name: &str) -> Self {
        Self::Attribute(name.to_string())
    }
}

impl From<String> for ErrorKey {
    fn from(name: String) -> Self {
        Self::Attribute(name)
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Turn an attribute identifier into display form: underscores become
/// spaces and the first letter is capitalized.
///
/// # Example
///
/// ```rust
/// use standin::errors::humanize;
///
/// assert_eq!(humanize("foo_bar"), "Foo bar");
/// assert_eq!(humanize("email"), "Email");
/// ```
pub fn humanize(identifier: &str) -> String {
    let spaced = identifier.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

/// Ordered collection of validation error messages for one record.
///
/// Keys appear only once at least one message was recorded for them; a key
/// never maps to an empty list. Messages for one key keep their add order,
/// and keys keep the order their first message arrived in.
///
/// # Example
///
/// ```rust
/// use standin::ErrorCollection;
///
/// let mut errors = ErrorCollection::new();
/// errors.add_to_base("bad thing");
/// errors.add("foo", "is bad");
///
/// let full = errors.full_messages();
/// assert!(full.contains(&"bad thing".to_string()));
/// assert!(full.contains(&"Foo is bad".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ErrorCollection {
    messages: IndexMap<ErrorKey, Vec<String>>,
}

impl ErrorCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `key`, appending if the key already has
    /// messages.
    pub fn add(&mut self, key: impl Into<ErrorKey>, message: impl Into<String>) {
        self.messages
            .entry(key.into())
            .or_default()
            .push(message.into());
    }

    /// Record a message against the record as a whole.
    pub fn add_to_base(&mut self, message: impl Into<String>) {
        let key = ErrorKey::Base;
        self.messages.entry(key).or_default().push(message.into());
    }

    /// Messages recorded against `key`, in add order. Empty when the key
    /// has no errors.
    pub fn messages_for(&self, key: impl Into<ErrorKey>) -> &[String] {
        match self.messages.get(&key.into()) {
            Some(messages) => messages,
            None => &[],
        }
    }

    /// Messages recorded against the whole record.
    pub fn on_base(&self) -> &[String] {
        match self.messages.get(&ErrorKey::Base) {
            Some(messages) => messages,
            None => &[],
        }
    }

    /// Display form of every message: base messages verbatim, attribute
    /// messages prefixed with the humanized attribute name.
    pub fn full_messages(&self) -> Vec<String> {
        self.messages
            .iter()
            .flat_map(|(key, messages)| {
                messages.iter().map(move |message| match key {
                    ErrorKey::Base => message.clone(),
                    ErrorKey::Attribute(name) => format!("{} {}", humanize(name), message),
                })
            })
            .collect()
    }

    /// Whether no errors have been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of keys with at least one message. Note this counts keys,
    /// not messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Drop every recorded error.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Every (key, message) pair, attribute-major: all of one key's
    /// messages before the next key's.
    pub fn iter(&self) -> impl Iterator<Item = (&ErrorKey, &str)> {
        self.messages.iter().flat_map(|(key, messages)| {
            messages.iter().map(move |message| (key, message.as_str()))
        })
    }
}
