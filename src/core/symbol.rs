//! Slot identifiers and symbols
//!
//! Both are opaque labels supplied by the puzzle definition. They must be
//! typeable as a single command token, so they may not be empty or contain
//! whitespace.

use std::fmt;

/// Error type for invalid identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentError {
    #[error("identifier must not be empty")]
    Empty,
    #[error("identifier \"{0}\" must not contain whitespace")]
    Whitespace(String),
}

fn validate(text: String) -> Result<String, IdentError> {
    if text.is_empty() {
        return Err(IdentError::Empty);
    }
    if text.chars().any(char::is_whitespace) {
        return Err(IdentError::Whitespace(text));
    }
    Ok(text)
}

/// A value that can be placed into a slot (a "utility" on the panel)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol
    ///
    /// # Errors
    /// Returns `IdentError` if the text is empty or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use panel_repair::core::Symbol;
    ///
    /// let relay = Symbol::new("relay").unwrap();
    /// assert_eq!(relay.as_str(), "relay");
    ///
    /// assert!(Symbol::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, IdentError> {
        validate(text.into()).map(Self)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies one position in the sequence (a "chip" on the panel)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(String);

impl SlotId {
    /// Create a new slot identifier
    ///
    /// # Errors
    /// Returns `IdentError` if the text is empty or contains whitespace.
    pub fn new(text: impl Into<String>) -> Result<Self, IdentError> {
        validate(text.into()).map(Self)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
