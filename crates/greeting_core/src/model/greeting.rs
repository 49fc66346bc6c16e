//! Greeting value object.
//!
//! # Responsibility
//! - Hold one `(id, content)` pair returned by the greeting endpoint.
//! - Render the stable `Greetings{...}` text form.
//!
//! # Invariants
//! - Fields are fixed at construction; there are no setters.
//! - Equality and hashing are structural over both fields.
//! - Construction never validates or rejects input.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Immutable greeting payload.
///
/// Serialized as `{"id": <number>, "content": "<string>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Greeting {
    id: i64,
    content: String,
}

impl Greeting {
    /// Creates a greeting holding exactly the given values.
    ///
    /// Any `id` (negative and zero included) and any `content` (empty
    /// included) are accepted.
    pub fn new(id: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Returns the id given at construction.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the content given at construction.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consumes the greeting and returns its fields.
    pub fn into_parts(self) -> (i64, String) {
        (self.id, self.content)
    }
}

impl From<(i64, String)> for Greeting {
    fn from((id, content): (i64, String)) -> Self {
        Self::new(id, content)
    }
}

impl From<Greeting> for (i64, String) {
    fn from(value: Greeting) -> Self {
        value.into_parts()
    }
}

// Content is written verbatim: quotes and braces are not escaped.
impl Display for Greeting {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Greetings{{id={}, content='{}'}}", self.id, self.content)
    }
}
