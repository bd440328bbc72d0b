//! Opaque identifiers and the capability that mints them.

use serde::Serialize;
use std::fmt;

/// An opaque identity label.
///
/// It is compared and printed, never parsed. Uniqueness is the generator's promise;
/// nothing here checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UniqueId(Box<str>);

impl UniqueId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().into_boxed_str())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UniqueId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for UniqueId {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for UniqueId {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Produces a fresh [`UniqueId`] on every call.
///
/// Passed into every constructor that assigns an identifier, so tests can supply
/// deterministic tokens. Any `Fn() -> String` closure is a generator.
pub trait IdGenerator {
    fn generate(&self) -> UniqueId;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String,
{
    fn generate(&self) -> UniqueId {
        UniqueId::from(self())
    }
}
