use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level configuration shared across the conference crates.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConfConfigInner {
    pub identifiers: IdentifierConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ConfConfig {
    #[serde(flatten, default)]
    inner: Arc<ConfConfigInner>,
}

impl Deref for ConfConfig {
    type Target = ConfConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ConfConfig {
    fn deref_mut(&mut self) -> &mut ConfConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Opaque identifier generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    /// Number of characters per identifier.
    pub length: usize,
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra module directives, e.g. `conf_people=trace`.
    pub env_filter: Option<String>,
    pub json: bool,
}

// --- Default ---

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self { length: 12 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), env_filter: None, json: false }
    }
}
