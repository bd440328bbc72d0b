//! # Logger
//!
//! Installs the global `tracing` subscriber: a console `fmt` layer (compact or JSON)
//! filtered by an [`EnvFilter`]. `RUST_LOG` still wins over the programmatic default.
//!
//! ```rust
//! use conf_kernel::logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder().name("conf").level(LevelFilter::DEBUG).init().unwrap();
//! ```

use conf_domain::config::LoggingConfig;
use private::Sealed;
use std::borrow::Cow;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub use tracing::level_filters::LevelFilter;

/// Errors that can occur during logger initialization.
#[conf_derive::conf_error]
pub enum LoggerError {
    /// Occurs if a global tracing subscriber has already been initialized in the current process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// Invalid configuration supplied to the logger builder.
    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
struct LoggerSettings {
    level: LevelFilter,
    env_filter: Option<String>,
    json: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self { level: LevelFilter::INFO, env_filter: None, json: false }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    settings: LoggerSettings,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name reported by the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { settings: self.settings, name: WithName(name.into()) }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `conf_people=trace`).
    ///
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    /// Switches the console output to JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    /// Applies the `logging` config section on top of the current settings.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] if `level` is not a valid level name.
    pub fn with_config(mut self, config: &LoggingConfig) -> Result<Self, LoggerError> {
        self.settings.level =
            config.level.parse().map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid level '{}': {e}", config.level).into(),
                context: Some("logging.level".into()),
            })?;
        self.settings.env_filter.clone_from(&config.env_filter);
        self.settings.json = config.json;
        Ok(self)
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name or a bad filter.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        let env_filter = build_env_filter(&self.settings)?;
        let console = layer().with_target(true);
        let console = if self.settings.json {
            console.json().boxed()
        } else {
            console.compact().with_ansi(true).boxed()
        };

        tracing_subscriber::registry().with(env_filter).with(console).try_init()?;
        tracing::debug!(logger = %name, "Logging initialized");

        Ok(Logger { name })
    }
}

/// A handle to the initialized logging system.
#[must_use]
#[derive(Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: LoggerSettings::default(), name: NoName }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn build_env_filter(settings: &LoggerSettings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    settings.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_initial_state() {
        let builder = Logger::builder().name("conf-test").env_filter("conf_people=debug");
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert_eq!(builder.settings.env_filter.as_deref(), Some("conf_people=debug"));
        assert!(!builder.settings.json);
    }

    #[test]
    fn config_section_overrides_settings() {
        let config = LoggingConfig {
            level: "trace".to_owned(),
            env_filter: Some("conf_people=trace".to_owned()),
            json: true,
        };
        let builder = Logger::builder().name("conf-test").with_config(&config).unwrap();

        assert_eq!(builder.settings.level, LevelFilter::TRACE);
        assert_eq!(builder.settings.env_filter.as_deref(), Some("conf_people=trace"));
        assert!(builder.settings.json);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = LoggingConfig { level: "loud".to_owned(), ..LoggingConfig::default() };
        let err = Logger::builder().name("conf-test").with_config(&config).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn invalid_env_filter_is_rejected_before_install() {
        let settings = LoggerSettings {
            env_filter: Some("conf_people=notalevel".to_owned()),
            ..LoggerSettings::default()
        };
        assert!(build_env_filter(&settings).is_err());
    }
}
