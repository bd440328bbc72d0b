use crate::config::ConfigError;
use conf_domain::config::IdentifierConfig;
use conf_domain::identity::{IdGenerator, UniqueId};

const DEFAULT_LENGTH: usize = 12;

/// [`IdGenerator`] backed by `safe_nanoid!`.
///
/// Stateless, so a single instance can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NanoIdGenerator {
    length: usize,
}

impl NanoIdGenerator {
    /// Shortest identifier accepted. At 55 symbols, 8 characters still give ~46 bits.
    pub const MIN_LENGTH: usize = 8;

    /// Longest identifier accepted. `nanoid` overflows on very large sizes.
    pub const MAX_LENGTH: usize = 128;

    /// Creates a generator for identifiers of `length` characters.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if `length` is outside
    /// [`Self::MIN_LENGTH`]..=[`Self::MAX_LENGTH`].
    pub fn with_length(length: usize) -> Result<Self, ConfigError> {
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(ConfigError::InvalidValue {
                message: format!(
                    "identifier length {length} is outside {}..={}",
                    Self::MIN_LENGTH,
                    Self::MAX_LENGTH
                )
                .into(),
                context: Some("identifiers.length".into()),
            });
        }
        Ok(Self { length })
    }

    /// Builds the generator from the `identifiers` config section.
    ///
    /// # Errors
    /// Same as [`Self::with_length`].
    pub fn from_config(config: &IdentifierConfig) -> Result<Self, ConfigError> {
        Self::with_length(config.length)
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl Default for NanoIdGenerator {
    fn default() -> Self {
        Self { length: DEFAULT_LENGTH }
    }
}

impl IdGenerator for NanoIdGenerator {
    fn generate(&self) -> UniqueId {
        UniqueId::from(crate::safe_nanoid!(self.length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_lengths() {
        let err = NanoIdGenerator::with_length(4).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn rejects_oversized_lengths() {
        let config = IdentifierConfig { length: usize::MAX };
        let err = NanoIdGenerator::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { context: Some(ref ctx), .. } if ctx == "identifiers.length"
        ));
    }

    #[test]
    fn honours_configured_length() {
        let generator = NanoIdGenerator::from_config(&IdentifierConfig { length: 20 }).unwrap();
        assert_eq!(generator.length(), 20);
        assert_eq!(generator.generate().as_str().chars().count(), 20);
    }
}
