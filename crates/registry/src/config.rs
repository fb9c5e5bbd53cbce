//! Registry configuration.

/// Attribute used by `get_associative` when the caller does not name one.
pub const DEFAULT_VALUE_KEY: &str = "name";

/// Environment variable overriding [`DEFAULT_VALUE_KEY`] for the global registry.
pub const VALUE_KEY_ENV: &str = "STATIC_ENTITY_VALUE_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    default_value_key: String,
}

impl RegistryConfig {
    pub fn new(default_value_key: impl Into<String>) -> Self {
        Self {
            default_value_key: default_value_key.into(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_value_key(std::env::var(VALUE_KEY_ENV).ok())
    }

    fn from_value_key(value_key: Option<String>) -> Self {
        match value_key {
            Some(key) if !key.trim().is_empty() => Self::new(key.trim()),
            Some(_) => {
                tracing::warn!(
                    "{VALUE_KEY_ENV} is blank; using default value key `{DEFAULT_VALUE_KEY}`"
                );
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn default_value_key(&self) -> &str {
        &self.default_value_key
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE_KEY)
    }
}
