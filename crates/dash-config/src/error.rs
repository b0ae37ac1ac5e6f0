//! Error types for configuration handling
//!
//! Provides error handling for:
//! - Migration (only under the strict status policy)
//! - Document decoding, schema detection, and encoding
//! - Migration configuration loading

/// Errors raised while migrating a legacy document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// A status string could not be parsed as an integer
    #[error("service '{service}' (index {index}): invalid status code '{value}'")]
    InvalidStatus {
        service: String,
        index: usize,
        value: String,
    },
}

/// Errors while reading, upgrading, or writing a document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Input parsed but does not have the legacy or current document shape
    #[error("unexpected {schema} document shape: {message}")]
    Shape {
        schema: &'static str,
        message: String,
    },

    #[error("unsupported schema version {0}")]
    UnsupportedSchemaVersion(u64),

    #[error("migration failed: {0}")]
    Migration(#[from] MigrationError),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("unknown document format: {0}")]
    UnknownFormat(String),
}

impl DocumentError {
    /// Create shape error for the given schema
    pub fn shape(schema: &'static str, message: impl Into<String>) -> Self {
        Self::Shape {
            schema,
            message: message.into(),
        }
    }
}

/// Errors loading a migration configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("unknown status policy: '{0}'")]
    UnknownStatusPolicy(String),
}
