//! Document codec and upgrade routine
//!
//! Decodes a stored configuration (JSON or YAML), decides whether it is a
//! legacy or current-schema document, and migrates it when needed. No file
//! I/O happens here; callers hand in and receive strings.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value as JsonValue;

use crate::error::DocumentError;
use crate::legacy::LegacyDocument;
use crate::migrate::Migrator;
use crate::model::{TargetDocument, SCHEMA_VERSION};

/// Serialized document format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detect format from a file extension (`.json`, `.yaml`, `.yml`)
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        })
    }
}

impl FromStr for DocumentFormat {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(DocumentError::UnknownFormat(other.to_string())),
        }
    }
}

/// Schema a decoded document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// No `schemaVersion` field
    Legacy,
    /// Versioned document
    Current(u64),
}

/// Keys only a current-schema document carries
const CURRENT_ONLY_KEYS: [&str; 3] = ["configProperties", "apps", "wrappers"];

/// Classify a decoded document
///
/// Any object with a `schemaVersion` key is versioned, and that key must
/// hold an unsigned integer. Objects without it are legacy.
///
/// # Errors
/// Returns a shape error for a non-object document or a `schemaVersion`
/// that is not an unsigned integer
pub fn detect_schema(value: &JsonValue) -> Result<SchemaKind, DocumentError> {
    let Some(object) = value.as_object() else {
        return Err(DocumentError::shape("legacy", "document is not a mapping"));
    };
    match object.get("schemaVersion") {
        None => Ok(SchemaKind::Legacy),
        Some(version) => version.as_u64().map(SchemaKind::Current).ok_or_else(|| {
            DocumentError::shape(
                "current",
                format!("schemaVersion must be an unsigned integer, found {version}"),
            )
        }),
    }
}

/// Decode a document into a generic JSON value
///
/// # Errors
/// Returns error if the input is not valid in `format`
pub fn parse_value(raw: &str, format: DocumentFormat) -> Result<JsonValue, DocumentError> {
    Ok(match format {
        DocumentFormat::Json => serde_json::from_str(raw)?,
        DocumentFormat::Yaml => serde_yaml::from_str(raw)?,
    })
}

/// Deserialize a decoded legacy document
///
/// # Errors
/// Returns a shape error if `services` or required service fields are
/// missing or mistyped, or if the value carries current-schema keys
pub fn legacy_from_value(value: JsonValue) -> Result<LegacyDocument, DocumentError> {
    if let Some(key) = CURRENT_ONLY_KEYS.iter().find(|key| value.get(**key).is_some()) {
        return Err(DocumentError::shape(
            "legacy",
            format!("unversioned document carries current-schema key `{key}`"),
        ));
    }
    serde_json::from_value(value).map_err(|e| DocumentError::shape("legacy", e.to_string()))
}

/// Result of the upgrade routine
#[derive(Debug, Clone, PartialEq)]
pub enum UpgradeOutcome {
    /// Input was legacy and has been migrated
    Migrated(TargetDocument),
    /// Input already used the current schema; returned as loaded
    AlreadyCurrent(TargetDocument),
}

impl UpgradeOutcome {
    #[inline]
    #[must_use]
    pub fn document(&self) -> &TargetDocument {
        match self {
            Self::Migrated(doc) | Self::AlreadyCurrent(doc) => doc,
        }
    }

    #[inline]
    #[must_use]
    pub fn into_document(self) -> TargetDocument {
        match self {
            Self::Migrated(doc) | Self::AlreadyCurrent(doc) => doc,
        }
    }

    #[inline]
    #[must_use]
    pub fn was_migrated(&self) -> bool {
        matches!(self, Self::Migrated(_))
    }
}

/// Bring a decoded document to the current schema
///
/// Current-schema documents are never re-migrated.
///
/// # Errors
/// Returns error when the value matches neither schema shape, declares a
/// newer schema version, or the migration itself fails.
pub fn upgrade_value(value: JsonValue, migrator: &Migrator) -> Result<UpgradeOutcome, DocumentError> {
    match detect_schema(&value)? {
        SchemaKind::Legacy => {
            let legacy = legacy_from_value(value)?;
            tracing::info!(services = legacy.services.len(), "upgrading legacy document");
            Ok(UpgradeOutcome::Migrated(migrator.migrate(&legacy)?))
        }
        SchemaKind::Current(version) if version == SCHEMA_VERSION => {
            let doc: TargetDocument = serde_json::from_value(value)
                .map_err(|e| DocumentError::shape("current", e.to_string()))?;
            tracing::debug!(name = %doc.name(), "document already on current schema");
            Ok(UpgradeOutcome::AlreadyCurrent(doc))
        }
        SchemaKind::Current(version) => Err(DocumentError::UnsupportedSchemaVersion(version)),
    }
}

/// Decode and upgrade a serialized document
///
/// # Errors
/// See [`parse_value`] and [`upgrade_value`]
pub fn upgrade_str(
    raw: &str,
    format: DocumentFormat,
    migrator: &Migrator,
) -> Result<UpgradeOutcome, DocumentError> {
    upgrade_value(parse_value(raw, format)?, migrator)
}

/// Decode a current-schema document without migrating
///
/// # Errors
/// Returns error for legacy input, an unsupported version, or a bad shape
pub fn load_current(raw: &str, format: DocumentFormat) -> Result<TargetDocument, DocumentError> {
    let value = parse_value(raw, format)?;
    match detect_schema(&value)? {
        SchemaKind::Current(version) if version == SCHEMA_VERSION => serde_json::from_value(value)
            .map_err(|e| DocumentError::shape("current", e.to_string())),
        SchemaKind::Current(version) => Err(DocumentError::UnsupportedSchemaVersion(version)),
        SchemaKind::Legacy => Err(DocumentError::shape("current", "missing schemaVersion")),
    }
}

/// Serialize a document
///
/// # Errors
/// Returns error if serialization fails (rare for JSON)
pub fn to_string(doc: &TargetDocument, format: DocumentFormat) -> Result<String, DocumentError> {
    match format {
        DocumentFormat::Json => serde_json::to_string_pretty(doc)
            .map_err(|e| DocumentError::Serialization(e.to_string())),
        DocumentFormat::Yaml => {
            serde_yaml::to_string(doc).map_err(|e| DocumentError::Serialization(e.to_string()))
        }
    }
}
