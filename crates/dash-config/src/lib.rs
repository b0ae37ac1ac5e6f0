//! Dashboard Configuration
//!
//! Typed dashboard configuration documents and the migration engine that
//! upgrades legacy, unversioned documents to the current schema.
//!
//! # Core Concepts
//!
//! - [`LegacyDocument`]: the prior flat list of services
//! - [`TargetDocument`]: the current document (`schemaVersion` 1)
//! - [`Migrator`]: deterministic legacy-to-current rewrite
//! - [`IdGenerator`]: source of fresh category/app identifiers
//! - [`upgrade_str`]: decode, detect schema, and migrate if needed
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use dash_config::{LegacyDocument, LegacyService, Migrator, SequentialIdGenerator};
//!
//! let legacy = LegacyDocument::new()
//!     .with_service(LegacyService::new("Router", "http://router"));
//!
//! let migrator = Migrator::with_ids(Arc::new(SequentialIdGenerator::new("app")));
//! let doc = migrator.migrate(&legacy)?;
//! assert_eq!(doc.apps[0].id, "app-1");
//! # Ok::<(), dash_config::MigrationError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod ids;
pub mod legacy;
pub mod migrate;
pub mod model;
pub mod validation;

// Re-exports
pub use config::MigrationConfig;
pub use document::{
    detect_schema, load_current, to_string, upgrade_str, upgrade_value, DocumentFormat,
    SchemaKind, UpgradeOutcome,
};
pub use error::{ConfigError, DocumentError, MigrationError};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use legacy::{LegacyDocument, LegacyService};
pub use migrate::{migrate, Migrator, StatusPolicy};
pub use model::{App, Area, Category, TargetDocument, SCHEMA_VERSION};
pub use validation::{validate, validate_against, InvariantViolation};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for migrating configurations
    pub use crate::{
        IdGenerator, LegacyDocument, LegacyService, MigrationConfig, Migrator, StatusPolicy,
        TargetDocument,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
