//! Legacy configuration migration
//!
//! Rewrites an unversioned document into `schemaVersion` 1:
//! - Every service becomes an app, in the original order
//! - Category names become categories, one per distinct name
//! - Uncategorized services land in the default wrapper
//! - Each app gets a grid slot derived from its ordinal index
//!
//! # Example
//!
//! ```rust
//! use dash_config::legacy::{LegacyDocument, LegacyService};
//! use dash_config::migrate::migrate;
//!
//! let legacy = LegacyDocument::new()
//!     .with_name("home")
//!     .with_service(LegacyService::new("Plex", "http://plex").with_category("Media"))
//!     .with_service(LegacyService::new("Router", "http://router"));
//!
//! let doc = migrate(&legacy);
//! assert_eq!(doc.apps.len(), 2);
//! assert_eq!(doc.categories.len(), 1);
//! ```

pub mod layout;
pub mod mapper;
pub mod resolver;
pub mod status;

use std::sync::Arc;

pub use layout::{grid_location, DEFAULT_APP_SIZE};
pub use mapper::map_service;
pub use resolver::resolve_category;
pub use status::{parse_status_code, StatusPolicy};

use crate::config::MigrationConfig;
use crate::error::MigrationError;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::legacy::LegacyDocument;
use crate::model::{Area, TargetDocument, DEFAULT_CONFIG_NAME};

/// Empty target document named `name`, or `"default"` when absent
#[inline]
#[must_use]
pub fn initial_document(name: Option<&str>) -> TargetDocument {
    TargetDocument::fallback(name.unwrap_or(DEFAULT_CONFIG_NAME))
}

/// Migrate with random ids and the compatibility status policy
///
/// Total over every legacy document: missing optional fields are defaulted
/// and unparseable status strings become `null` entries.
#[must_use]
pub fn migrate(legacy: &LegacyDocument) -> TargetDocument {
    Migrator::new()
        .migrate(legacy)
        .unwrap_or_else(|err| unreachable!("preserve policy never rejects: {err}"))
}

/// Migration driver with a pluggable id source and configuration
#[derive(Debug, Clone)]
pub struct Migrator {
    ids: Arc<dyn IdGenerator>,
    config: MigrationConfig,
}

impl Migrator {
    /// Create migrator with UUID ids and default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(Arc::new(UuidGenerator::new()))
    }

    /// Create migrator drawing ids from `ids`
    #[inline]
    #[must_use]
    pub fn with_ids(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            config: MigrationConfig::default(),
        }
    }

    /// With configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: MigrationConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Migrate a legacy document
    ///
    /// # Workflow
    /// 1. Build the defaulted target document
    /// 2. For each service in order, resolve its area against the
    ///    categories created so far and map it to an app
    /// 3. Return the accumulated document
    ///
    /// # Errors
    /// Fails only under [`StatusPolicy::Reject`]; no partial document is
    /// returned.
    pub fn migrate(&self, legacy: &LegacyDocument) -> Result<TargetDocument, MigrationError> {
        let name = legacy.name.as_deref().unwrap_or(&self.config.default_name);
        let mut doc = initial_document(Some(name));
        let ids = self.ids.as_ref();

        for (index, service) in legacy.services.iter().enumerate() {
            let area = match service.category_name() {
                Some(category) => {
                    Area::category(resolve_category(&mut doc, category, ids).id.clone())
                }
                None => Area::default_wrapper(),
            };
            let app = map_service(service, index, area, ids, self.config.status_policy)?;
            doc.apps.push(app);
        }

        tracing::info!(
            name = %doc.name(),
            apps = doc.apps.len(),
            categories = doc.categories.len(),
            "migrated legacy configuration"
        );
        Ok(doc)
    }
}

impl Default for Migrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use crate::legacy::LegacyService;
    use crate::model::ShapeLocation;

    fn migrator() -> Migrator {
        Migrator::with_ids(Arc::new(SequentialIdGenerator::new("id")))
    }

    #[test]
    fn initial_document_defaults_name() {
        assert_eq!(initial_document(None).name(), "default");
        assert_eq!(initial_document(Some("home")).name(), "home");
        assert_eq!(initial_document(Some("")).name(), "");
    }

    #[test]
    fn empty_document() {
        let doc = migrator().migrate(&LegacyDocument::new()).unwrap();
        assert_eq!(doc, TargetDocument::fallback("default"));
    }

    #[test]
    fn shared_category_resolves_once() {
        let legacy = LegacyDocument::new()
            .with_service(LegacyService::new("a", "http://a").with_category("A"))
            .with_service(LegacyService::new("b", "http://b").with_category("B"))
            .with_service(LegacyService::new("c", "http://c").with_category("A"));

        let doc = migrator().migrate(&legacy).unwrap();

        assert_eq!(doc.categories.len(), 2);
        assert_eq!(doc.apps[0].area, doc.apps[2].area);
        assert_ne!(doc.apps[0].area, doc.apps[1].area);
        // category A takes id-1, app a id-2, category B id-3, ...
        assert_eq!(doc.categories[0].id, "id-1");
        assert_eq!(doc.apps[0].id, "id-2");
        assert_eq!(doc.categories[1].id, "id-3");
    }

    #[test]
    fn configured_default_name() {
        let migrator = migrator().with_config(MigrationConfig::new().with_default_name("home"));
        let doc = migrator.migrate(&LegacyDocument::new()).unwrap();
        assert_eq!(doc.name(), "home");

        let named = migrator
            .migrate(&LegacyDocument::new().with_name("office"))
            .unwrap();
        assert_eq!(named.name(), "office");
    }

    #[test]
    fn reject_policy_aborts_whole_run() {
        let legacy = LegacyDocument::new()
            .with_service(LegacyService::new("ok", "http://ok"))
            .with_service(LegacyService::new("bad", "http://bad").with_status(["oops"]));
        let migrator =
            migrator().with_config(MigrationConfig::new().with_status_policy(StatusPolicy::Reject));

        let err = migrator.migrate(&legacy).unwrap_err();
        assert_eq!(
            err,
            MigrationError::InvalidStatus {
                service: "bad".to_string(),
                index: 1,
                value: "oops".to_string(),
            }
        );
    }

    #[test]
    fn free_function_uses_uuids() {
        let legacy = LegacyDocument::new()
            .with_service(LegacyService::new("a", "http://a"))
            .with_service(LegacyService::new("b", "http://b").with_status(["x"]));

        let doc = migrate(&legacy);

        assert_eq!(doc.apps.len(), 2);
        assert_ne!(doc.apps[0].id, doc.apps[1].id);
        assert_eq!(doc.apps[1].network.ok_status, vec![None]);
        assert_eq!(doc.apps[1].shape.location, ShapeLocation { x: 3, y: 0 });
    }
}
