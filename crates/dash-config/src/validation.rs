//! Document invariant checks
//!
//! Verifies the structural guarantees every migrated document must hold:
//! a single default wrapper, unique category names, unique identifiers,
//! and area references that resolve.

use std::collections::HashSet;
use std::fmt;

use crate::legacy::LegacyDocument;
use crate::model::{Area, TargetDocument, DEFAULT_WRAPPER_ID, SCHEMA_VERSION};

/// A broken document invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    SchemaVersion { found: u64 },
    WrapperCount { found: usize },
    MissingDefaultWrapper,
    DuplicateCategoryName { name: String },
    DuplicateId { id: String },
    DanglingCategory { app_id: String, category_id: String },
    DanglingWrapper { app_id: String, wrapper_id: String },
    AppCount { services: usize, apps: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaVersion { found } => {
                write!(f, "schema version {found}, expected {SCHEMA_VERSION}")
            }
            Self::WrapperCount { found } => write!(f, "expected exactly one wrapper, found {found}"),
            Self::MissingDefaultWrapper => {
                write!(f, "wrapper '{DEFAULT_WRAPPER_ID}' is missing")
            }
            Self::DuplicateCategoryName { name } => write!(f, "duplicate category name '{name}'"),
            Self::DuplicateId { id } => write!(f, "duplicate identifier '{id}'"),
            Self::DanglingCategory {
                app_id,
                category_id,
            } => write!(f, "app '{app_id}' references unknown category '{category_id}'"),
            Self::DanglingWrapper { app_id, wrapper_id } => {
                write!(f, "app '{app_id}' references unknown wrapper '{wrapper_id}'")
            }
            Self::AppCount { services, apps } => {
                write!(f, "{services} services migrated into {apps} apps")
            }
        }
    }
}

/// Check a current-schema document
///
/// # Errors
/// Returns every violation found, in discovery order
pub fn validate(doc: &TargetDocument) -> Result<(), Vec<InvariantViolation>> {
    let violations = collect(doc);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Check a migrated document against the legacy document it came from
///
/// Adds the no-drop/no-duplicate check: one app per service.
///
/// # Errors
/// Returns every violation found
pub fn validate_against(
    legacy: &LegacyDocument,
    doc: &TargetDocument,
) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = collect(doc);
    if legacy.services.len() != doc.apps.len() {
        violations.push(InvariantViolation::AppCount {
            services: legacy.services.len(),
            apps: doc.apps.len(),
        });
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn collect(doc: &TargetDocument) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if doc.schema_version != SCHEMA_VERSION {
        violations.push(InvariantViolation::SchemaVersion {
            found: doc.schema_version,
        });
    }

    if doc.wrappers.len() != 1 {
        violations.push(InvariantViolation::WrapperCount {
            found: doc.wrappers.len(),
        });
    }
    if doc.wrapper_by_id(DEFAULT_WRAPPER_ID).is_none() {
        violations.push(InvariantViolation::MissingDefaultWrapper);
    }

    let mut names = HashSet::new();
    for category in &doc.categories {
        if !names.insert(category.name.as_str()) {
            violations.push(InvariantViolation::DuplicateCategoryName {
                name: category.name.clone(),
            });
        }
    }

    let mut ids = HashSet::new();
    let all_ids = doc
        .categories
        .iter()
        .map(|c| c.id.as_str())
        .chain(doc.apps.iter().map(|a| a.id.as_str()));
    for id in all_ids {
        if !ids.insert(id) {
            violations.push(InvariantViolation::DuplicateId { id: id.to_string() });
        }
    }

    for app in &doc.apps {
        match &app.area {
            Area::Category(r) if doc.category_by_id(&r.id).is_none() => {
                violations.push(InvariantViolation::DanglingCategory {
                    app_id: app.id.clone(),
                    category_id: r.id.clone(),
                });
            }
            Area::Wrapper(r) if doc.wrapper_by_id(&r.id).is_none() => {
                violations.push(InvariantViolation::DanglingWrapper {
                    app_id: app.id.clone(),
                    wrapper_id: r.id.clone(),
                });
            }
            _ => {}
        }
    }

    violations
}
