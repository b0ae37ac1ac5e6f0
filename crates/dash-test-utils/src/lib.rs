//! Testing utilities for the dashboard configuration workspace
//!
//! Shared fixtures, deterministic migrators, and assertions.

#![allow(missing_docs)]

use std::sync::Arc;

use dash_config::{
    LegacyDocument, LegacyService, MigrationConfig, Migrator, SequentialIdGenerator,
    StatusPolicy, TargetDocument,
};

pub fn deterministic_migrator() -> Migrator {
    Migrator::with_ids(Arc::new(SequentialIdGenerator::new("id")))
}

pub fn deterministic_migrator_with_policy(policy: StatusPolicy) -> Migrator {
    deterministic_migrator().with_config(MigrationConfig::new().with_status_policy(policy))
}

/// The "home" document: two Media services and an uncategorized router
pub fn home_legacy_document() -> LegacyDocument {
    LegacyDocument::new()
        .with_name("home")
        .with_service(LegacyService::new("Plex", "http://plex").with_category("Media"))
        .with_service(
            LegacyService::new("Radarr", "http://radarr")
                .with_category("Media")
                .with_ping(false),
        )
        .with_service(LegacyService::new("Router", "http://router"))
}

/// `count` uncategorized services named `svc-{i}`
pub fn flat_legacy_document(count: usize) -> LegacyDocument {
    (0..count).fold(LegacyDocument::new(), |doc, i| {
        doc.with_service(LegacyService::new(format!("svc-{i}"), format!("http://svc-{i}")))
    })
}

/// Services each carrying the given category (or none)
pub fn categorized_legacy_document(categories: &[Option<&str>]) -> LegacyDocument {
    categories
        .iter()
        .enumerate()
        .fold(LegacyDocument::new(), |doc, (i, category)| {
            let service = LegacyService::new(format!("svc-{i}"), format!("http://svc-{i}"));
            doc.with_service(match category {
                Some(name) => service.with_category(*name),
                None => service,
            })
        })
}

pub fn legacy_json(doc: &LegacyDocument) -> String {
    serde_json::to_string_pretty(doc).unwrap()
}

/// Assert every document invariant holds, with readable failure output
pub fn assert_valid_migration(legacy: &LegacyDocument, doc: &TargetDocument) {
    if let Err(violations) = dash_config::validate_against(legacy, doc) {
        let lines: Vec<String> = violations.iter().map(ToString::to_string).collect();
        panic!("invariant violations:\n  {}", lines.join("\n  "));
    }
}
