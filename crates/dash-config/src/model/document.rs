//! Current-schema configuration document

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::app::App;
use super::category::{Area, Category, Wrapper};
use super::settings::Settings;
use super::SCHEMA_VERSION;

/// Dashboard configuration under `schemaVersion` 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDocument {
    pub schema_version: u64,
    pub config_properties: ConfigProperties,
    pub categories: Vec<Category>,
    pub widgets: Vec<JsonValue>,
    /// Apps in migration order, not layout order
    pub apps: Vec<App>,
    pub settings: Settings,
    pub wrappers: Vec<Wrapper>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigProperties {
    pub name: String,
}

impl TargetDocument {
    /// Empty, fully defaulted document
    ///
    /// Used both as the migration starting point and as the fallback
    /// configuration for a freshly created dashboard.
    #[must_use]
    pub fn fallback(name: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            config_properties: ConfigProperties { name: name.into() },
            categories: Vec::new(),
            widgets: Vec::new(),
            apps: Vec::new(),
            settings: Settings::default(),
            wrappers: vec![Wrapper::default()],
        }
    }

    /// Document name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config_properties.name
    }

    #[inline]
    #[must_use]
    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Exact, case-sensitive name lookup
    #[inline]
    #[must_use]
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    #[inline]
    #[must_use]
    pub fn wrapper_by_id(&self, id: &str) -> Option<&Wrapper> {
        self.wrappers.iter().find(|w| w.id == id)
    }

    /// Apps placed in the given area, in document order
    pub fn apps_in<'a>(&'a self, area: &'a Area) -> impl Iterator<Item = &'a App> + 'a {
        self.apps.iter().filter(move |app| &app.area == area)
    }
}
