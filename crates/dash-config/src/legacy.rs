//! Legacy (unversioned) configuration schema
//!
//! Documents saved before `schemaVersion` existed hold a flat list of
//! services. Only the fields the migration consumes are modelled; anything
//! else in the source document is ignored on load.

use serde::{Deserialize, Serialize};

/// Configuration document under the prior, unversioned schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDocument {
    /// Document label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Services in display order; the order drives migrated layout
    pub services: Vec<LegacyService>,
}

impl LegacyDocument {
    /// Create empty document
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With document name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a service
    #[inline]
    #[must_use]
    pub fn with_service(mut self, service: LegacyService) -> Self {
        self.services.push(service);
        self
    }
}

/// One dashboard tile under the legacy schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyService {
    pub name: String,
    pub url: String,

    /// Absent means the service lives in the default top-level area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_tab: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opened_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ping: Option<bool>,

    /// Accepted HTTP status codes as strings, e.g. `"200"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl LegacyService {
    /// Create service with the two required fields
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// With category name
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// With ping flag
    #[inline]
    #[must_use]
    pub fn with_ping(mut self, ping: bool) -> Self {
        self.ping = Some(ping);
        self
    }

    /// With new-tab flag
    #[inline]
    #[must_use]
    pub fn with_new_tab(mut self, new_tab: bool) -> Self {
        self.new_tab = Some(new_tab);
        self
    }

    /// With external url
    #[inline]
    #[must_use]
    pub fn with_opened_url(mut self, url: impl Into<String>) -> Self {
        self.opened_url = Some(url.into());
        self
    }

    /// With accepted status strings
    #[inline]
    #[must_use]
    pub fn with_status<I, S>(mut self, status: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status = Some(status.into_iter().map(Into::into).collect());
        self
    }

    /// With icon url
    #[inline]
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Category name, treating an empty string as no category
    #[inline]
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_fields() {
        let doc: LegacyDocument = serde_json::from_value(json!({
            "name": "home",
            "services": [{
                "name": "Plex",
                "url": "http://plex",
                "category": "Media",
                "newTab": false,
                "openedUrl": "https://plex.example",
                "ping": false,
                "status": ["200", "401"],
                "icon": "https://icons/plex.png",
                "id": "ignored-legacy-field"
            }]
        }))
        .unwrap();

        assert_eq!(doc.name.as_deref(), Some("home"));
        let plex = &doc.services[0];
        assert_eq!(plex.new_tab, Some(false));
        assert_eq!(plex.opened_url.as_deref(), Some("https://plex.example"));
        assert_eq!(plex.status.as_deref(), Some(&["200".to_string(), "401".to_string()][..]));
    }

    #[test]
    fn services_list_is_required() {
        assert!(serde_json::from_value::<LegacyDocument>(json!({"name": "home"})).is_err());

        let doc: LegacyDocument = serde_json::from_value(json!({"services": []})).unwrap();
        assert!(doc.name.is_none());
        assert!(doc.services.is_empty());
    }

    #[test]
    fn empty_category_counts_as_none() {
        let service = LegacyService::new("a", "http://a").with_category("");
        assert_eq!(service.category_name(), None);
        assert_eq!(
            LegacyService::new("a", "http://a").with_category("Media").category_name(),
            Some("Media")
        );
    }
}
