//! Dashboard settings
//!
//! Every call to [`Settings::default`] builds a fresh value, so documents
//! never share a mutable defaults object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::DEFAULT_CONFIG_NAME;

/// Top-level settings block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub common: CommonSettings,
    pub customization: CustomizationSettings,
}

/// Settings shared by every view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonSettings {
    pub search_engine: SearchEngine,
    pub default_config: String,
}

impl Default for CommonSettings {
    fn default() -> Self {
        Self {
            search_engine: SearchEngine::default(),
            default_config: DEFAULT_CONFIG_NAME.to_string(),
        }
    }
}

/// Search engine selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEngine {
    /// Engine identifier, e.g. `google`
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: SearchEngineProperties,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            kind: "google".to_string(),
            properties: SearchEngineProperties {
                enabled: true,
                open_in_new_tab: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEngineProperties {
    pub enabled: bool,
    pub open_in_new_tab: bool,
}

/// Look and layout customization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationSettings {
    /// Free-form color scheme, passed through untouched
    #[serde(default)]
    pub colors: Map<String, JsonValue>,
    pub layout: LayoutSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<AccessibilitySettings>,
}

/// Layout feature toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    pub enabled_docker: bool,
    pub enabled_left_sidebar: bool,
    pub enabled_ping: bool,
    pub enabled_right_sidebar: bool,
    pub enabled_searchbar: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            enabled_docker: false,
            enabled_left_sidebar: false,
            enabled_ping: false,
            enabled_right_sidebar: false,
            enabled_searchbar: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub disable_ping_pulse: bool,
    #[serde(default)]
    pub replace_ping_dots_with_icons: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_serialize_to_expected_shape() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "common": {
                    "searchEngine": {
                        "type": "google",
                        "properties": { "enabled": true, "openInNewTab": true }
                    },
                    "defaultConfig": "default"
                },
                "customization": {
                    "colors": {},
                    "layout": {
                        "enabledDocker": false,
                        "enabledLeftSidebar": false,
                        "enabledPing": false,
                        "enabledRightSidebar": false,
                        "enabledSearchbar": true
                    }
                }
            })
        );
    }

    #[test]
    fn defaults_are_independent_values() {
        let mut a = Settings::default();
        a.customization.layout.enabled_ping = true;
        assert!(!Settings::default().customization.layout.enabled_ping);
    }
}
