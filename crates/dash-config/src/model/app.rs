//! App tiles

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::category::Area;
use super::settings::Settings;

/// Status code accepted when none is configured
pub const DEFAULT_OK_STATUS: i64 = 200;

/// A dashboard tile linking to a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub name: String,
    pub url: String,
    pub behaviour: AppBehaviour,
    pub network: AppNetwork,
    pub appearance: AppAppearance,
    pub integration: AppIntegration,
    pub area: Area,
    pub shape: AppShape,
}

impl App {
    /// Whether a response code counts as "online" for this app
    #[inline]
    #[must_use]
    pub fn accepts_status(&self, code: i64) -> bool {
        self.network.ok_status.iter().any(|s| *s == Some(code))
    }

    /// Whether the status checker should poll this app
    ///
    /// Both the dashboard-wide ping toggle and the per-app flag must be on.
    #[inline]
    #[must_use]
    pub fn status_check_active(&self, settings: &Settings) -> bool {
        settings.customization.layout.enabled_ping && self.network.enabled_status_checker
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppBehaviour {
    pub is_opening_new_tab: bool,
    pub external_url: String,
}

impl Default for AppBehaviour {
    fn default() -> Self {
        Self {
            is_opening_new_tab: true,
            external_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppNetwork {
    pub enabled_status_checker: bool,
    /// Accepted status codes; `None` marks an entry that could not be parsed
    pub ok_status: Vec<Option<i64>>,
}

impl Default for AppNetwork {
    fn default() -> Self {
        Self {
            enabled_status_checker: true,
            ok_status: vec![Some(DEFAULT_OK_STATUS)],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAppearance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// External integration binding; migration always leaves it empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppIntegration {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub properties: Vec<JsonValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppShape {
    pub location: ShapeLocation,
    pub size: ShapeSize,
}

/// Grid coordinates of the top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeLocation {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSize {
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::category::Area;
    use serde_json::json;

    fn sample(ok_status: Vec<Option<i64>>, checker: bool) -> App {
        App {
            id: "a-1".to_string(),
            name: "Plex".to_string(),
            url: "http://plex".to_string(),
            behaviour: AppBehaviour::default(),
            network: AppNetwork {
                enabled_status_checker: checker,
                ok_status,
            },
            appearance: AppAppearance::default(),
            integration: AppIntegration::default(),
            area: Area::default_wrapper(),
            shape: AppShape {
                location: ShapeLocation { x: 0, y: 0 },
                size: ShapeSize {
                    width: 3,
                    height: 3,
                },
            },
        }
    }

    #[test]
    fn accepts_only_listed_codes() {
        let app = sample(vec![Some(200), None, Some(401)], true);
        assert!(app.accepts_status(200));
        assert!(app.accepts_status(401));
        assert!(!app.accepts_status(500));
    }

    #[test]
    fn status_check_needs_both_toggles() {
        let app = sample(vec![Some(200)], true);
        let mut settings = Settings::default();
        assert!(!app.status_check_active(&settings));

        settings.customization.layout.enabled_ping = true;
        assert!(app.status_check_active(&settings));

        let muted = sample(vec![Some(200)], false);
        assert!(!muted.status_check_active(&settings));
    }

    #[test]
    fn wire_format() {
        let value = serde_json::to_value(sample(vec![Some(200), None], true)).unwrap();
        assert_eq!(value["network"]["okStatus"], json!([200, null]));
        assert_eq!(value["integration"], json!({"type": null, "properties": []}));
        assert_eq!(value["appearance"], json!({}));
        assert_eq!(value["behaviour"]["isOpeningNewTab"], json!(true));
        assert_eq!(value["shape"]["size"], json!({"width": 3, "height": 3}));
    }
}
