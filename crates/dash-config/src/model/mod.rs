//! Current configuration schema
//!
//! Provides the typed document the dashboard persists:
//! - Document: top-level container with settings and wrappers
//! - Category / Wrapper / Area: where apps are placed
//! - App: one tile with behaviour, network, and layout shape
//! - Settings: search, layout, and accessibility toggles

pub mod app;
pub mod category;
pub mod document;
pub mod settings;

pub use app::{
    App, AppAppearance, AppBehaviour, AppIntegration, AppNetwork, AppShape, ShapeLocation,
    ShapeSize, DEFAULT_OK_STATUS,
};
pub use category::{Area, AreaRef, Category, Wrapper};
pub use document::{ConfigProperties, TargetDocument};
pub use settings::{
    AccessibilitySettings, CommonSettings, CustomizationSettings, LayoutSettings, SearchEngine,
    SearchEngineProperties, Settings,
};

/// Schema version written by this crate
pub const SCHEMA_VERSION: u64 = 1;

/// Identifier of the fallback wrapper for uncategorized apps
pub const DEFAULT_WRAPPER_ID: &str = "default";

/// Name used when a document carries none
pub const DEFAULT_CONFIG_NAME: &str = "default";
