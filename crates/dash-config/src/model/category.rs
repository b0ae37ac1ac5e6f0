//! Placement areas: categories, wrappers, and the area tag apps carry

use serde::{Deserialize, Serialize};

use super::DEFAULT_WRAPPER_ID;

/// Named group of apps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub position: i64,
}

impl Category {
    /// Create category at position 0
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: 0,
        }
    }
}

/// Top-level container for apps without a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapper {
    pub id: String,
    pub position: i64,
}

impl Default for Wrapper {
    fn default() -> Self {
        Self {
            id: DEFAULT_WRAPPER_ID.to_string(),
            position: 1,
        }
    }
}

/// Where an app is placed
///
/// Wire form: `{"type": "wrapper", "properties": {"id": "default"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "properties", rename_all = "lowercase")]
pub enum Area {
    Wrapper(AreaRef),
    Category(AreaRef),
}

/// Identifier of the wrapper or category an [`Area`] points to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaRef {
    pub id: String,
}

impl Area {
    /// The default wrapper area
    #[inline]
    #[must_use]
    pub fn default_wrapper() -> Self {
        Self::wrapper(DEFAULT_WRAPPER_ID)
    }

    #[inline]
    #[must_use]
    pub fn wrapper(id: impl Into<String>) -> Self {
        Self::Wrapper(AreaRef { id: id.into() })
    }

    #[inline]
    #[must_use]
    pub fn category(id: impl Into<String>) -> Self {
        Self::Category(AreaRef { id: id.into() })
    }

    /// Referenced wrapper or category id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Wrapper(r) | Self::Category(r) => &r.id,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_wrapper(&self) -> bool {
        matches!(self, Self::Wrapper(_))
    }
}

impl Default for Area {
    fn default() -> Self {
        Self::default_wrapper()
    }
}
