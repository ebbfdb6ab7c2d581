//! Navigation configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::NavigationTriple;

/// Section of the route used on a fresh load.
pub const DEFAULT_SECTION: &str = "getting-started";

/// Category of the route used on a fresh load.
pub const DEFAULT_CATEGORY: &str = "introduction";

/// Item used on a fresh load, and for categories that list no items.
pub const DEFAULT_FALLBACK_ITEM: &str = "overview";

/// Configuration for the navigator.
///
/// Every field has a default, so a JSON document only needs the fields
/// it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Route applied when the hash fragment is empty
    pub default_route: NavigationTriple,

    /// Item id used by the section shortcut when a category has no items
    pub fallback_item: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            default_route: NavigationTriple::new(
                DEFAULT_SECTION,
                DEFAULT_CATEGORY,
                DEFAULT_FALLBACK_ITEM,
            ),
            fallback_item: DEFAULT_FALLBACK_ITEM.to_string(),
        }
    }
}

impl NavConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with a custom default route.
    pub fn with_default_route(default_route: NavigationTriple) -> Self {
        Self {
            default_route,
            ..Default::default()
        }
    }

    /// Replace the fallback item id.
    pub fn with_fallback_item(mut self, fallback_item: impl Into<String>) -> Self {
        self.fallback_item = fallback_item.into();
        self
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
