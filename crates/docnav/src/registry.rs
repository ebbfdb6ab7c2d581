//! Content registry mapping registry paths to registration records
//!
//! The registry is assembled once at startup from category-scoped partial
//! maps contributed by content modules, then shared read-only.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
//! │  foundation  │ │  components  │ │   patterns   │   PartialRegistry
//! └──────┬───────┘ └──────┬───────┘ └──────┬───────┘
//!        └────────────────┼────────────────┘
//!                         ↓  build (last write wins)
//!                 ┌────────────────┐
//!                 │ContentRegistry │  immutable, Arc-shared
//!                 └────────────────┘
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::path::RegistryPath;
use crate::record::RegistrationRecord;

/// A category-scoped slice of the registry, in authoring order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialRegistry {
    entries: IndexMap<RegistryPath, RegistrationRecord>,
}

impl PartialRegistry {
    /// Create an empty partial map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any previous one under the same key.
    pub fn insert(&mut self, path: impl Into<RegistryPath>, record: RegistrationRecord) {
        self.entries.insert(path.into(), record);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, path: impl Into<RegistryPath>, record: RegistrationRecord) -> Self {
        self.insert(path, record);
        self
    }

    /// Parse a JSON object of `path → record`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(RegistryPath, RegistrationRecord)> for PartialRegistry {
    fn from_iter<I: IntoIterator<Item = (RegistryPath, RegistrationRecord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Result of a registry lookup. Never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// The path has a record
    Found(Arc<RegistrationRecord>),

    /// Nothing registered under the path
    NotFound,
}

impl Lookup {
    /// Check whether a record was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// The record, if found.
    pub fn record(&self) -> Option<&RegistrationRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound => None,
        }
    }
}

impl Serialize for Lookup {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Lookup::Found(record) => record.as_ref().serialize(serializer),
            Lookup::NotFound => serializer.serialize_none(),
        }
    }
}

/// Immutable map from registry path to record.
///
/// # Example
///
/// ```
/// use docnav::{ContentRegistry, PartialRegistry, RegistrationRecord};
/// use serde_json::json;
///
/// let foundation = PartialRegistry::new().with(
///     "foundation/color/palette",
///     RegistrationRecord::from_doc("Palette", json!({})),
/// );
/// let registry = ContentRegistry::build([foundation]);
///
/// assert!(registry.lookup("foundation/color/palette").is_found());
/// assert!(!registry.lookup("foundation/color/missing").is_found());
/// ```
#[derive(Clone, Default)]
pub struct ContentRegistry {
    entries: IndexMap<RegistryPath, Arc<RegistrationRecord>>,
}

impl ContentRegistry {
    /// Merge partial maps into a registry.
    ///
    /// On a key collision the later map wins. Collisions are logged at
    /// debug level and otherwise accepted.
    pub fn build(parts: impl IntoIterator<Item = PartialRegistry>) -> Self {
        let mut entries: IndexMap<RegistryPath, Arc<RegistrationRecord>> = IndexMap::new();
        for part in parts {
            for (path, record) in part.entries {
                if let Some(previous) = entries.insert(path.clone(), Arc::new(record)) {
                    tracing::debug!(
                        path = %path,
                        replaced = previous.title(),
                        "registry key collision, keeping later entry"
                    );
                }
            }
        }
        tracing::trace!(entries = entries.len(), "content registry built");
        Self { entries }
    }

    /// Look up a record by path.
    pub fn lookup(&self, path: &str) -> Lookup {
        match self.entries.get(path) {
            Some(record) => Lookup::Found(Arc::clone(record)),
            None => Lookup::NotFound,
        }
    }

    /// Check if a path is registered.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// All registered paths, in merge order.
    pub fn paths(&self) -> impl Iterator<Item = &RegistryPath> {
        self.entries.keys()
    }

    /// Display titles paired with their paths.
    pub fn titles(&self) -> impl Iterator<Item = (&str, &RegistryPath)> {
        self.entries
            .iter()
            .map(|(path, record)| (record.title(), path))
    }

    /// Number of registered paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ContentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentRegistry {{ entries: {} }}", self.entries.len())
    }
}
