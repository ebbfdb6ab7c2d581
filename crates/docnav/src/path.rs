//! Registry paths, navigation triples and hash fragments
//!
//! A documentation page is addressed by a `(section, category, item)`
//! triple. Joined with `/` the triple becomes the [`RegistryPath`] used as
//! the registry key; prefixed with `#/` it becomes the URL hash fragment.
//!
//! ```text
//! NavigationTriple { foundation, color, palette }
//!        │
//!        ├─ path() ────→ "foundation/color/palette"
//!        └─ to_hash() ─→ "#/foundation/color/palette"
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::{DocnavError, Result};

/// Prefix written in front of a path to form a hash fragment.
pub const HASH_PREFIX: &str = "#/";

/// Key into the content registry.
///
/// By convention this is `<section>/<category>/<item>`, but the registry
/// itself accepts any string key; use [`RegistryPath::is_canonical`] to
/// check the three-segment form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryPath(String);

impl RegistryPath {
    /// Wrap a raw key.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Join a triple into its canonical key.
    pub fn from_triple(triple: &NavigationTriple) -> Self {
        Self(format!(
            "{}/{}/{}",
            triple.section, triple.category, triple.item
        ))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `/`-delimited segments of the key.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// True when the key has exactly three non-empty segments.
    pub fn is_canonical(&self) -> bool {
        let segments: Vec<&str> = self.segments().collect();
        segments.len() == 3 && segments.iter().all(|s| !s.is_empty())
    }

    /// Hash fragment addressing this path (`#/<path>`).
    pub fn to_hash(&self) -> String {
        format!("{}{}", HASH_PREFIX, self.0)
    }
}

impl fmt::Display for RegistryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RegistryPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegistryPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for RegistryPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&NavigationTriple> for RegistryPath {
    fn from(triple: &NavigationTriple) -> Self {
        Self::from_triple(triple)
    }
}

/// The decomposed address of a documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationTriple {
    /// Top-level section, e.g. `components`
    pub section: String,

    /// Category within the section, e.g. `overlays`
    pub category: String,

    /// Page within the category, e.g. `drawer`
    pub item: String,
}

impl NavigationTriple {
    /// Create a triple from its three segments.
    pub fn new(
        section: impl Into<String>,
        category: impl Into<String>,
        item: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            category: category.into(),
            item: item.into(),
        }
    }

    /// The registry key for this triple.
    pub fn path(&self) -> RegistryPath {
        RegistryPath::from_triple(self)
    }

    /// The hash fragment for this triple (`#/section/category/item`).
    pub fn to_hash(&self) -> String {
        self.path().to_hash()
    }

    /// Parse a `section/category/item` path.
    ///
    /// Exactly three non-empty segments are required.
    pub fn parse_path(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.split('/').collect();
        match segments.as_slice() {
            [section, category, item] => Self::from_segments(path, section, category, item),
            _ => Err(DocnavError::invalid_path(
                path,
                format!("expected 3 segments, found {}", segments.len()),
            )),
        }
    }

    /// Parse a hash fragment such as `#/components/overlays/drawer`.
    ///
    /// The leading `#` and `/` are optional. An empty fragment is an error
    /// here; callers that treat it specially should check
    /// [`is_empty_hash`] first.
    pub fn parse_hash(hash: &str) -> Result<Self> {
        let body = strip_hash(hash);
        if body.is_empty() {
            return Err(DocnavError::invalid_path(hash, "empty hash fragment"));
        }
        Self::parse_path(body)
    }

    /// Parse the path carried by a cross-link event.
    ///
    /// Three segments map directly onto the triple. Two segments address a
    /// top-level page without its own category: `a/b` becomes `a/a/b`.
    pub fn parse_cross_link(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.split('/').collect();
        match segments.as_slice() {
            [section, category, item] => Self::from_segments(path, section, category, item),
            [section, item] => Self::from_segments(path, section, section, item),
            _ => Err(DocnavError::invalid_path(
                path,
                format!("expected 2 or 3 segments, found {}", segments.len()),
            )),
        }
    }

    fn from_segments(raw: &str, section: &str, category: &str, item: &str) -> Result<Self> {
        if section.is_empty() || category.is_empty() || item.is_empty() {
            return Err(DocnavError::invalid_path(raw, "empty segment"));
        }
        Ok(Self::new(section, category, item))
    }
}

impl fmt::Display for NavigationTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.section, self.category, self.item)
    }
}

/// Strip the leading `#` and `/` from a hash fragment.
pub fn strip_hash(hash: &str) -> &str {
    let body = hash.strip_prefix('#').unwrap_or(hash);
    body.strip_prefix('/').unwrap_or(body)
}

/// True for `""`, `"#"` and `"#/"`.
pub fn is_empty_hash(hash: &str) -> bool {
    strip_hash(hash).is_empty()
}

/// Turn a kebab-case id into a display title.
///
/// `"avatar-upload"` becomes `"Avatar Upload"`. Only the first ASCII
/// letter of each segment changes case.
pub fn titlecase(id: &str) -> String {
    id.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_to_hash() {
        let triple = NavigationTriple::new("components", "overlays", "drawer");
        assert_eq!(triple.to_hash(), "#/components/overlays/drawer");
        assert_eq!(triple.path().as_str(), "components/overlays/drawer");
    }

    #[test]
    fn test_parse_hash_with_and_without_prefix() {
        let expected = NavigationTriple::new("a", "b", "c");
        assert_eq!(NavigationTriple::parse_hash("#/a/b/c").unwrap(), expected);
        assert_eq!(NavigationTriple::parse_hash("#a/b/c").unwrap(), expected);
        assert_eq!(NavigationTriple::parse_hash("a/b/c").unwrap(), expected);
    }

    #[test]
    fn test_parse_hash_rejects_short_and_long() {
        assert!(NavigationTriple::parse_hash("#/a").is_err());
        assert!(NavigationTriple::parse_hash("#/a/b").is_err());
        assert!(NavigationTriple::parse_hash("#/a/b/c/d").is_err());
        assert!(NavigationTriple::parse_hash("#/a//c").is_err());
        assert!(NavigationTriple::parse_hash("#/").is_err());
    }

    #[test]
    fn test_parse_cross_link_two_segments() {
        let triple = NavigationTriple::parse_cross_link("foundation/color").unwrap();
        assert_eq!(triple, NavigationTriple::new("foundation", "foundation", "color"));
    }

    #[test]
    fn test_parse_cross_link_rejects_other_counts() {
        assert!(NavigationTriple::parse_cross_link("solo").is_err());
        assert!(NavigationTriple::parse_cross_link("a/b/c/d").is_err());
        assert!(NavigationTriple::parse_cross_link("/b").is_err());
    }

    #[test]
    fn test_empty_hash_detection() {
        assert!(is_empty_hash(""));
        assert!(is_empty_hash("#"));
        assert!(is_empty_hash("#/"));
        assert!(!is_empty_hash("#/a"));
    }

    #[test]
    fn test_titlecase() {
        assert_eq!(titlecase("avatar-upload"), "Avatar Upload");
        assert_eq!(titlecase("drawer"), "Drawer");
        assert_eq!(titlecase("date-picker-v2"), "Date Picker V2");
    }

    #[test]
    fn test_registry_path_canonical() {
        assert!(RegistryPath::from("a/b/c").is_canonical());
        assert!(!RegistryPath::from("a").is_canonical());
        assert!(!RegistryPath::from("a//c").is_canonical());
    }
}
