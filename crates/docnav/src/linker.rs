//! Turning component names in prose into cross-links
//!
//! The linker knows every registry title plus a table of manual aliases.
//! It scans a string once and splits it into plain and linked segments.
//! Longer names are tried first at each position, so `"Text Button"` wins
//! over `"Text"`.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::bus::CrossLinkBus;
use crate::error::Result;
use crate::path::RegistryPath;
use crate::registry::ContentRegistry;

/// Manual display-name overrides for cross-linking.
///
/// Paths are not checked against the registry; a dangling alias shows up
/// as a not-found page when followed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: IndexMap<String, RegistryPath>,
}

impl AliasTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an alias.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<RegistryPath>) {
        self.entries.insert(name.into(), path.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, path: impl Into<RegistryPath>) -> Self {
        self.insert(name, path);
        self
    }

    /// Path for a display name.
    pub fn get(&self, name: &str) -> Option<&RegistryPath> {
        self.entries.get(name)
    }

    /// Parse a JSON object of `name → path`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All aliases in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegistryPath)> {
        self.entries.iter().map(|(name, path)| (name.as_str(), path))
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A run of text, linked or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSegment {
    /// The text as it appeared in the input
    pub text: String,

    /// Target path when the text is a link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<RegistryPath>,
}

impl LinkSegment {
    /// A plain text segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: None,
        }
    }

    /// A linked segment.
    pub fn link(text: impl Into<String>, path: RegistryPath) -> Self {
        Self {
            text: text.into(),
            path: Some(path),
        }
    }

    /// Check if this segment is a link.
    pub fn is_link(&self) -> bool {
        self.path.is_some()
    }

    /// Follow the link by publishing its path on the bus.
    ///
    /// Plain segments do nothing.
    pub fn activate(&self, bus: &CrossLinkBus) {
        if let Some(path) = &self.path {
            bus.publish(path.as_str());
        }
    }
}

/// Scans prose for known names.
#[derive(Debug, Clone)]
pub struct TextLinker {
    pattern: Option<Regex>,
    targets: HashMap<String, RegistryPath>,
}

impl TextLinker {
    /// Build a linker from registry titles and aliases. Aliases win when
    /// a name appears in both.
    pub fn new(registry: &ContentRegistry, aliases: &AliasTable) -> Result<Self> {
        let mut targets: HashMap<String, RegistryPath> = HashMap::new();
        for (title, path) in registry.titles() {
            targets.insert(title.to_string(), path.clone());
        }
        for (name, path) in aliases.iter() {
            targets.insert(name.to_string(), path.clone());
        }
        targets.retain(|name, _| !name.trim().is_empty());

        let pattern = build_pattern(targets.keys().map(String::as_str))?;
        Ok(Self { pattern, targets })
    }

    /// Build a linker from aliases alone.
    pub fn from_aliases(aliases: &AliasTable) -> Result<Self> {
        Self::new(&ContentRegistry::default(), aliases)
    }

    /// Number of names the linker recognises.
    pub fn name_count(&self) -> usize {
        self.targets.len()
    }

    /// Split `text` into plain and linked segments.
    pub fn link(&self, text: &str) -> Vec<LinkSegment> {
        self.scan(text, None)
    }

    /// Like [`link`](Self::link), but mentions of `current` stay plain so
    /// a page never links to itself.
    pub fn link_except(&self, text: &str, current: &RegistryPath) -> Vec<LinkSegment> {
        self.scan(text, Some(current))
    }

    fn scan(&self, text: &str, skip: Option<&RegistryPath>) -> Vec<LinkSegment> {
        let mut segments: Vec<LinkSegment> = Vec::new();
        let Some(pattern) = &self.pattern else {
            push_plain(&mut segments, text);
            return segments;
        };

        let mut cursor = 0;
        for found in pattern.find_iter(text) {
            let target = self
                .targets
                .get(found.as_str())
                .filter(|path| Some(*path) != skip);
            match target {
                Some(path) => {
                    push_plain(&mut segments, &text[cursor..found.start()]);
                    segments.push(LinkSegment::link(found.as_str(), path.clone()));
                }
                None => push_plain(&mut segments, &text[cursor..found.end()]),
            }
            cursor = found.end();
        }
        push_plain(&mut segments, &text[cursor..]);
        segments
    }
}

/// Append plain text, merging with a preceding plain segment.
fn push_plain(segments: &mut Vec<LinkSegment>, text: &str) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(last) if !last.is_link() => last.text.push_str(text),
        _ => segments.push(LinkSegment::plain(text)),
    }
}

/// One alternation over all names, longest first.
///
/// Word boundaries are only required on sides where the name itself
/// starts or ends with a character the regex engine treats as `\w`.
fn build_pattern<'a>(names: impl Iterator<Item = &'a str>) -> Result<Option<Regex>> {
    let mut names: Vec<&str> = names.collect();
    if names.is_empty() {
        return Ok(None);
    }
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let word_start = Regex::new(r"^\w")?;
    let word_end = Regex::new(r"\w$")?;
    let alternatives: Vec<String> = names
        .iter()
        .map(|name| {
            let lead = if word_start.is_match(name) { r"\b" } else { "" };
            let tail = if word_end.is_match(name) { r"\b" } else { "" };
            format!("{}{}{}", lead, regex::escape(name), tail)
        })
        .collect();

    Ok(Some(Regex::new(&format!("(?:{})", alternatives.join("|")))?))
}
