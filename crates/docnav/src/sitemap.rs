//! Menu tree of sections, categories and items

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::path::{titlecase, NavigationTriple};

/// A leaf page in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Item id, the third path segment
    pub id: String,

    /// Menu label
    pub label: String,
}

/// A group of items within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id, the second path segment
    pub id: String,

    /// Menu label
    pub label: String,

    /// Items in menu order; may be empty
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// A top-level section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section id, the first path segment
    pub id: String,

    /// Menu label
    pub label: String,

    /// Categories in menu order
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Ordered menu tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sitemap {
    /// Sections in menu order
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl NavItem {
    /// Create an item.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl Category {
    /// Create a category with items.
    pub fn new(id: impl Into<String>, label: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            items,
        }
    }
}

impl Section {
    /// Create a section with categories.
    pub fn new(id: impl Into<String>, label: impl Into<String>, categories: Vec<Category>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            categories,
        }
    }

    fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

impl Sitemap {
    /// Create a sitemap from sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Parse a sitemap from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Find a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// First page of a section.
    ///
    /// Takes the section's first category and that category's first item,
    /// or `fallback_item` when the category has no items. Returns `None`
    /// for an unknown section or one without categories.
    pub fn first_route(&self, section_id: &str, fallback_item: &str) -> Option<NavigationTriple> {
        let section = self.section(section_id)?;
        let category = section.categories.first()?;
        Some(Self::category_route(section, category, fallback_item))
    }

    /// First page of a category within a section.
    pub fn first_route_in_category(
        &self,
        section_id: &str,
        category_id: &str,
        fallback_item: &str,
    ) -> Option<NavigationTriple> {
        let section = self.section(section_id)?;
        let category = section.category(category_id)?;
        Some(Self::category_route(section, category, fallback_item))
    }

    fn category_route(section: &Section, category: &Category, fallback_item: &str) -> NavigationTriple {
        let item = category
            .items
            .first()
            .map(|i| i.id.as_str())
            .unwrap_or(fallback_item);
        NavigationTriple::new(&section.id, &category.id, item)
    }

    /// Menu label of a section, or the titlecased id.
    pub fn section_label(&self, section_id: &str) -> String {
        self.section(section_id)
            .map(|s| s.label.clone())
            .unwrap_or_else(|| titlecase(section_id))
    }

    /// Menu label of a category, or the titlecased id.
    pub fn category_label(&self, section_id: &str, category_id: &str) -> String {
        self.section(section_id)
            .and_then(|s| s.category(category_id))
            .map(|c| c.label.clone())
            .unwrap_or_else(|| titlecase(category_id))
    }

    /// Menu label of the item a triple points at, or the titlecased id.
    pub fn item_label(&self, triple: &NavigationTriple) -> String {
        self.section(&triple.section)
            .and_then(|s| s.category(&triple.category))
            .and_then(|c| c.items.iter().find(|i| i.id == triple.item))
            .map(|i| i.label.clone())
            .unwrap_or_else(|| titlecase(&triple.item))
    }

    /// Every item route in menu order.
    pub fn routes(&self) -> impl Iterator<Item = NavigationTriple> + '_ {
        self.sections.iter().flat_map(|section| {
            section.categories.iter().flat_map(move |category| {
                category
                    .items
                    .iter()
                    .map(move |item| NavigationTriple::new(&section.id, &category.id, &item.id))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sitemap() -> Sitemap {
        Sitemap::new(vec![
            Section::new(
                "components",
                "Components",
                vec![
                    Category::new(
                        "overlays",
                        "Overlays",
                        vec![NavItem::new("drawer", "Drawer"), NavItem::new("modal", "Modal")],
                    ),
                    Category::new("inputs", "Inputs", vec![NavItem::new("button", "Button")]),
                ],
            ),
            Section::new(
                "patterns",
                "Patterns",
                vec![Category::new("layouts", "Layouts", vec![])],
            ),
            Section::new("empty", "Empty", vec![]),
        ])
    }

    #[test]
    fn test_first_route_takes_first_category_and_item() {
        assert_eq!(
            sitemap().first_route("components", "overview"),
            Some(NavigationTriple::new("components", "overlays", "drawer"))
        );
    }

    #[test]
    fn test_first_route_falls_back_when_category_has_no_items() {
        assert_eq!(
            sitemap().first_route("patterns", "overview"),
            Some(NavigationTriple::new("patterns", "layouts", "overview"))
        );
    }

    #[test]
    fn test_first_route_unknown_or_empty_section() {
        assert_eq!(sitemap().first_route("missing", "overview"), None);
        assert_eq!(sitemap().first_route("empty", "overview"), None);
    }

    #[test]
    fn test_labels_fall_back_to_titlecase() {
        let map = sitemap();
        assert_eq!(map.section_label("components"), "Components");
        assert_eq!(map.section_label("getting-started"), "Getting Started");
        assert_eq!(map.category_label("components", "form-controls"), "Form Controls");
        assert_eq!(
            map.item_label(&NavigationTriple::new("components", "overlays", "modal")),
            "Modal"
        );
    }

    #[test]
    fn test_routes_in_menu_order() {
        let hashes: Vec<String> = sitemap().routes().map(|t| t.to_hash()).collect();
        assert_eq!(
            hashes,
            vec![
                "#/components/overlays/drawer",
                "#/components/overlays/modal",
                "#/components/inputs/button",
            ]
        );
    }
}
