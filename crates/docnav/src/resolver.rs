//! Resolution of navigation triples into page descriptors
//!
//! The resolver is a pure function of the triple and the immutable
//! registry. Unknown paths are not errors: they resolve to
//! [`Lookup::NotFound`] with a title derived from the item id.

use serde::Serialize;
use std::sync::Arc;

use crate::path::{titlecase, NavigationTriple, RegistryPath};
use crate::registry::{ContentRegistry, Lookup};
use crate::sitemap::Sitemap;

/// Outcome of resolving a triple against the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The record, or `NotFound`
    pub record: Lookup,

    /// The registry key that was looked up
    pub path: RegistryPath,
}

/// One step of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Display label
    pub label: String,

    /// Hash fragment the crumb links to
    pub href: String,

    /// True only for the current page
    pub active: bool,
}

/// Everything a renderer needs to draw the current page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDescriptor {
    /// Record title, or the fallback title when nothing is registered
    pub title: String,

    /// The record, serialized as `null` when not found
    pub record: Lookup,

    /// Registry key of the current page
    pub current_path: RegistryPath,

    /// Section, category and item crumbs, in that order
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Resolves triples against a shared registry.
#[derive(Debug, Clone)]
pub struct PathResolver {
    registry: Arc<ContentRegistry>,
}

impl PathResolver {
    /// Create a resolver over a registry.
    pub fn new(registry: Arc<ContentRegistry>) -> Self {
        Self { registry }
    }

    /// The registry being resolved against.
    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    /// Look up the record for a triple.
    pub fn resolve(&self, triple: &NavigationTriple) -> Resolution {
        let path = triple.path();
        let record = self.registry.lookup(path.as_str());
        Resolution { record, path }
    }

    /// Title for a triple: the record title, or the titlecased item id.
    pub fn title(&self, triple: &NavigationTriple) -> String {
        match self.resolve(triple).record {
            Lookup::Found(record) => record.title().to_string(),
            Lookup::NotFound => fallback_title(&triple.item),
        }
    }

    /// Build the full page descriptor for a triple.
    ///
    /// `fallback_item` is the item id used for section and category crumbs
    /// whose category lists no items; pass the navigator's configured
    /// value so crumbs land where the section shortcut does.
    pub fn page(
        &self,
        triple: &NavigationTriple,
        sitemap: &Sitemap,
        fallback_item: &str,
    ) -> PageDescriptor {
        let Resolution { record, path } = self.resolve(triple);
        let title = match &record {
            Lookup::Found(found) => found.title().to_string(),
            Lookup::NotFound => fallback_title(&triple.item),
        };
        let breadcrumbs = breadcrumbs(triple, sitemap, fallback_item);

        PageDescriptor {
            title,
            record,
            current_path: path,
            breadcrumbs,
        }
    }
}

/// Section, category and item crumbs for a triple.
fn breadcrumbs(triple: &NavigationTriple, sitemap: &Sitemap, fallback_item: &str) -> Vec<Breadcrumb> {
    let current = triple.to_hash();
    let mut crumbs = Vec::with_capacity(3);

    let section_href = sitemap
        .first_route(&triple.section, fallback_item)
        .map(|t| t.to_hash())
        .unwrap_or_else(|| current.clone());
    crumbs.push(Breadcrumb {
        label: sitemap.section_label(&triple.section),
        href: section_href,
        active: false,
    });

    // a/a/b pages have no category of their own
    if triple.category != triple.section {
        let category_href = sitemap
            .first_route_in_category(&triple.section, &triple.category, fallback_item)
            .map(|t| t.to_hash())
            .unwrap_or_else(|| current.clone());
        crumbs.push(Breadcrumb {
            label: sitemap.category_label(&triple.section, &triple.category),
            href: category_href,
            active: false,
        });
    }

    crumbs.push(Breadcrumb {
        label: sitemap.item_label(triple),
        href: current,
        active: true,
    });
    crumbs
}

/// Title shown for an item with no registered record.
///
/// ```
/// assert_eq!(docnav::resolver::fallback_title("avatar-upload"), "Avatar Upload");
/// ```
pub fn fallback_title(item: &str) -> String {
    titlecase(item)
}
