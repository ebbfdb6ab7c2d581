//! # Docnav
//!
//! Content registry and navigation core for design-system documentation
//! sites.
//!
//! Pages are addressed by a `(section, category, item)` triple that is
//! mirrored in the URL hash as `#/section/category/item`. Docnav keeps that
//! triple, the hash and cross-link requests from rendered prose in step,
//! and resolves the current triple against an immutable registry of
//! documentation records.
//!
//! ## Architecture
//!
//! - **Registry**: partial maps merged once into [`ContentRegistry`]
//! - **Resolver**: triple → [`PageDescriptor`] with fallback title and breadcrumbs
//! - **Navigator**: single owner of the current triple, synced with a [`HashLocation`]
//! - **Cross-links**: [`TextLinker`] finds names in prose, [`CrossLinkBus`] carries the request
//!
//! Rendering is left to the host; docnav only produces descriptors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bus;
pub mod config;
pub mod error;
pub mod linker;
pub mod navigation;
pub mod path;
pub mod record;
pub mod registry;
pub mod resolver;
pub mod sitemap;

// Re-export main types
pub use bus::{CrossLinkBus, CrossLinkEvent, Subscription, SubscriptionId, NAVIGATE_EVENT};
pub use config::NavConfig;
pub use error::{DocnavError, Result};
pub use linker::{AliasTable, LinkSegment, TextLinker};
pub use navigation::{
    HashLocation, MemoryLocation, MountGuard, Navigator, Transition, TransitionSource,
};
pub use path::{NavigationTriple, RegistryPath};
pub use record::{ComponentRef, DemoRef, RegistrationRecord, Rendering};
pub use registry::{ContentRegistry, Lookup, PartialRegistry};
pub use resolver::{Breadcrumb, PageDescriptor, PathResolver, Resolution};
pub use sitemap::{Category, NavItem, Section, Sitemap};

/// Docnav version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
