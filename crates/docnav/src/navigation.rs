//! Navigation state and its synchronization with the URL hash
//!
//! The [`Navigator`] owns the current [`NavigationTriple`]. Four sources
//! move it:
//!
//! ```text
//!  select(item, category, section) ──┐
//!  on_hash_change()  ← location  ────┤
//!  cross-link event  ← CrossLinkBus ─┼──→ state ──→ location.set_hash()
//!  select_section(section_id) ───────┘
//! ```
//!
//! Every transition either applies completely or is dropped. Malformed
//! input never panics and never surfaces an error; it is logged at debug
//! level and the previous state is kept.

mod location;

pub use location::{HashLocation, MemoryLocation};

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::bus::{CrossLinkBus, CrossLinkEvent, Subscription};
use crate::config::NavConfig;
use crate::path::{is_empty_hash, NavigationTriple};
use crate::resolver::{PageDescriptor, PathResolver};
use crate::sitemap::Sitemap;

/// What triggered a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionSource {
    /// Explicit menu selection
    Select,
    /// The location's hash fragment changed
    HashChange,
    /// A cross-link event on the bus
    CrossLink,
    /// The section shortcut picked the section's first page
    SectionShortcut,
}

impl TransitionSource {
    /// Short name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionSource::Select => "select",
            TransitionSource::HashChange => "hash",
            TransitionSource::CrossLink => "cross-link",
            TransitionSource::SectionShortcut => "section",
        }
    }
}

/// Result of feeding an input to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// State moved to this triple
    Applied(NavigationTriple),
    /// Input was malformed or pointed nowhere; state unchanged
    Ignored,
}

impl Transition {
    /// Check whether the state changed hands.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}

struct NavigatorInner {
    config: NavConfig,
    sitemap: Arc<Sitemap>,
    location: Arc<dyn HashLocation>,
    bus: CrossLinkBus,
    state: Mutex<NavigationTriple>,
}

/// Owner of the current navigation triple.
///
/// Cloning yields another handle to the same state.
///
/// # Example
///
/// ```
/// use docnav::{CrossLinkBus, MemoryLocation, NavConfig, Navigator, Sitemap};
/// use std::sync::Arc;
///
/// let location = Arc::new(MemoryLocation::new(""));
/// let bus = CrossLinkBus::new();
/// let nav = Navigator::new(
///     NavConfig::default(),
///     Arc::new(Sitemap::default()),
///     location.clone(),
///     bus.clone(),
/// );
///
/// let _mounted = nav.mount();
/// assert_eq!(location.current(), "#/getting-started/introduction/overview");
///
/// bus.publish("foundation/color");
/// assert_eq!(location.current(), "#/foundation/foundation/color");
/// ```
#[derive(Clone)]
pub struct Navigator {
    inner: Arc<NavigatorInner>,
}

impl Navigator {
    /// Create a navigator positioned at the configured default route.
    ///
    /// Nothing is read from or written to the location until
    /// [`mount`](Self::mount) or [`on_hash_change`](Self::on_hash_change).
    pub fn new(
        config: NavConfig,
        sitemap: Arc<Sitemap>,
        location: Arc<dyn HashLocation>,
        bus: CrossLinkBus,
    ) -> Self {
        let state = Mutex::new(config.default_route.clone());
        Self {
            inner: Arc::new(NavigatorInner {
                config,
                sitemap,
                location,
                bus,
                state,
            }),
        }
    }

    /// Start listening.
    ///
    /// Runs the initial hash-change handling, so an empty fragment
    /// converges to the default route in memory and in the URL, then
    /// subscribes to cross-link events. Dropping the guard unsubscribes.
    pub fn mount(&self) -> MountGuard {
        self.on_hash_change();

        let weak: Weak<NavigatorInner> = Arc::downgrade(&self.inner);
        let subscription = self.inner.bus.subscribe(move |event| {
            // events after the navigator is gone are no-ops
            if let Some(inner) = weak.upgrade() {
                Navigator { inner }.on_cross_link(event);
            }
        });
        tracing::trace!(current = %self.current(), "navigator mounted");
        MountGuard { subscription }
    }

    /// Snapshot of the current triple.
    pub fn current(&self) -> NavigationTriple {
        self.state().clone()
    }

    /// The configuration in use.
    pub fn config(&self) -> &NavConfig {
        &self.inner.config
    }

    /// The bus this navigator listens on.
    pub fn bus(&self) -> &CrossLinkBus {
        &self.inner.bus
    }

    /// Explicit selection from a menu. Always applies and writes the hash.
    pub fn select(
        &self,
        item: impl Into<String>,
        category: impl Into<String>,
        section: impl Into<String>,
    ) -> Transition {
        let triple = NavigationTriple::new(section, category, item);
        self.apply(triple, TransitionSource::Select, true)
    }

    /// React to the location's hash fragment.
    ///
    /// An empty fragment applies the default route and writes it back. A
    /// well-formed fragment applies its triple without writing. Anything
    /// else is ignored.
    pub fn on_hash_change(&self) -> Transition {
        let hash = self.inner.location.hash();
        if is_empty_hash(&hash) {
            let default = self.inner.config.default_route.clone();
            return self.apply(default, TransitionSource::HashChange, true);
        }

        match NavigationTriple::parse_hash(&hash) {
            Ok(triple) => self.apply(triple, TransitionSource::HashChange, false),
            Err(err) => {
                tracing::debug!(%hash, error = %err, "ignoring malformed hash");
                Transition::Ignored
            }
        }
    }

    /// React to a cross-link event carrying a 2- or 3-segment path.
    pub fn on_cross_link(&self, event: &CrossLinkEvent) -> Transition {
        match NavigationTriple::parse_cross_link(&event.path) {
            Ok(triple) => self.apply(triple, TransitionSource::CrossLink, true),
            Err(err) => {
                tracing::debug!(path = %event.path, error = %err, "ignoring cross-link");
                Transition::Ignored
            }
        }
    }

    /// Jump to the first page of a section.
    ///
    /// Uses the section's first category and its first item, or the
    /// configured fallback item when the category lists none. Unknown
    /// sections and sections without categories are ignored.
    pub fn select_section(&self, section_id: &str) -> Transition {
        match self
            .inner
            .sitemap
            .first_route(section_id, &self.inner.config.fallback_item)
        {
            Some(triple) => self.apply(triple, TransitionSource::SectionShortcut, true),
            None => {
                tracing::debug!(section = section_id, "no route for section shortcut");
                Transition::Ignored
            }
        }
    }

    /// Resolve the current triple into a page descriptor.
    pub fn page(&self, resolver: &PathResolver) -> PageDescriptor {
        resolver.page(
            &self.current(),
            &self.inner.sitemap,
            &self.inner.config.fallback_item,
        )
    }

    fn apply(&self, triple: NavigationTriple, source: TransitionSource, write_hash: bool) -> Transition {
        *self.state() = triple.clone();
        tracing::trace!(source = source.as_str(), to = %triple, "navigation transition");

        // the lock is released first: a location may fire on_hash_change synchronously
        if write_hash {
            self.inner.location.set_hash(&triple.to_hash());
        }
        Transition::Applied(triple)
    }

    fn state(&self) -> MutexGuard<'_, NavigationTriple> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Navigator {{ current: {} }}", self.current())
    }
}

/// Keeps a mounted navigator subscribed to the bus.
#[derive(Debug)]
pub struct MountGuard {
    subscription: Subscription,
}

impl MountGuard {
    /// Unsubscribe now instead of at drop.
    pub fn unmount(self) {
        self.subscription.cancel();
    }
}
