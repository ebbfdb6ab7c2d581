//! Publish/subscribe channel for cross-link navigation requests
//!
//! Rendered prose asks for a navigation change by publishing a path; the
//! navigator listens without the renderer holding a reference to it.
//!
//! ```text
//! TextLinker ──publish("foundation/color")──→ CrossLinkBus ──→ Navigator
//! ```
//!
//! The bus is an explicit, cloneable handle rather than a global, so every
//! test can build its own.

use dashmap::DashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Name of the navigation event, for hosts that bridge to a DOM event.
pub const NAVIGATE_EVENT: &str = "docnav:navigate";

/// Payload of a cross-link navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossLinkEvent {
    /// `section/category/item` or `section/item`
    pub path: String,
}

impl CrossLinkEvent {
    /// Create an event for a path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Identifies one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Arc<dyn Fn(&CrossLinkEvent) + Send + Sync>;

struct BusInner {
    handlers: DashMap<SubscriptionId, Handler>,
    next_id: AtomicU64,
}

/// Cloneable handle to a shared cross-link channel.
#[derive(Clone)]
pub struct CrossLinkBus {
    inner: Arc<BusInner>,
}

impl Default for CrossLinkBus {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossLinkBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                handlers: DashMap::new(),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Deliver a navigation request to every subscriber.
    ///
    /// Handlers are collected before any is called, so a handler may
    /// subscribe or unsubscribe while the event is being delivered.
    pub fn publish(&self, path: impl Into<String>) {
        let event = CrossLinkEvent::new(path);
        let mut handlers: Vec<(SubscriptionId, Handler)> = self
            .inner
            .handlers
            .iter()
            .map(|entry| (*entry.key(), Arc::clone(entry.value())))
            .collect();
        handlers.sort_by_key(|(id, _)| *id);

        tracing::trace!(path = %event.path, subscribers = handlers.len(), "cross-link published");
        for (_, handler) in handlers {
            handler(&event);
        }
    }

    /// Register a handler. It stays registered until the returned guard
    /// is dropped.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&CrossLinkEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.handlers.insert(id, Arc::new(handler));
        Subscription {
            bus: self.clone(),
            id,
            armed: true,
        }
    }

    /// Remove a handler. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.handlers.remove(&id).is_some()
    }

    /// Number of registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.handlers.len()
    }
}

impl fmt::Debug for CrossLinkBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CrossLinkBus {{ subscribers: {} }}", self.subscriber_count())
    }
}

/// RAII guard that unsubscribes its handler when dropped.
pub struct Subscription {
    bus: CrossLinkBus,
    id: SubscriptionId,
    armed: bool,
}

impl Subscription {
    /// The subscription id.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Keep the handler registered past the guard's lifetime.
    ///
    /// The caller becomes responsible for calling
    /// [`CrossLinkBus::unsubscribe`].
    pub fn detach(mut self) -> SubscriptionId {
        self.armed = false;
        self.id
    }

    /// Unsubscribe now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.armed {
            self.bus.unsubscribe(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subscription {{ id: {:?}, armed: {} }}", self.id, self.armed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder(bus: &CrossLinkBus) -> (Subscription, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let sub = bus.subscribe(move |event| sink.lock().unwrap().push(event.path.clone()));
        (sub, seen)
    }

    #[test]
    fn test_publish_reaches_subscribers() {
        let bus = CrossLinkBus::new();
        let (_a, seen_a) = recorder(&bus);
        let (_b, seen_b) = recorder(&bus);

        bus.publish("foundation/color");

        assert_eq!(*seen_a.lock().unwrap(), vec!["foundation/color"]);
        assert_eq!(*seen_b.lock().unwrap(), vec!["foundation/color"]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = CrossLinkBus::new();
        let (sub, seen) = recorder(&bus);
        assert_eq!(bus.subscriber_count(), 1);

        drop(sub);
        bus.publish("a/b/c");

        assert_eq!(bus.subscriber_count(), 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_cancel_unsubscribes() {
        let bus = CrossLinkBus::new();
        let (sub, seen) = recorder(&bus);

        sub.cancel();
        bus.publish("a/b/c");

        assert_eq!(bus.subscriber_count(), 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_detach_and_manual_unsubscribe() {
        let bus = CrossLinkBus::new();
        let (sub, seen) = recorder(&bus);
        let id = sub.detach();

        bus.publish("a/b");
        assert_eq!(seen.lock().unwrap().len(), 1);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let bus = CrossLinkBus::new();
        bus.publish("a/b/c");
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_handler_may_unsubscribe_during_publish() {
        let bus = CrossLinkBus::new();
        let slot: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));
        let inner_bus = bus.clone();
        let inner_slot = Arc::clone(&slot);
        let id = bus
            .subscribe(move |_| {
                if let Some(id) = inner_slot.lock().unwrap().take() {
                    inner_bus.unsubscribe(id);
                }
            })
            .detach();
        *slot.lock().unwrap() = Some(id);

        bus.publish("a/b/c");

        assert_eq!(bus.subscriber_count(), 0);
    }
}
