//! Hash fragment storage the navigator reads and writes

use std::sync::{Mutex, MutexGuard};

/// The address-bar fragment as seen by the navigator.
///
/// A browser host implements this over `window.location.hash` and calls
/// [`Navigator::on_hash_change`](super::Navigator::on_hash_change) from
/// its `hashchange` listener.
pub trait HashLocation: Send + Sync {
    /// Current fragment, including the leading `#` if any.
    fn hash(&self) -> String;

    /// Replace the fragment.
    fn set_hash(&self, hash: &str);
}

/// In-memory location that records every write.
///
/// Writes do not call back into the navigator; call `on_hash_change`
/// yourself to simulate the browser echoing the change.
#[derive(Debug, Default)]
pub struct MemoryLocation {
    hash: Mutex<String>,
    writes: Mutex<Vec<String>>,
}

impl MemoryLocation {
    /// Create a location holding `hash`.
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: Mutex::new(hash.into()),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Current fragment.
    pub fn current(&self) -> String {
        lock(&self.hash).clone()
    }

    /// Change the fragment from outside, as the user editing the URL or
    /// pressing back would. Not recorded as a navigator write.
    pub fn replace(&self, hash: impl Into<String>) {
        *lock(&self.hash) = hash.into();
    }

    /// Every fragment written through [`HashLocation::set_hash`], oldest first.
    pub fn writes(&self) -> Vec<String> {
        lock(&self.writes).clone()
    }
}

impl HashLocation for MemoryLocation {
    fn hash(&self) -> String {
        self.current()
    }

    fn set_hash(&self, hash: &str) {
        *lock(&self.hash) = hash.to_string();
        lock(&self.writes).push(hash.to_string());
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_hash_is_recorded() {
        let location = MemoryLocation::new("");
        location.set_hash("#/a/b/c");
        location.set_hash("#/d/e/f");

        assert_eq!(location.hash(), "#/d/e/f");
        assert_eq!(location.writes(), vec!["#/a/b/c", "#/d/e/f"]);
    }

    #[test]
    fn test_replace_is_not_recorded() {
        let location = MemoryLocation::new("#/a/b/c");
        location.replace("#/x");

        assert_eq!(location.hash(), "#/x");
        assert!(location.writes().is_empty());
    }
}
