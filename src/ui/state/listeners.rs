// SPDX-License-Identifier: MPL-2.0
//! Scoped scroll/resize listener registration.
//!
//! Each mounted image instance holds a [`ListenerGuard`]. While the guard is
//! alive the instance receives viewport notifications; dropping it (at
//! unmount) deregisters the instance. The app only subscribes to window
//! events while at least one listener is registered.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Process-unique identifier of a mounted instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Creates a new unique instance ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Set of instances currently listening for viewport changes.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<BTreeSet<InstanceId>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the set half-updated, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, BTreeSet<InstanceId>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a fresh instance and returns the guard that owns it.
    #[must_use = "dropping the guard deregisters the listener immediately"]
    pub fn register(&self) -> ListenerGuard {
        let id = InstanceId::new();
        self.lock().insert(id);
        tracing::trace!(instance = %id, "listener registered");
        ListenerGuard {
            id,
            registry: self.clone(),
        }
    }

    pub fn is_registered(&self, id: InstanceId) -> bool {
        self.lock().contains(&id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn deregister(&self, id: InstanceId) {
        if self.lock().remove(&id) {
            tracing::trace!(instance = %id, "listener deregistered");
        }
    }
}

/// Registration handle of one instance; deregisters on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    id: InstanceId,
    registry: ListenerRegistry,
}

impl ListenerGuard {
    pub fn id(&self) -> InstanceId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.deregister(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = InstanceId::new();
        let b = InstanceId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn guard_registers_until_dropped() {
        let registry = ListenerRegistry::new();
        let guard = registry.register();
        let id = guard.id();
        assert!(registry.is_registered(id));
        assert_eq!(registry.len(), 1);

        drop(guard);
        assert!(!registry.is_registered(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn each_mount_gets_its_own_registration() {
        let registry = ListenerRegistry::new();
        let first = registry.register();
        let second = registry.register();
        assert_eq!(registry.len(), 2);

        drop(first);
        assert!(registry.is_registered(second.id()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn clones_share_the_same_set() {
        let registry = ListenerRegistry::new();
        let view = registry.clone();
        let _guard = registry.register();
        assert_eq!(view.len(), 1);
    }
}
