//! Bookkeeping for live viewport-intersection observations.
//!
//! The rendering layer owns the actual geometry. It asks the registry which
//! targets are still being watched so it only measures those, and the
//! controllers hold [`Observation`] guards so an unmounted component can never
//! leave a dangling registration behind.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt,
    rc::{Rc, Weak},
};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObservationId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ObservedTarget {
    pub id: ObservationId,
    pub target: String,
    pub threshold: f32,
}

#[derive(Default)]
struct RegistryInner {
    next_id: u64,
    active: BTreeMap<ObservationId, ObservedTarget>,
}

#[derive(Clone, Default)]
pub struct ObserverRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&self, target: impl Into<String>, threshold: f32) -> Observation {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = ObservationId(inner.next_id);
        let target = target.into();
        debug!(target = %target, threshold, "observing viewport intersection");
        inner.active.insert(
            id,
            ObservedTarget {
                id,
                target,
                threshold,
            },
        );
        Observation {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn active_targets(&self) -> Vec<ObservedTarget> {
        self.inner.borrow().active.values().cloned().collect()
    }

    pub fn is_observing(&self, target: &str) -> bool {
        self.inner
            .borrow()
            .active
            .values()
            .any(|observed| observed.target == target)
    }

    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("active", &self.active_count())
            .finish()
    }
}

/// A live registration; deregisters itself on drop.
#[must_use = "dropping the observation stops observing immediately"]
pub struct Observation {
    id: ObservationId,
    registry: Weak<RefCell<RegistryInner>>,
}

impl Observation {
    pub fn id(&self) -> ObservationId {
        self.id
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = registry.borrow_mut().active.remove(&self.id);
        if let Some(observed) = removed {
            debug!(target = %observed.target, "stopped observing viewport intersection");
        }
    }
}

impl fmt::Debug for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observation").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_observation_deregisters_target() {
        let registry = ObserverRegistry::new();
        let about = registry.observe("about", 0.2);
        let projects = registry.observe("projects", 0.1);
        assert_eq!(registry.active_count(), 2);
        assert!(registry.is_observing("about"));

        drop(about);
        assert!(!registry.is_observing("about"));
        assert_eq!(registry.active_targets().len(), 1);
        assert_eq!(registry.active_targets()[0].id, projects.id());
    }

    #[test]
    fn observation_outliving_registry_drops_quietly() {
        let registry = ObserverRegistry::new();
        let observation = registry.observe("contact", 0.5);
        drop(registry);
        drop(observation);
    }
}
