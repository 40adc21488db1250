//! One-shot visibility flag gating entrance transitions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::observer::{Observation, ObserverRegistry};

pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "trigger", rename_all = "snake_case")]
pub enum VisibilityTrigger {
    /// Flip after the first rendered frame.
    OnMount,
    /// Flip the first time at least `threshold` of the root is on screen.
    OnIntersect { threshold: f32 },
}

impl VisibilityTrigger {
    pub fn on_intersect() -> Self {
        VisibilityTrigger::OnIntersect {
            threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }

    pub fn on_intersect_at(threshold: f32) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_REVEAL_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        VisibilityTrigger::OnIntersect { threshold }
    }
}

/// Monotonic `false -> true` flag. Never reverts.
#[derive(Debug)]
pub struct VisibilityController {
    target: String,
    trigger: VisibilityTrigger,
    visible: bool,
    observation: Option<Observation>,
}

impl VisibilityController {
    /// Registers the trigger. `OnIntersect` holds an observation until the
    /// flip fires or the controller is dropped, whichever comes first.
    pub fn mount(
        target: impl Into<String>,
        trigger: VisibilityTrigger,
        observers: &ObserverRegistry,
    ) -> Self {
        let target = target.into();
        let observation = match trigger {
            VisibilityTrigger::OnMount => None,
            VisibilityTrigger::OnIntersect { threshold } => {
                Some(observers.observe(target.clone(), threshold))
            }
        };
        Self {
            target,
            trigger,
            visible: false,
            observation,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn trigger(&self) -> VisibilityTrigger {
        self.trigger
    }

    /// Called once per completed render pass. Returns `true` when this call
    /// performed the flip, so the caller can schedule another frame.
    pub fn frame_rendered(&mut self) -> bool {
        if self.visible || self.trigger != VisibilityTrigger::OnMount {
            return false;
        }
        self.reveal();
        true
    }

    /// Intersection callback with the visible fraction of the root element.
    /// Returns `true` when this call performed the flip.
    pub fn on_intersection(&mut self, visible_fraction: f32) -> bool {
        let VisibilityTrigger::OnIntersect { threshold } = self.trigger else {
            return false;
        };
        if self.visible || self.observation.is_none() {
            return false;
        }
        if visible_fraction.is_nan() || visible_fraction < threshold {
            return false;
        }
        self.reveal();
        true
    }

    /// Releases any live observation. Dropping the controller does the same.
    pub fn unmount(mut self) {
        self.observation.take();
    }

    fn reveal(&mut self) {
        self.visible = true;
        self.observation.take();
        debug!(target = %self.target, "entrance revealed");
    }
}
