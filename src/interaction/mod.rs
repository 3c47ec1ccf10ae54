//! Surface listeners and click classification.

mod listeners;

pub use listeners::{ListenerId, ListenerKind, ListenerRegistry};

use serde::{Deserialize, Serialize};

use crate::render::{NodeClass, NodeId, Scene};

/// Gate deciding whether bar clicks reach the host callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickPolicy {
    pub clickable_bars: bool,
    pub loading: bool,
}

impl ClickPolicy {
    #[must_use]
    pub fn accepts_clicks(self) -> bool {
        self.clickable_bars && !self.loading
    }
}

/// Outcome of classifying one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// No click listener is attached (unmounted, or nothing rendered yet).
    Unbound,
    /// A bar was hit; carries its dataset row.
    Bar { index: usize },
    /// Bars are not clickable right now.
    Disabled,
    /// The target is background, text or a placeholder.
    NotABar,
    /// The target node does not belong to the current scene.
    Stale,
    /// The bar refers to a row the current dataset does not have.
    OutOfRange { index: usize },
}

/// Classifies a click on `target` (or on the background when `None`).
#[must_use]
pub fn classify_click(
    scene: &Scene,
    target: Option<NodeId>,
    policy: ClickPolicy,
    row_count: usize,
) -> ClickOutcome {
    if !policy.accepts_clicks() {
        return ClickOutcome::Disabled;
    }
    let Some(target) = target else {
        return ClickOutcome::NotABar;
    };
    let Some(node) = scene.node(target) else {
        return ClickOutcome::Stale;
    };
    if node.class != NodeClass::Bar {
        return ClickOutcome::NotABar;
    }
    match node.datum_index {
        Some(index) if index < row_count => ClickOutcome::Bar { index },
        Some(index) => ClickOutcome::OutOfRange { index },
        None => ClickOutcome::NotABar,
    }
}

/// Resolves a surface-space point to the topmost node under it.
#[must_use]
pub fn hit_test(scene: &Scene, x: f64, y: f64) -> Option<NodeId> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    scene.node_at(x, y).map(|node| node.id)
}
