use serde::{Deserialize, Serialize};

use crate::animation::{NumberTween, Transition};
use crate::render::{NodeId, Scene, Shape};

/// Which text run of a node a tween writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextTarget {
    Body,
    Span(usize),
}

/// Node property driven by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimatedProperty {
    /// Rect width grows from 0.
    Width { to: f64 },
    /// Horizontal position of a rect or text.
    X { from: f64, to: f64 },
    Text { target: TextTarget, tween: NumberTween },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledAnimation {
    pub node: NodeId,
    pub transition: Transition,
    pub property: AnimatedProperty,
}

/// All transitions started by one render pass.
///
/// The timeline holds no clock of its own; hosts sample it at the timestamps
/// of their animation frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationTimeline {
    entries: Vec<ScheduledAnimation>,
}

impl AnimationTimeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, node: NodeId, transition: Transition, property: AnimatedProperty) {
        self.entries.push(ScheduledAnimation {
            node,
            transition,
            property,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[ScheduledAnimation] {
        &self.entries
    }

    pub fn entries_for(&self, node: NodeId) -> impl Iterator<Item = &ScheduledAnimation> {
        self.entries.iter().filter(move |entry| entry.node == node)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time at which the last transition ends, or `None` when nothing is scheduled.
    #[must_use]
    pub fn settle_at(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|entry| entry.transition.ends_at())
            .reduce(f64::max)
    }

    #[must_use]
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.entries
            .iter()
            .all(|entry| entry.transition.is_finished(now_ms))
    }

    /// Writes every animated property at `now_ms` into `scene`.
    ///
    /// Entries whose node is missing from the scene are skipped. Returns the
    /// number of properties written.
    pub fn apply(&self, scene: &mut Scene, now_ms: f64) -> usize {
        let mut written = 0;
        for entry in &self.entries {
            let Some(node) = scene.node_mut(entry.node) else {
                continue;
            };
            let progress = entry.transition.progress(now_ms);
            let applied = match (entry.property, &mut node.shape) {
                (AnimatedProperty::Width { to }, Shape::Rect(rect)) => {
                    rect.width = to * progress;
                    true
                }
                (AnimatedProperty::X { from, to }, Shape::Rect(rect)) => {
                    rect.x = from + (to - from) * progress;
                    true
                }
                (AnimatedProperty::X { from, to }, Shape::Text(text)) => {
                    text.x = from + (to - from) * progress;
                    true
                }
                (AnimatedProperty::Text { target, tween }, Shape::Text(text)) => {
                    if entry.transition.has_started(now_ms) {
                        let value = tween.text_at(progress);
                        match target {
                            TextTarget::Body => text.text = value,
                            TextTarget::Span(index) => {
                                if let Some(span) = text.spans.get_mut(index) {
                                    span.text = value;
                                }
                            }
                        }
                        true
                    } else {
                        false
                    }
                }
                _ => false,
            };
            if applied {
                written += 1;
            }
        }
        written
    }
}
