//! Host-clocked transitions and numeric text tweens.

mod easing;
mod timeline;
mod transition;
mod tween;

pub use easing::Easing;
pub use timeline::{AnimatedProperty, AnimationTimeline, ScheduledAnimation, TextTarget};
pub use transition::Transition;
pub use tween::{NumberTween, PLACEHOLDER_TEXT, format_whole};
