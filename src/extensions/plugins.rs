use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    /// `None` while the chart is not mounted.
    pub viewport: Option<Viewport>,
    pub rows: usize,
    pub loading: bool,
    pub clock_ms: f64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    Mounted { viewport: Viewport },
    Unmounted,
    Rendered { rows: usize },
    Resized { viewport: Viewport },
    BarClicked { index: usize },
    AnimationSettled { at_ms: f64 },
}

/// Observer hook for host-side logic such as analytics or debugging overlays.
///
/// Plugins see events and a context copy; they cannot mutate the chart.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
