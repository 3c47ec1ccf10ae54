use tracing::{debug, trace};

use crate::core::ChartDatum;
use crate::interaction::{ClickOutcome, ListenerKind, classify_click, hit_test};
use crate::render::{NodeId, Renderer};

use super::{ChartEngine, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    /// Registers the callback invoked with the clicked bar's row.
    pub fn set_on_chart_click<F>(&mut self, handler: F)
    where
        F: FnMut(&ChartDatum) + 'static,
    {
        self.on_chart_click = Some(Box::new(handler));
    }

    pub fn clear_on_chart_click(&mut self) {
        self.on_chart_click = None;
    }

    /// Handles a click at surface coordinates, resolving the topmost node.
    pub fn click_at(&mut self, x: f64, y: f64) -> ClickOutcome {
        let target = self
            .rendered()
            .and_then(|content| hit_test(&content.scene, x, y));
        self.dispatch_click(target)
    }

    /// Handles a click on a node the host already resolved.
    pub fn click_node(&mut self, node: NodeId) -> ClickOutcome {
        self.dispatch_click(Some(node))
    }

    fn dispatch_click(&mut self, target: Option<NodeId>) -> ClickOutcome {
        if !self.listeners.is_active(ListenerKind::SurfaceClick) {
            trace!("click ignored: no surface listener");
            return ClickOutcome::Unbound;
        }
        let Some(content) = self
            .surface
            .as_ref()
            .and_then(|surface| surface.content.as_ref())
        else {
            return ClickOutcome::Unbound;
        };

        let outcome = classify_click(
            &content.scene,
            target,
            content.config.click_policy(),
            content.data.len(),
        );
        match outcome {
            ClickOutcome::Bar { index } => {
                if let (Some(handler), Some(datum)) =
                    (self.on_chart_click.as_mut(), content.data.get(index))
                {
                    handler(datum);
                }
                trace!(index, "bar clicked");
                self.emit_plugin_event(PluginEvent::BarClicked { index });
            }
            ClickOutcome::OutOfRange { index } => {
                debug!(
                    index,
                    rows = content.data.len(),
                    "click ignored: bar index outside dataset"
                );
            }
            ClickOutcome::Stale => debug!("click ignored: node from a previous render"),
            other => trace!(?other, "click ignored"),
        }
        outcome
    }
}
