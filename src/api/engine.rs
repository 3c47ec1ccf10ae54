use tracing::{debug, trace, warn};

use crate::animation::AnimationTimeline;
use crate::core::{ChartDatum, ChartLayout, Viewport, validate_data};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartPlugin;
use crate::interaction::{ListenerKind, ListenerRegistry};
use crate::render::{Renderer, Scene};

use super::animation_controller::AnimationController;
use super::draw_pipeline::{DrawnChart, draw_chart};
use super::{ChartConfig, PluginEvent};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Host click callback.
pub type ChartClickHandler = Box<dyn FnMut(&ChartDatum)>;

/// Everything produced by the latest render pass.
pub(super) struct RenderedChart {
    pub(super) data: Vec<ChartDatum>,
    pub(super) config: ChartConfig,
    pub(super) layout: ChartLayout,
    pub(super) scene: Scene,
    pub(super) timeline: AnimationTimeline,
    pub(super) settled_reported: bool,
}

pub(super) struct MountedSurface {
    pub(super) viewport: Viewport,
    pub(super) content: Option<RenderedChart>,
}

/// Host-facing chart component.
///
/// The engine owns the drawing surface between `mount` and `unmount`, and
/// the two subscriptions attached to it: one surface click listener and one
/// viewport resize listener. Every `render` rebuilds the whole scene.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) surface: Option<MountedSurface>,
    pub(super) listeners: ListenerRegistry,
    pub(super) on_chart_click: Option<ChartClickHandler>,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) clock_ms: f64,
    pub(super) generation: u64,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            surface: None,
            listeners: ListenerRegistry::default(),
            on_chart_click: None,
            plugins: Vec::new(),
            clock_ms: 0.0,
            generation: 0,
        }
    }

    /// Attaches a fresh drawing surface and subscribes to viewport resizes.
    pub fn mount(&mut self, viewport: Viewport) -> ChartResult<()> {
        viewport.validate()?;
        self.listeners.deregister(ListenerKind::SurfaceClick);
        self.surface = Some(MountedSurface {
            viewport,
            content: None,
        });
        self.listeners.register(ListenerKind::ViewportResize);
        debug!(width = viewport.width, height = viewport.height, "chart mounted");
        self.emit_plugin_event(PluginEvent::Mounted { viewport });
        Ok(())
    }

    /// Drops every listener and the surface with its scene.
    pub fn unmount(&mut self) {
        self.listeners.deregister_all();
        if self.surface.take().is_some() {
            debug!("chart unmounted");
            self.emit_plugin_event(PluginEvent::Unmounted);
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Rebuilds the chart from scratch for `data` and `config`.
    ///
    /// Without a mounted surface this does nothing and succeeds. Invalid input
    /// leaves the previous drawing untouched.
    pub fn render(&mut self, data: Vec<ChartDatum>, config: ChartConfig) -> ChartResult<()> {
        if self.surface.is_none() {
            debug!(rows = data.len(), "render skipped: surface not mounted");
            return Ok(());
        }
        validate_data(&data)?;
        config.validate()?;
        self.rebuild(data, config)
    }

    /// Applies a new container size and re-renders the last inputs.
    ///
    /// Ignored unless the resize subscription is active.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        viewport.validate()?;
        if !self.listeners.is_active(ListenerKind::ViewportResize) {
            trace!("resize ignored: no resize subscription");
            return Ok(());
        }
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        surface.viewport = viewport;
        let inputs = surface
            .content
            .as_ref()
            .map(|content| (content.data.clone(), content.config.clone()));

        debug!(width = viewport.width, height = viewport.height, "chart resized");
        self.emit_plugin_event(PluginEvent::Resized { viewport });
        match inputs {
            Some((data, config)) => self.rebuild(data, config),
            None => Ok(()),
        }
    }

    /// Samples running animations at host time `now_ms` and presents the frame.
    pub fn advance_to(&mut self, now_ms: f64) -> ChartResult<()> {
        if !now_ms.is_finite() {
            return Err(ChartError::InvalidData(
                "animation clock must be finite".to_owned(),
            ));
        }
        if now_ms < self.clock_ms {
            warn!(
                now_ms,
                previous_ms = self.clock_ms,
                "animation clock moved backwards"
            );
        }
        self.clock_ms = now_ms;

        let Some(content) = self
            .surface
            .as_mut()
            .and_then(|surface| surface.content.as_mut())
        else {
            return Ok(());
        };
        content.timeline.apply(&mut content.scene, now_ms);
        let newly_settled = !content.settled_reported && content.timeline.is_settled(now_ms);
        if newly_settled {
            content.settled_reported = true;
        }
        let settle_at = content.timeline.settle_at().unwrap_or(now_ms);
        self.renderer.render(&content.scene)?;

        if newly_settled {
            trace!(settle_at, "animation settled");
            self.emit_plugin_event(PluginEvent::AnimationSettled { at_ms: settle_at });
        }
        Ok(())
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// `true` while any transition of the current drawing is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.rendered()
            .is_some_and(|content| !content.timeline.is_settled(self.clock_ms))
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.surface.as_ref().map(|surface| surface.viewport)
    }

    /// Current drawing, sampled at the last `advance_to` time.
    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.rendered().map(|content| &content.scene)
    }

    #[must_use]
    pub fn timeline(&self) -> Option<&AnimationTimeline> {
        self.rendered().map(|content| &content.timeline)
    }

    #[must_use]
    pub fn layout(&self) -> Option<&ChartLayout> {
        self.rendered().map(|content| &content.layout)
    }

    #[must_use]
    pub fn data(&self) -> &[ChartDatum] {
        self.rendered()
            .map_or(&[][..], |content| content.data.as_slice())
    }

    #[must_use]
    pub fn config(&self) -> Option<&ChartConfig> {
        self.rendered().map(|content| &content.config)
    }

    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Presents the current scene into an external cairo context.
    ///
    /// This path serves GTK draw callbacks that own their own context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let Some(content) = self
            .surface
            .as_ref()
            .and_then(|surface| surface.content.as_ref())
        else {
            return Ok(());
        };
        self.renderer
            .render_on_cairo_context(context, &content.scene)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn rendered(&self) -> Option<&RenderedChart> {
        self.surface
            .as_ref()
            .and_then(|surface| surface.content.as_ref())
    }

    fn rebuild(&mut self, data: Vec<ChartDatum>, config: ChartConfig) -> ChartResult<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        let generation = self.generation + 1;
        let drawn = draw_chart(&data, &config, surface.viewport, generation)?;
        let timeline = AnimationController::schedule(&drawn, &data, &config, self.clock_ms)?;
        let DrawnChart {
            mut scene, layout, ..
        } = drawn;
        timeline.apply(&mut scene, self.clock_ms);

        self.generation = generation;
        let rows = data.len();
        surface.content = Some(RenderedChart {
            data,
            config,
            layout,
            scene,
            timeline,
            settled_reported: false,
        });
        self.listeners.register(ListenerKind::SurfaceClick);
        debug!(rows, generation, "chart rendered");

        if let Some(content) = surface.content.as_ref() {
            self.renderer.render(&content.scene)?;
        }
        self.emit_plugin_event(PluginEvent::Rendered { rows });
        Ok(())
    }
}
