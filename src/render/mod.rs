mod layer_stack;
mod null_renderer;
mod primitives;
mod scene;
mod svg;

pub use layer_stack::ChartLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{RectPrimitive, TextAnchor, TextBaseline, TextPrimitive, TextSpan};
pub use scene::{NodeClass, NodeId, Scene, SceneGroup, SceneNode, Shape};
pub use svg::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive the complete scene on every frame; they never see chart
/// data, configuration or interaction state.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer, parse_css_color};
