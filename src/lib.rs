//! hbar-chart: horizontal bar chart engine.
//!
//! Turns a small dataset into a vector scene with a staggered reveal
//! animation, optional count/label/total annotations, a loading skeleton
//! mode and click-to-select on bars. Hosts drive it with mount, render,
//! resize, animation-frame and click calls, and choose a `Renderer` to
//! present the scene.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine};
pub use crate::core::{ChartDatum, Margins, Viewport};
pub use error::{ChartError, ChartResult};
