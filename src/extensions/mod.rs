//! Optional hooks layered on top of the engine.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
