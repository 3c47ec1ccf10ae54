mod animation_controller;
mod chart_config;
pub mod chart_style;
mod draw_pipeline;
mod engine;
mod engine_snapshot;
mod interaction_controller;
mod plugin_dispatch;
mod skeleton;

pub use animation_controller::AnimationController;
pub use chart_config::ChartConfig;
pub use draw_pipeline::{DrawnChart, DrawnRow, LayerNode, draw_chart};
pub use engine::{ChartClickHandler, ChartEngine};
pub use engine_snapshot::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot};
pub use skeleton::{LayerBranch, SkeletonPresenter};

pub use crate::extensions::PluginEvent;
