use serde::{Deserialize, Serialize};

use crate::core::ChartDatum;
use crate::error::{ChartError, ChartResult};
use crate::render::{Renderer, Scene};

use super::{ChartConfig, ChartEngine};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable capture of the current drawing and the inputs behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub schema_version: u32,
    pub clock_ms: f64,
    pub settle_at_ms: Option<f64>,
    pub data: Vec<ChartDatum>,
    pub config: ChartConfig,
    pub scene: Scene,
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let snapshot: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if snapshot.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                snapshot.schema_version
            )));
        }
        Ok(snapshot)
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Captures the scene as currently sampled.
    #[must_use]
    pub fn snapshot(&self) -> Option<ChartSnapshot> {
        let content = self.rendered()?;
        Some(ChartSnapshot {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            clock_ms: self.clock_ms,
            settle_at_ms: content.timeline.settle_at(),
            data: content.data.clone(),
            config: content.config.clone(),
            scene: content.scene.clone(),
        })
    }

    /// The current drawing as it will look once every transition has ended.
    ///
    /// Does not touch the live scene or the engine clock.
    #[must_use]
    pub fn settled_scene(&self) -> Option<Scene> {
        let content = self.rendered()?;
        let mut scene = content.scene.clone();
        let settle_at = content.timeline.settle_at().unwrap_or(self.clock_ms);
        content.timeline.apply(&mut scene, settle_at.max(self.clock_ms));
        Some(scene)
    }
}
