use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartLayerKind, RectPrimitive, TextPrimitive};

/// Identity of one scene node.
///
/// Ids carry the generation of the scene that created them, so an id kept
/// from an earlier render never resolves against a rebuilt scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    generation: u64,
    index: u32,
}

impl NodeId {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn index(self) -> u32 {
        self.index
    }
}

/// Element class, used for styling and click classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeClass {
    Bar,
    Count,
    CountSkeleton,
    Label,
    LabelSkeleton,
    Total,
    TotalSkeleton,
}

impl NodeClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Count => "count",
            Self::CountSkeleton => "count-skeleton",
            Self::Label => "label",
            Self::LabelSkeleton => "label-skeleton",
            Self::Total => "total",
            Self::TotalSkeleton => "total-skeleton",
        }
    }

    #[must_use]
    pub const fn is_skeleton(self) -> bool {
        matches!(
            self,
            Self::CountSkeleton | Self::LabelSkeleton | Self::TotalSkeleton
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: NodeId,
    pub class: NodeClass,
    pub shape: Shape,
    /// Dataset row the node was drawn for.
    pub datum_index: Option<usize>,
}

impl SceneNode {
    #[must_use]
    pub fn as_rect(&self) -> Option<&RectPrimitive> {
        match &self.shape {
            Shape::Rect(rect) => Some(rect),
            Shape::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&TextPrimitive> {
        match &self.shape {
            Shape::Text(text) => Some(text),
            Shape::Rect(_) => None,
        }
    }

    /// Hit test in group-local coordinates.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match &self.shape {
            Shape::Rect(rect) => rect.contains(x, y),
            Shape::Text(text) => text.contains(x, y),
        }
    }
}

/// Translated container holding the nodes of one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGroup {
    pub layer: ChartLayerKind,
    pub offset_x: f64,
    pub offset_y: f64,
    pub nodes: Vec<SceneNode>,
}

/// The drawing surface content: a shallow vector graphics tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub root_classes: SmallVec<[String; 3]>,
    pub groups: Vec<SceneGroup>,
    generation: u64,
    next_index: u32,
}

impl Scene {
    #[must_use]
    pub fn new(viewport: Viewport, generation: u64) -> Self {
        Self {
            viewport,
            root_classes: SmallVec::new(),
            groups: Vec::new(),
            generation,
            next_index: 0,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn add_root_class(&mut self, class: impl Into<String>) {
        self.root_classes.push(class.into());
    }

    #[must_use]
    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.iter().any(|candidate| candidate == class)
    }

    /// Appends an empty group for `layer`; later groups paint on top.
    pub fn push_group(&mut self, layer: ChartLayerKind, offset_x: f64, offset_y: f64) {
        self.groups.push(SceneGroup {
            layer,
            offset_x,
            offset_y,
            nodes: Vec::new(),
        });
    }

    /// Adds a node to the last group created for `layer`.
    pub fn add_node(
        &mut self,
        layer: ChartLayerKind,
        class: NodeClass,
        shape: Shape,
        datum_index: Option<usize>,
    ) -> ChartResult<NodeId> {
        let id = NodeId {
            generation: self.generation,
            index: self.next_index,
        };
        let group = self
            .groups
            .iter_mut()
            .rev()
            .find(|group| group.layer == layer)
            .ok_or_else(|| {
                ChartError::InvalidData(format!("scene has no group for layer {layer:?}"))
            })?;
        group.nodes.push(SceneNode {
            id,
            class,
            shape,
            datum_index,
        });
        self.next_index += 1;
        Ok(id)
    }

    #[must_use]
    pub fn group(&self, layer: ChartLayerKind) -> Option<&SceneGroup> {
        self.groups.iter().find(|group| group.layer == layer)
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        if id.generation != self.generation {
            return None;
        }
        self.nodes().find(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        if id.generation != self.generation {
            return None;
        }
        self.groups
            .iter_mut()
            .flat_map(|group| group.nodes.iter_mut())
            .find(|node| node.id == id)
    }

    /// All nodes in paint order.
    pub fn nodes(&self) -> impl Iterator<Item = &SceneNode> {
        self.groups.iter().flat_map(|group| group.nodes.iter())
    }

    pub fn nodes_of_class(&self, class: NodeClass) -> impl Iterator<Item = &SceneNode> {
        self.nodes().filter(move |node| node.class == class)
    }

    /// Topmost node under a surface-space point.
    #[must_use]
    pub fn node_at(&self, x: f64, y: f64) -> Option<&SceneNode> {
        self.groups.iter().rev().find_map(|group| {
            let local_x = x - group.offset_x;
            let local_y = y - group.offset_y;
            group
                .nodes
                .iter()
                .rev()
                .find(|node| node.contains(local_x, local_y))
        })
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.nodes().filter(|node| node.as_rect().is_some()).count()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.nodes().filter(|node| node.as_text().is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.nodes.is_empty())
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        for group in &self.groups {
            if !group.offset_x.is_finite() || !group.offset_y.is_finite() {
                return Err(ChartError::InvalidData(
                    "group offset must be finite".to_owned(),
                ));
            }
            for node in &group.nodes {
                match &node.shape {
                    Shape::Rect(rect) => rect.validate()?,
                    Shape::Text(text) => text.validate()?,
                }
            }
        }
        Ok(())
    }
}
