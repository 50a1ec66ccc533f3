//! Scene.

use std::collections::HashMap;

use crate::{
    data::{BlendShapeChannel, ExportOptions, MeshData, SkinBinding},
    source::EntityId,
};

/// Scene node index.
///
/// Indices are stable for the lifetime of the scene that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Creates a new index.
    pub(crate) fn new(i: usize) -> Self {
        Self(i as u32)
    }

    /// Returns the index as `usize`.
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }
}

/// Local transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation.
    pub translation: [f32; 3],
    /// Rotation quaternion, `(x, y, z, w)`.
    pub rotation: [f32; 4],
    /// Scale.
    pub scale: [f32; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0; 3],
        }
    }
}

/// Geometry payload attached to a node.
#[derive(Debug, Clone)]
pub struct NodeGeometry {
    /// Base mesh.
    pub mesh: MeshData,
    /// Skin binding.
    pub skin: Option<SkinBinding>,
    /// Blend shape channels, in source-declared order.
    pub blend_shapes: Vec<BlendShapeChannel>,
}

/// Scene node.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Name.
    pub name: String,
    /// Parent node, or `None` for children of the scene root.
    pub parent: Option<NodeIndex>,
    /// Local transform, if the build recorded transforms.
    pub transform: Option<Transform>,
    /// Attached geometry.
    pub geometry: Option<NodeGeometry>,
}

/// Normalized scene.
///
/// Nodes are stored in creation order, so a node's parent always precedes
/// it in the arena. Once returned from a build the scene is an immutable
/// value and safe to hand across a thread boundary.
#[derive(Default, Debug, Clone)]
pub struct Scene {
    /// Name.
    pub name: Option<String>,
    /// Node arena, parents before children.
    pub nodes: Vec<SceneNode>,
    /// Source entity to node mapping.
    pub(crate) index: HashMap<EntityId, NodeIndex>,
    /// Options the scene was built with.
    pub options: ExportOptions,
}

impl Scene {
    /// Returns the node for the given index.
    pub fn node(&self, index: NodeIndex) -> &SceneNode {
        &self.nodes[index.to_usize()]
    }

    /// Returns the node resolved for the given source entity, if any.
    pub fn node_for(&self, entity: EntityId) -> Option<NodeIndex> {
        self.index.get(&entity).copied()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
