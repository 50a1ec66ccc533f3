//! Source scene.
//!
//! Arena representation of the caller's live object hierarchy. The
//! normalization engine only reads it; ownership stays with the caller.

use crate::data::{BlendShapeChannel, BoneInfluences};

/// Source entity ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u32);

impl EntityId {
    /// Returns the ID as `usize`.
    fn to_usize(self) -> usize {
        self.0 as usize
    }
}

/// Source entity hierarchy.
#[derive(Default, Debug, Clone)]
pub struct SourceScene {
    /// Entities.
    entities: Vec<SourceEntity>,
}

impl SourceScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity and returns its ID.
    pub fn push(&mut self, entity: SourceEntity) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(entity);
        id
    }

    /// Returns the entity for the given ID, or `None` for a stale ID.
    pub fn entity(&self, id: EntityId) -> Option<&SourceEntity> {
        self.entities.get(id.to_usize())
    }

    /// Returns an iterator over all entity IDs.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> {
        (0..self.entities.len() as u32).map(EntityId)
    }

    /// Returns whether `id` is a strict descendant of `ancestor`.
    pub fn is_descendant_of(&self, id: EntityId, ancestor: EntityId) -> bool {
        let mut cur = match self.entity(id) {
            Some(entity) => entity.parent,
            None => return false,
        };
        while let Some(parent) = cur {
            if parent == ancestor {
                return true;
            }
            cur = self.entity(parent).and_then(|entity| entity.parent);
        }
        false
    }
}

/// Source entity.
#[derive(Debug, Clone)]
pub struct SourceEntity {
    /// Name.
    pub name: String,
    /// Parent entity, or `None` for hierarchy roots.
    pub parent: Option<EntityId>,
    /// Local translation.
    pub translation: [f32; 3],
    /// Local rotation quaternion, `(x, y, z, w)`.
    pub rotation: [f32; 4],
    /// Local scale.
    pub scale: [f32; 3],
    /// Attached renderable.
    pub attachment: Attachment,
}

impl SourceEntity {
    /// Creates an entity with identity transform and no attachment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            translation: [0.0; 3],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0; 3],
            attachment: Attachment::None,
        }
    }
}

/// Renderable attached to an entity.
///
/// An entity carries at most one renderable.
#[derive(Debug, Clone)]
pub enum Attachment {
    /// No renderable.
    None,
    /// Plain mesh.
    Mesh(SourceMesh),
    /// Skinned mesh.
    SkinnedMesh(SourceSkinnedMesh),
    /// Procedural terrain.
    Terrain(TerrainSample),
}

impl Attachment {
    /// Returns whether there is no renderable.
    pub fn is_none(&self) -> bool {
        matches!(self, Attachment::None)
    }
}

/// Native mesh data of a renderable.
#[derive(Debug, Clone)]
pub struct SourceMesh {
    /// Name.
    pub name: String,
    /// Whether the mesh data can be read back.
    pub readable: bool,
    /// Positions.
    pub positions: Vec<[f32; 3]>,
    /// Normals. Empty when the source provides none.
    pub normals: Vec<[f32; 3]>,
    /// Tangents. Empty when the source provides none.
    pub tangents: Vec<[f32; 4]>,
    /// UV. Empty when the source provides none.
    pub uv: Vec<[f32; 2]>,
    /// Vertex colors. Empty when the source provides none.
    pub colors: Vec<[f32; 4]>,
    /// Flattened triangle index list.
    pub triangles: Vec<u32>,
    /// Blend shape channels.
    pub blend_shapes: Vec<BlendShapeChannel>,
}

impl SourceMesh {
    /// Creates a readable mesh with the given positions and triangles.
    pub fn new(
        name: impl Into<String>,
        positions: Vec<[f32; 3]>,
        triangles: Vec<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            readable: true,
            positions,
            normals: Vec::new(),
            tangents: Vec::new(),
            uv: Vec::new(),
            colors: Vec::new(),
            triangles,
            blend_shapes: Vec::new(),
        }
    }
}

/// Skinned mesh renderable.
#[derive(Debug, Clone)]
pub struct SourceSkinnedMesh {
    /// Shared mesh.
    pub mesh: SourceMesh,
    /// Bone entities, in binding order.
    pub bones: Vec<EntityId>,
    /// One bind pose matrix per bone.
    pub bind_poses: Vec<[[f32; 4]; 4]>,
    /// Per-vertex bone influences.
    pub weights: Vec<BoneInfluences>,
}

/// Terrain heightmap sample.
///
/// Read once during a build and converted immediately into mesh data.
#[derive(Debug, Clone)]
pub struct TerrainSample {
    /// Number of samples along the x axis.
    pub width: usize,
    /// Number of samples along the z axis.
    pub height: usize,
    /// Normalized height values, row major (`heights[iy * width + ix]`).
    pub heights: Vec<f32>,
    /// World-space size of the terrain, `(x, y, z)`.
    pub size: [f32; 3],
}
