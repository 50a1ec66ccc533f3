//! Mesh.

/// Normalized mesh data.
///
/// The position stream is mandatory and defines the vertex count.
/// Every optional stream, when present, has the same length as the
/// position stream.
#[derive(Default, Debug, Clone)]
pub struct MeshData {
    /// Positions.
    pub positions: Vec<[f32; 3]>,
    /// Normals.
    pub normals: Option<Vec<[f32; 3]>>,
    /// Tangents.
    pub tangents: Option<Vec<[f32; 4]>>,
    /// UV.
    pub uv: Option<Vec<[f32; 2]>>,
    /// Vertex colors.
    pub colors: Option<Vec<[f32; 4]>>,
    /// Submeshes.
    pub submeshes: Vec<SubMesh>,
}

impl MeshData {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Sub mesh.
#[derive(Debug, Clone)]
pub struct SubMesh {
    /// Primitive topology of the index buffer.
    pub topology: Topology,
    /// Indices.
    pub indices: Vec<u32>,
    /// Material slot, or `None` when unassigned.
    pub material: Option<u32>,
}

/// Primitive topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Points.
    Points,
    /// Lines.
    Lines,
    /// Triangles.
    Triangles,
    /// Quads.
    Quads,
}

impl Topology {
    /// Returns the number of vertices in one primitive.
    pub fn vertices_per_primitive(self) -> usize {
        match self {
            Topology::Points => 1,
            Topology::Lines => 2,
            Topology::Triangles => 3,
            Topology::Quads => 4,
        }
    }
}
