//! Mesh extraction.

use anyhow::{bail, Result};
use log::warn;

use crate::{
    data::{MeshData, NodeGeometry, SubMesh, Topology},
    export::blend_shape,
    source::SourceMesh,
};

/// Extracts a normalized mesh from a source renderable.
///
/// Returns `Ok(None)` when the mesh is skipped: a mesh with no vertices or
/// one whose data cannot be read back contributes no geometry, and the
/// build continues. Optional attribute streams are carried only when the
/// source provides them; a non-empty stream whose length does not match
/// the vertex count is a malformed source and fails the extraction.
pub(super) fn extract(src: &SourceMesh) -> Result<Option<NodeGeometry>> {
    if !src.readable {
        warn!("mesh {:?} is not readable and is ignored", src.name);
        return Ok(None);
    }
    let vertex_count = src.positions.len();
    if vertex_count == 0 {
        warn!("mesh {:?} has no vertices and is ignored", src.name);
        return Ok(None);
    }

    let mesh = MeshData {
        positions: src.positions.clone(),
        normals: optional_stream("normal", &src.name, &src.normals, vertex_count)?,
        tangents: optional_stream("tangent", &src.name, &src.tangents, vertex_count)?,
        uv: optional_stream("uv", &src.name, &src.uv, vertex_count)?,
        colors: optional_stream("color", &src.name, &src.colors, vertex_count)?,
        submeshes: vec![SubMesh {
            topology: Topology::Triangles,
            indices: src.triangles.clone(),
            material: None,
        }],
    };
    let blend_shapes = blend_shape::extract(src, vertex_count)?;
    Ok(Some(NodeGeometry {
        mesh,
        skin: None,
        blend_shapes,
    }))
}

/// Returns a copy of the stream, or `None` when the source provides none.
pub(super) fn optional_stream<T: Clone>(
    kind: &str,
    mesh_name: &str,
    stream: &[T],
    vertex_count: usize,
) -> Result<Option<Vec<T>>> {
    if stream.is_empty() {
        return Ok(None);
    }
    if stream.len() != vertex_count {
        bail!(
            "mesh {:?}: {} stream length {} does not match vertex count {}",
            mesh_name,
            kind,
            stream.len(),
            vertex_count
        );
    }
    Ok(Some(stream.to_vec()))
}
