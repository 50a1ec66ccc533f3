//! Terrain tessellation.

use anyhow::{bail, Result};
use cgmath::{InnerSpace, Vector3};

use crate::{
    data::{MeshData, SubMesh, Topology},
    source::TerrainSample,
};

/// Tessellates a heightmap grid into a triangle mesh.
///
/// A `w x h` grid yields `w * h` shared vertices and `(w-1) * (h-1) * 2`
/// triangles, two per cell split along a fixed diagonal. Grid vertex
/// `(ix, iy)` sits at flat index `iy * w + ix`; its x/z position is the
/// grid coordinate scaled to the world size and its y position is the
/// height sample scaled by the world height. A grid with fewer than two
/// samples in either direction yields an empty mesh; a height stream not
/// sized to the declared grid is a malformed source and fails the
/// extraction.
pub fn tessellate(terrain: &TerrainSample) -> Result<MeshData> {
    let (w, h) = (terrain.width, terrain.height);
    if terrain.heights.len() != w * h {
        bail!(
            "terrain: height stream length {} does not match {}x{} grid",
            terrain.heights.len(),
            w,
            h
        );
    }
    if w < 2 || h < 2 {
        return Ok(MeshData::default());
    }
    let size = terrain.size;
    let cell_x = size[0] / (w - 1) as f32;
    let cell_z = size[2] / (h - 1) as f32;

    let mut positions = Vec::with_capacity(w * h);
    let mut uv = Vec::with_capacity(w * h);
    for iy in 0..h {
        for ix in 0..w {
            let height = terrain.heights[iy * w + ix];
            positions.push([ix as f32 * cell_x, height * size[1], iy as f32 * cell_z]);
            uv.push([ix as f32 / (w - 1) as f32, iy as f32 / (h - 1) as f32]);
        }
    }

    let mut indices = Vec::with_capacity((w - 1) * (h - 1) * 6);
    for iy in 0..h - 1 {
        for ix in 0..w - 1 {
            let i = (iy * w + ix) as u32;
            let w = w as u32;
            indices.extend_from_slice(&[i, i + w, i + w + 1, i, i + w + 1, i + 1]);
        }
    }

    Ok(MeshData {
        positions,
        normals: Some(vertex_normals(terrain, cell_x, cell_z)),
        tangents: None,
        uv: Some(uv),
        colors: None,
        submeshes: vec![SubMesh {
            topology: Topology::Triangles,
            indices,
            material: None,
        }],
    })
}

/// Computes smooth per-vertex normals from local height differences.
///
/// Uses central differences in the grid interior and one-sided differences
/// at the borders, in world-space units.
fn vertex_normals(terrain: &TerrainSample, cell_x: f32, cell_z: f32) -> Vec<[f32; 3]> {
    let (w, h) = (terrain.width, terrain.height);
    let height_at = |ix: usize, iy: usize| terrain.heights[iy * w + ix] * terrain.size[1];

    let mut normals = Vec::with_capacity(w * h);
    for iy in 0..h {
        for ix in 0..w {
            let (x0, x1) = (ix.saturating_sub(1), (ix + 1).min(w - 1));
            let (y0, y1) = (iy.saturating_sub(1), (iy + 1).min(h - 1));
            let slope_x = (height_at(x1, iy) - height_at(x0, iy)) / ((x1 - x0) as f32 * cell_x);
            let slope_z = (height_at(ix, y1) - height_at(ix, y0)) / ((y1 - y0) as f32 * cell_z);
            let normal = Vector3::new(-slope_x, 1.0, -slope_z).normalize();
            normals.push(normal.into());
        }
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(width: usize, height: usize, heights: Vec<f32>, size: [f32; 3]) -> TerrainSample {
        TerrainSample {
            width,
            height,
            heights,
            size,
        }
    }

    #[test]
    fn grid_yields_expected_vertex_and_triangle_counts() {
        for &(w, h) in &[(2, 2), (3, 3), (4, 7)] {
            let mesh = tessellate(&sample(w, h, vec![0.0; w * h], [1.0, 1.0, 1.0])).unwrap();
            assert_eq!(mesh.vertex_count(), w * h);
            assert_eq!(mesh.submeshes.len(), 1);
            assert_eq!(mesh.submeshes[0].indices.len(), (w - 1) * (h - 1) * 2 * 3);
        }
    }

    #[test]
    fn degenerate_grid_yields_empty_mesh() {
        for &(w, h) in &[(0, 0), (1, 1), (1, 5), (5, 1)] {
            let mesh = tessellate(&sample(w, h, vec![0.0; w * h], [1.0, 1.0, 1.0])).unwrap();
            assert_eq!(mesh.vertex_count(), 0);
            assert!(mesh.submeshes.is_empty());
        }
    }

    #[test]
    fn short_height_stream_is_an_error() {
        assert!(tessellate(&sample(3, 3, vec![0.0; 4], [1.0, 1.0, 1.0])).is_err());
        assert!(tessellate(&sample(3, 3, vec![0.0; 12], [1.0, 1.0, 1.0])).is_err());
    }

    #[test]
    fn corner_positions_follow_the_world_size() {
        let mut heights = vec![0.0; 9];
        heights[0] = 0.25;
        heights[8] = 0.5;
        let mesh = tessellate(&sample(3, 3, heights, [2.0, 1.0, 2.0])).unwrap();
        assert_eq!(mesh.positions[0], [0.0, 0.25, 0.0]);
        assert_eq!(mesh.positions[8], [2.0, 0.5, 2.0]);
    }

    #[test]
    fn uv_spans_the_unit_square() {
        let mesh = tessellate(&sample(3, 3, vec![0.0; 9], [4.0, 1.0, 4.0])).unwrap();
        let uv = mesh.uv.unwrap();
        assert_eq!(uv[0], [0.0, 0.0]);
        assert_eq!(uv[4], [0.5, 0.5]);
        assert_eq!(uv[8], [1.0, 1.0]);
    }

    #[test]
    fn flat_grid_has_up_normals() {
        let mesh = tessellate(&sample(3, 3, vec![0.5; 9], [2.0, 1.0, 2.0])).unwrap();
        for normal in mesh.normals.unwrap() {
            assert_eq!(normal, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn triangles_share_grid_vertices() {
        let mesh = tessellate(&sample(3, 2, vec![0.0; 6], [1.0, 1.0, 1.0])).unwrap();
        let indices = &mesh.submeshes[0].indices;
        assert_eq!(indices, &[0, 3, 4, 0, 4, 1, 1, 4, 5, 1, 5, 2]);
    }
}
