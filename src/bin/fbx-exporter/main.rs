//! FBX exporter demo.
//!
//! Normalizes a small procedural scene and delivers it to a summary sink
//! that logs what a file writer would receive.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use log::info;

use fbx_exporter::{
    data::{BlendShapeFrame, ExportOptions, MeshData, SkinBinding, SubMesh, Transform},
    export,
    sink::{self, FileFormat, JobRegistry, SceneSink, WriteJob},
    source::{Attachment, SourceEntity, SourceMesh, SourceScene, TerrainSample},
    CliOpt,
};

fn main() -> Result<()> {
    env_logger::init();
    info!("version: {}", env!("CARGO_PKG_VERSION"));

    let opt = CliOpt::parse();
    let options = ExportOptions {
        include_transform: !opt.no_transform,
        flip_handedness: !opt.no_flip_handedness,
        flip_faces: !opt.no_flip_faces,
        scale_factor: opt.scale_factor,
        ..ExportOptions::default()
    };

    let (source, roots) = demo_scene();
    let scene = export::build(&source, &roots, &options)?;
    info!("normalized {} nodes", scene.node_count());

    let mut summary = SummarySink::default();
    sink::deliver(&scene, &mut summary);

    let mut jobs = JobRegistry::new();
    jobs.add(summary.write(&opt.out_path, opt.format.into(), &scene.options)?);
    while !jobs.is_empty() {
        jobs.poll();
    }
    info!("done");
    Ok(())
}

/// Builds the demo hierarchy: a wave mesh under a parent transform and a
/// terrain patch.
fn demo_scene() -> (SourceScene, Vec<fbx_exporter::source::EntityId>) {
    let mut source = SourceScene::new();

    let mut parent = SourceEntity::new("Parent");
    parent.translation = [0.0, 1.0, 2.0];
    let parent = source.push(parent);

    let mut wave = SourceEntity::new("Wave");
    wave.parent = Some(parent);
    wave.attachment = Attachment::Mesh(wave_mesh(32, 1.0, 0.25));
    source.push(wave);

    let mut terrain = SourceEntity::new("Terrain");
    let heights = (0..16 * 16)
        .map(|i| ((i % 16) as f32 / 15.0).sin() * 0.5)
        .collect();
    terrain.attachment = Attachment::Terrain(TerrainSample {
        width: 16,
        height: 16,
        heights,
        size: [50.0, 10.0, 50.0],
    });
    let terrain = source.push(terrain);

    (source, vec![parent, terrain])
}

/// Generates a radial wave over a regular grid.
fn wave_mesh(resolution: usize, size: f32, height: f32) -> SourceMesh {
    let r = resolution;
    let mut positions = Vec::with_capacity(r * r);
    let mut uv = Vec::with_capacity(r * r);
    for iy in 0..r {
        for ix in 0..r {
            let px = ix as f32 / (r - 1) as f32 - 0.5;
            let py = iy as f32 / (r - 1) as f32 - 0.5;
            let d = (px * px + py * py).sqrt();
            let y = (d * 10.0).sin() * (1.0 - d).max(0.0) * height;
            positions.push([px * size, y, py * size]);
            uv.push([px * 0.5 + 0.5, py * 0.5 + 0.5]);
        }
    }

    let mut triangles = Vec::with_capacity((r - 1) * (r - 1) * 6);
    for iy in 0..r - 1 {
        for ix in 0..r - 1 {
            let i = (iy * r + ix) as u32;
            let r = r as u32;
            triangles.extend_from_slice(&[i, i + r, i + r + 1, i, i + r + 1, i + 1]);
        }
    }

    let mut mesh = SourceMesh::new("wave", positions, triangles);
    mesh.uv = uv;
    mesh
}

/// Sink that logs scene statistics instead of writing files.
#[derive(Default)]
struct SummarySink {
    nodes: Vec<String>,
    vertices: usize,
    triangles: usize,
    skins: usize,
    blend_shape_frames: usize,
}

/// Write handle of [`SummarySink`]; finishes immediately.
struct SummaryJob;

impl WriteJob for SummaryJob {
    fn is_finished(&self) -> bool {
        true
    }
}

impl SceneSink for SummarySink {
    type Node = usize;
    type Job = SummaryJob;

    fn create_node(&mut self, parent: Option<usize>, name: &str) -> usize {
        let label = match parent {
            Some(parent) => format!("{}/{}", self.nodes[parent], name),
            None => format!("/{}", name),
        };
        self.nodes.push(label);
        self.nodes.len() - 1
    }

    fn set_transform(&mut self, _node: usize, _transform: &Transform) {}

    fn add_mesh(&mut self, _node: usize, mesh: &MeshData) {
        self.vertices += mesh.vertex_count();
    }

    fn add_submesh(&mut self, _node: usize, submesh: &SubMesh) {
        self.triangles += submesh.indices.len() / submesh.topology.vertices_per_primitive();
    }

    fn add_skin(&mut self, _node: usize, _skin: &SkinBinding, _bones: &[usize]) {
        self.skins += 1;
    }

    fn add_blend_shape_frame(&mut self, _node: usize, _channel: &str, _frame: &BlendShapeFrame) {
        self.blend_shape_frames += 1;
    }

    fn write(
        &mut self,
        path: &Path,
        format: FileFormat,
        options: &ExportOptions,
    ) -> Result<SummaryJob> {
        for label in &self.nodes {
            info!("node {}", label);
        }
        info!(
            "would write {:?} as {:?}: {} nodes, {} vertices, {} faces, {} skins, {} blend shape frames (scale {})",
            path,
            format,
            self.nodes.len(),
            self.vertices,
            self.triangles,
            self.skins,
            self.blend_shape_frames,
            options.scale_factor,
        );
        Ok(SummaryJob)
    }
}
