//! Scene sink interface.
//!
//! Serialization to concrete file formats is an external concern. This
//! module defines the surface a normalized scene is delivered through,
//! and the bookkeeping for in-flight write jobs.

use std::path::Path;

use anyhow::Result;

use crate::data::{BlendShapeFrame, ExportOptions, MeshData, Scene, SkinBinding, SubMesh, Transform};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// FBX binary.
    FbxBinary,
    /// FBX ascii.
    FbxAscii,
    /// FBX encrypted binary.
    FbxEncrypted,
    /// Wavefront OBJ text.
    Obj,
}

/// Receiver of a normalized scene.
///
/// Coordinate conversion (handedness, winding, scaling, quadification) is
/// applied by the sink according to the options recorded on the scene.
pub trait SceneSink {
    /// Node handle.
    type Node: Copy;
    /// In-flight write handle.
    type Job: WriteJob;

    /// Creates a node under `parent`, or under the sink root for `None`.
    fn create_node(&mut self, parent: Option<Self::Node>, name: &str) -> Self::Node;
    /// Sets the local transform of a node.
    fn set_transform(&mut self, node: Self::Node, transform: &Transform);
    /// Attaches mesh vertex streams to a node.
    fn add_mesh(&mut self, node: Self::Node, mesh: &MeshData);
    /// Adds one submesh of the mesh attached to the node.
    fn add_submesh(&mut self, node: Self::Node, submesh: &SubMesh);
    /// Attaches a skin binding; `bones` are the handles of the bone nodes
    /// in binding order.
    fn add_skin(&mut self, node: Self::Node, skin: &SkinBinding, bones: &[Self::Node]);
    /// Adds one frame to the named blend shape channel.
    ///
    /// An empty delta stream on the frame stands for all-zero deltas:
    /// the frame leaves that attribute at its base mesh values.
    fn add_blend_shape_frame(&mut self, node: Self::Node, channel: &str, frame: &BlendShapeFrame);
    /// Starts writing the received scene, returning a pollable job.
    fn write(&mut self, path: &Path, format: FileFormat, options: &ExportOptions)
        -> Result<Self::Job>;
}

/// Pollable write completion.
pub trait WriteJob {
    /// Returns whether the write has finished.
    fn is_finished(&self) -> bool;
}

/// Delivers a normalized scene into a sink.
///
/// All nodes are created before any geometry is attached: a skin may
/// reference bone nodes stored after the skinned mesh in the arena.
pub fn deliver<S: SceneSink>(scene: &Scene, sink: &mut S) {
    let mut handles = Vec::with_capacity(scene.nodes.len());
    for node in &scene.nodes {
        // Parents precede their children in the arena.
        let parent = node.parent.map(|p| handles[p.to_usize()]);
        let handle = sink.create_node(parent, &node.name);
        if let Some(transform) = &node.transform {
            sink.set_transform(handle, transform);
        }
        handles.push(handle);
    }

    for (node, &handle) in scene.nodes.iter().zip(&handles) {
        let geometry = match &node.geometry {
            Some(geometry) => geometry,
            None => continue,
        };
        sink.add_mesh(handle, &geometry.mesh);
        for submesh in &geometry.mesh.submeshes {
            sink.add_submesh(handle, submesh);
        }
        if let Some(skin) = &geometry.skin {
            let bones = skin
                .bones
                .iter()
                .map(|bone| handles[bone.to_usize()])
                .collect::<Vec<_>>();
            sink.add_skin(handle, skin, &bones);
        }
        for channel in &geometry.blend_shapes {
            for frame in &channel.frames {
                sink.add_blend_shape_frame(handle, &channel.name, frame);
            }
        }
    }
}

/// Registry of in-flight write jobs.
///
/// The extraction core completes synchronously; only the downstream write
/// is asynchronous. Callers keep started jobs here and `poll` on a tick,
/// which drops finished jobs and thereby releases their resources.
#[derive(Debug)]
pub struct JobRegistry<J> {
    /// In-flight jobs.
    jobs: Vec<J>,
}

impl<J> Default for JobRegistry<J> {
    fn default() -> Self {
        Self { jobs: Vec::new() }
    }
}

impl<J: WriteJob> JobRegistry<J> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a started job.
    pub fn add(&mut self, job: J) {
        self.jobs.push(job);
    }

    /// Drops finished jobs, returning how many were released.
    pub fn poll(&mut self) -> usize {
        let before = self.jobs.len();
        self.jobs.retain(|job| !job.is_finished());
        before - self.jobs.len()
    }

    /// Returns the number of jobs still in flight.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns whether no job is in flight.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
