//! Normalized scene data.

pub use self::{
    blend_shape::{BlendShapeChannel, BlendShapeFrame},
    mesh::{MeshData, SubMesh, Topology},
    options::{ExportOptions, SystemUnit},
    scene::{NodeGeometry, NodeIndex, Scene, SceneNode, Transform},
    skin::{BoneInfluences, SkinBinding, MAX_INFLUENCES},
};

mod blend_shape;
mod mesh;
mod options;
mod scene;
mod skin;
