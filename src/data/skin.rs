//! Skin binding.

use crate::data::NodeIndex;

/// Number of bone influence slots per vertex.
pub const MAX_INFLUENCES: usize = 4;

/// Skin binding of a mesh to a bone hierarchy.
///
/// `bones` and `bind_poses` always have the same length, and every bone
/// index carried by a per-vertex influence, including unused zero-weight
/// slots, is a valid index into `bones`.
#[derive(Debug, Clone)]
pub struct SkinBinding {
    /// Bone nodes, in binding order.
    pub bones: Vec<NodeIndex>,
    /// One bind pose matrix per bone, in the same order as `bones`.
    pub bind_poses: Vec<[[f32; 4]; 4]>,
    /// Per-vertex bone influences.
    pub weights: Vec<BoneInfluences>,
}

/// Bone influences of a single vertex.
///
/// Unused slots carry a weight of zero.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct BoneInfluences {
    /// Bone indices.
    pub indices: [u32; MAX_INFLUENCES],
    /// Weights.
    pub weights: [f32; MAX_INFLUENCES],
}

impl BoneInfluences {
    /// Creates an influence set with a single fully-weighted bone.
    pub fn single(bone: u32) -> Self {
        Self {
            indices: [bone, 0, 0, 0],
            weights: [1.0, 0.0, 0.0, 0.0],
        }
    }
}
