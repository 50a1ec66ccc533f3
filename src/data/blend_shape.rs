//! Blend shape.

/// Named blend shape channel.
#[derive(Debug, Clone)]
pub struct BlendShapeChannel {
    /// Channel name.
    pub name: String,
    /// Frames, in source-declared order.
    pub frames: Vec<BlendShapeFrame>,
}

/// One frame of a blend shape channel.
///
/// Delta streams are either sized to the base mesh vertex count or empty;
/// an empty stream means the frame does not displace that attribute and
/// sinks treat it as all-zero deltas.
#[derive(Default, Debug, Clone)]
pub struct BlendShapeFrame {
    /// Frame weight.
    pub weight: f32,
    /// Position deltas.
    pub delta_positions: Vec<[f32; 3]>,
    /// Normal deltas.
    pub delta_normals: Vec<[f32; 3]>,
    /// Tangent deltas.
    pub delta_tangents: Vec<[f32; 3]>,
}
