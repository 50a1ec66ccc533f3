//! Blend shape extraction.

use anyhow::Result;

use crate::{
    data::{BlendShapeChannel, BlendShapeFrame},
    export::geometry,
    source::SourceMesh,
};

/// Extracts the blend shape channels of a mesh.
///
/// Channels and frames keep their source-declared order, and zero-weight
/// frames are emitted like any other; weight filtering is a sink-side
/// concern. A non-empty delta stream not sized to the base mesh vertex
/// count fails the extraction.
pub(super) fn extract(src: &SourceMesh, vertex_count: usize) -> Result<Vec<BlendShapeChannel>> {
    let mut channels = Vec::with_capacity(src.blend_shapes.len());
    for channel in &src.blend_shapes {
        let mut frames = Vec::with_capacity(channel.frames.len());
        for frame in &channel.frames {
            frames.push(BlendShapeFrame {
                weight: frame.weight,
                delta_positions: delta_stream(src, channel, "position", &frame.delta_positions, vertex_count)?,
                delta_normals: delta_stream(src, channel, "normal", &frame.delta_normals, vertex_count)?,
                delta_tangents: delta_stream(src, channel, "tangent", &frame.delta_tangents, vertex_count)?,
            });
        }
        channels.push(BlendShapeChannel {
            name: channel.name.clone(),
            frames,
        });
    }
    Ok(channels)
}

/// Returns a copy of a delta stream, which may be empty.
fn delta_stream(
    src: &SourceMesh,
    channel: &BlendShapeChannel,
    kind: &str,
    stream: &[[f32; 3]],
    vertex_count: usize,
) -> Result<Vec<[f32; 3]>> {
    let name = format!("{}/{}", src.name, channel.name);
    let kind = format!("blend shape delta {}", kind);
    Ok(geometry::optional_stream(&kind, &name, stream, vertex_count)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh_with_channels() -> SourceMesh {
        let mut src = SourceMesh::new("face", vec![[0.0; 3]; 4], vec![0, 1, 2, 0, 2, 3]);
        src.blend_shapes = vec![
            BlendShapeChannel {
                name: "smile".to_owned(),
                frames: vec![
                    BlendShapeFrame {
                        weight: 0.0,
                        delta_positions: vec![[0.0; 3]; 4],
                        ..BlendShapeFrame::default()
                    },
                    BlendShapeFrame {
                        weight: 100.0,
                        delta_positions: vec![[0.0, 1.0, 0.0]; 4],
                        ..BlendShapeFrame::default()
                    },
                ],
            },
            BlendShapeChannel {
                name: "frown".to_owned(),
                frames: vec![BlendShapeFrame {
                    weight: 100.0,
                    ..BlendShapeFrame::default()
                }],
            },
        ];
        src
    }

    #[test]
    fn channel_and_frame_order_is_preserved() {
        let src = mesh_with_channels();
        let channels = extract(&src, 4).unwrap();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].name, "smile");
        assert_eq!(channels[1].name, "frown");
        assert_eq!(channels[0].frames.len(), 2);
        // A zero-weight frame is still emitted.
        assert_eq!(channels[0].frames[0].weight, 0.0);
        assert_eq!(channels[0].frames[1].weight, 100.0);
    }

    #[test]
    fn empty_delta_streams_are_allowed() {
        let src = mesh_with_channels();
        let channels = extract(&src, 4).unwrap();
        assert!(channels[1].frames[0].delta_positions.is_empty());
    }

    #[test]
    fn mismatched_delta_length_is_an_error() {
        let mut src = mesh_with_channels();
        src.blend_shapes[0].frames[1].delta_positions.pop();
        assert!(extract(&src, 4).is_err());
    }
}
