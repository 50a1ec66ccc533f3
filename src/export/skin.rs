//! Skin extraction.

use anyhow::{bail, Result};

use crate::{
    data::{NodeGeometry, SkinBinding, MAX_INFLUENCES},
    export::{builder::SceneBuilder, geometry},
    source::SourceSkinnedMesh,
};

/// Extracts the base mesh and skin binding of a skinned renderable.
///
/// Returns `Ok(None)` when the base mesh is skipped; there is no partial
/// skin without a base mesh. Resolving the bones may create new nodes for
/// entities never otherwise visited (e.g. unselected skeleton roots), and
/// those go through the same one-time attachment pass as any other node.
pub(super) fn extract(
    builder: &mut SceneBuilder<'_>,
    src: &SourceSkinnedMesh,
) -> Result<Option<NodeGeometry>> {
    let mut payload = match geometry::extract(&src.mesh)? {
        Some(payload) => payload,
        None => return Ok(None),
    };
    let vertex_count = payload.mesh.vertex_count();

    if src.bind_poses.len() != src.bones.len() {
        bail!(
            "skinned mesh {:?}: {} bind poses for {} bones",
            src.mesh.name,
            src.bind_poses.len(),
            src.bones.len()
        );
    }
    if src.weights.len() != vertex_count {
        bail!(
            "skinned mesh {:?}: {} weight entries for {} vertices",
            src.mesh.name,
            src.weights.len(),
            vertex_count
        );
    }

    let mut bones = Vec::with_capacity(src.bones.len());
    for &bone in &src.bones {
        match builder.resolve(Some(bone))? {
            Some(index) => bones.push(index),
            None => bail!(
                "skinned mesh {:?}: bone references unknown entity {:?}",
                src.mesh.name,
                bone
            ),
        }
    }

    // Every index in the packed binding stays in range, including unused
    // slots: sources may leave garbage indices behind a zero weight, and
    // those are reset to bone 0 while packing.
    let mut weights = src.weights.clone();
    for (vi, influences) in weights.iter_mut().enumerate() {
        for slot in 0..MAX_INFLUENCES {
            if influences.weights[slot] == 0.0 {
                influences.indices[slot] = 0;
            } else if influences.indices[slot] as usize >= bones.len() {
                bail!(
                    "skinned mesh {:?}: vertex {} references bone {} out of {}",
                    src.mesh.name,
                    vi,
                    influences.indices[slot],
                    bones.len()
                );
            }
        }
    }

    payload.skin = Some(SkinBinding {
        bones,
        bind_poses: src.bind_poses.clone(),
        weights,
    });
    Ok(Some(payload))
}
