//! Scene normalization.

use anyhow::Result;

use crate::{
    data::{ExportOptions, Scene},
    source::{EntityId, SourceScene},
};

pub use self::{builder::SceneBuilder, terrain::tessellate};

mod blend_shape;
mod builder;
mod geometry;
mod skin;
mod terrain;

/// Builds a normalized scene from the requested entities.
///
/// Each requested entity is resolved together with any renderable-bearing
/// descendants, their ancestor chains, and any bones pulled in
/// transitively by skinned meshes.
pub fn build(
    source: &SourceScene,
    roots: &[EntityId],
    options: &ExportOptions,
) -> Result<Scene> {
    let mut builder = SceneBuilder::new(source, options);
    for &root in roots {
        builder.add_entity(root)?;
        for id in source.ids() {
            let has_renderable = source
                .entity(id)
                .map_or(false, |entity| !entity.attachment.is_none());
            if has_renderable && source.is_descendant_of(id, root) {
                builder.add_entity(id)?;
            }
        }
    }
    Ok(builder.finish(None))
}
