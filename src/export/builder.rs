//! Node table and scene builder.

use std::collections::HashMap;

use anyhow::Result;
use log::{debug, warn};

use crate::{
    data::{ExportOptions, NodeGeometry, NodeIndex, Scene, SceneNode, Transform},
    export::{geometry, skin, terrain},
    source::{Attachment, EntityId, SourceScene},
};

/// Entity-to-node bijection over a creation-ordered node arena.
#[derive(Default, Debug)]
struct NodeTable {
    /// Nodes, in creation order.
    nodes: Vec<SceneNode>,
    /// Mapping from source entities to nodes.
    index: HashMap<EntityId, NodeIndex>,
}

impl NodeTable {
    /// Returns the node already resolved for the entity, if any.
    fn get(&self, entity: EntityId) -> Option<NodeIndex> {
        self.index.get(&entity).copied()
    }

    /// Registers a new node for the entity.
    fn insert(&mut self, entity: EntityId, node: SceneNode) -> NodeIndex {
        let index = NodeIndex::new(self.nodes.len());
        self.nodes.push(node);
        self.index.insert(entity, index);
        index
    }
}

/// Scene builder.
///
/// Owns the node table of one build. Two builders over overlapping entity
/// sets must not be mixed; each build owns its own table.
pub struct SceneBuilder<'a> {
    /// Source hierarchy.
    source: &'a SourceScene,
    /// Build options.
    options: &'a ExportOptions,
    /// Node table.
    table: NodeTable,
}

impl<'a> SceneBuilder<'a> {
    /// Creates a builder over the given source scene.
    pub fn new(source: &'a SourceScene, options: &'a ExportOptions) -> Self {
        Self {
            source,
            options,
            table: NodeTable::default(),
        }
    }

    /// Resolves the entity and its ancestor chain into scene nodes.
    pub fn add_entity(&mut self, entity: EntityId) -> Result<()> {
        self.resolve(Some(entity))?;
        Ok(())
    }

    /// Resolves an entity to its scene node, creating it if necessary.
    ///
    /// Ancestors are materialized before the node itself, and each entity
    /// gets at most one node for the lifetime of the build: resolving an
    /// already-known entity returns the existing node without re-running
    /// geometry extraction. `None` and stale IDs resolve to `None`.
    pub fn resolve(&mut self, entity: Option<EntityId>) -> Result<Option<NodeIndex>> {
        let id = match entity {
            Some(id) => id,
            None => return Ok(None),
        };
        if let Some(index) = self.table.get(id) {
            return Ok(Some(index));
        }
        let source = self.source;
        let ent = match source.entity(id) {
            Some(ent) => ent,
            None => {
                warn!("entity {:?} is not part of the source scene, ignored", id);
                return Ok(None);
            }
        };

        let parent = self.resolve(ent.parent)?;
        let transform = if self.options.include_transform {
            Some(Transform {
                translation: ent.translation,
                rotation: ent.rotation,
                scale: ent.scale,
            })
        } else {
            None
        };
        let index = self.table.insert(
            id,
            SceneNode {
                name: ent.name.clone(),
                parent,
                transform,
                geometry: None,
            },
        );
        debug!("created node {:?} for entity {:?} ({})", index, id, ent.name);
        self.attach_geometry(id, index)?;
        Ok(Some(index))
    }

    /// Runs the one-time geometry attachment pass for a freshly created node.
    fn attach_geometry(&mut self, entity: EntityId, index: NodeIndex) -> Result<()> {
        let source = self.source;
        // The caller has already checked that the entity exists.
        let ent = match source.entity(entity) {
            Some(ent) => ent,
            None => return Ok(()),
        };
        match &ent.attachment {
            Attachment::None => {}
            Attachment::Terrain(sample) => {
                let mesh = terrain::tessellate(sample)?;
                if mesh.vertex_count() == 0 {
                    warn!("terrain on {:?} has a degenerate grid and is ignored", ent.name);
                    return Ok(());
                }
                self.set_geometry(
                    index,
                    NodeGeometry {
                        mesh,
                        skin: None,
                        blend_shapes: Vec::new(),
                    },
                );
            }
            Attachment::SkinnedMesh(skinned) => {
                if let Some(payload) = skin::extract(self, skinned)? {
                    self.set_geometry(index, payload);
                }
            }
            Attachment::Mesh(mesh) => {
                if let Some(payload) = geometry::extract(mesh)? {
                    self.set_geometry(index, payload);
                }
            }
        }
        Ok(())
    }

    /// Attaches a geometry payload to a node.
    fn set_geometry(&mut self, index: NodeIndex, payload: NodeGeometry) {
        self.table.nodes[index.to_usize()].geometry = Some(payload);
    }

    /// Finishes the build, returning the normalized scene.
    pub fn finish(self, name: Option<String>) -> Scene {
        Scene {
            name,
            nodes: self.table.nodes,
            index: self.table.index,
            options: self.options.clone(),
        }
    }
}
