//! Hierarchical scene graph
//!
//! A [`Scene`] owns a tree of named nodes in an arena; parent and child
//! links are [`NodeId`] handles, never owning references. Each node carries
//! a local 2D transform (position, rotation, scale) and a list of attached
//! entities. World transforms are composed by walking ancestors on every
//! query; nothing is cached, so direct field assignment takes effect on the
//! next query.
//!
//! All operations are synchronous, single-threaded recursive walks, linear
//! in subtree size. Callers that need concurrent access must serialize it
//! externally.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

use crate::foundation::math::{Mat3, Transform2D, Vec2};
use crate::foundation::rect::RectangleF;
use crate::scene::draw_queue::{SpriteBatch, SpriteDrawCall};
use crate::scene::entity::SceneEntity;

new_key_type! {
    /// Handle to a node stored in a [`Scene`] arena
    pub struct NodeId;
}

/// Scene graph errors
///
/// Every variant is a programming-contract violation: surfaced
/// immediately, never retried.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The node is not a child of the stated parent
    #[error("node `{child}` is not a child of `{parent}`")]
    NotAChild {
        /// Node that was to be removed
        child: String,
        /// Node the removal was requested on
        parent: String,
    },

    /// Child index out of range
    #[error("child index {index} is out of range for node `{parent}` with {len} children")]
    ChildIndexOutOfRange {
        /// Node the removal was requested on
        parent: String,
        /// Requested index
        index: usize,
        /// Number of children the node actually has
        len: usize,
    },

    /// No entity or descendant contributes a rectangle to aggregate
    #[error("node `{node}` has no attached entities or descendants with bounds")]
    EmptyBounds {
        /// Node the bounds query was made on
        node: String,
    },
}

/// Creation parameters for child nodes
///
/// All fields default to the identity transform and no name, so callers
/// only state what differs.
#[derive(Debug, Clone)]
pub struct NodeParams {
    /// Optional display name (not required to be unique)
    pub name: Option<String>,

    /// Local position, default zero
    pub position: Vec2,

    /// Local rotation in radians, default zero
    pub rotation: f32,

    /// Local scale factors, default `(1, 1)`
    pub scale: Vec2,
}

impl Default for NodeParams {
    fn default() -> Self {
        Self {
            name: None,
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl NodeParams {
    /// Create parameters with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder pattern: Set the local position
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: Set the local rotation in radians
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set the local scale
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }
}

/// A tree element holding a local transform, children, and attached
/// entities
///
/// Transform fields are public and freely assignable; changes take effect
/// on the next transform query. Structural links (parent, children,
/// entities) are mutated only through [`Scene`] operations so the
/// bidirectional link invariant holds.
pub struct SceneNode {
    /// Optional display name (not required to be unique)
    pub name: Option<String>,

    /// Local position relative to the parent's coordinate space
    pub position: Vec2,

    /// Local rotation in radians
    pub rotation: f32,

    /// Local component-wise scale factors
    pub scale: Vec2,

    /// Opaque user data, not interpreted by the scene graph
    pub tag: Option<Box<dyn Any>>,

    parent: Option<NodeId>,
    children: Vec<NodeId>,
    entities: Vec<Rc<dyn SceneEntity>>,
}

impl SceneNode {
    fn from_params(params: NodeParams, parent: Option<NodeId>) -> Self {
        Self {
            name: params.name,
            position: params.position,
            rotation: params.rotation,
            scale: params.scale,
            tag: None,
            parent,
            children: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Handle of the parent node; `None` only for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child handles in creation order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Attached entities in attachment order
    pub fn entities(&self) -> &[Rc<dyn SceneEntity>] {
        &self.entities
    }

    /// Local transform matrix
    ///
    /// Composition order is scale, then rotation, then translation into
    /// the parent's coordinate space. Reversing the order changes results
    /// whenever scale is not 1.
    pub fn local_transform(&self) -> Mat3 {
        Transform2D::new(self.position, self.rotation, self.scale).to_matrix()
    }
}

impl fmt::Display for SceneNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, position: ({}, {}), rotation: {}, scale: ({}, {})",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.position.x,
            self.position.y,
            self.rotation,
            self.scale.x,
            self.scale.y
        )
    }
}

/// Arena-owned scene tree
///
/// Created with a root node; all further nodes are created through
/// [`Scene::create_child`] so the tree stays connected. The arena owns
/// every node; entities are shared references whose lifetime the caller
/// manages.
pub struct Scene {
    nodes: SlotMap<NodeId, SceneNode>,
    root: NodeId,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a scene containing only a root node with an identity local
    /// transform
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SceneNode::from_params(NodeParams::default(), None));

        Self { nodes, root }
    }

    /// Handle of the root node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow a node
    ///
    /// # Panics
    /// Panics if `id` refers to a removed node; holding on to a handle
    /// past removal is a contract violation.
    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id]
    }

    /// Mutably borrow a node
    ///
    /// # Panics
    /// Panics if `id` refers to a removed node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id]
    }

    /// Whether the handle refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Create a new node parented to `parent` and append it to the
    /// parent's child sequence
    pub fn create_child(&mut self, parent: NodeId, params: NodeParams) -> NodeId {
        let child = self
            .nodes
            .insert(SceneNode::from_params(params, Some(parent)));
        self.nodes[parent].children.push(child);

        log::trace!("created node {child:?} under {parent:?}");
        child
    }

    /// Detach `child` from `parent` and reclaim its subtree
    ///
    /// Attached entities are not destroyed; they outlive the node through
    /// the caller's own references.
    ///
    /// # Errors
    /// [`SceneError::NotAChild`] if `child`'s current parent is not
    /// `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        if self.nodes[child].parent != Some(parent) {
            return Err(SceneError::NotAChild {
                child: self.display_name(child),
                parent: self.display_name(parent),
            });
        }

        self.nodes[child].parent = None;
        self.nodes[parent].children.retain(|&c| c != child);
        self.despawn(child);

        log::debug!("removed node {child:?} from {parent:?}");
        Ok(())
    }

    /// Remove the child at `index` in `parent`'s child sequence
    ///
    /// # Errors
    /// [`SceneError::ChildIndexOutOfRange`] if `index` is past the end of
    /// the child sequence.
    pub fn remove_child_at(&mut self, parent: NodeId, index: usize) -> Result<(), SceneError> {
        match self.nodes[parent].children.get(index) {
            Some(&child) => self.remove_child(parent, child),
            None => Err(SceneError::ChildIndexOutOfRange {
                parent: self.display_name(parent),
                index,
                len: self.nodes[parent].children.len(),
            }),
        }
    }

    /// Append an entity reference to the node's entity list
    ///
    /// No capability or uniqueness check happens here; capabilities are
    /// queried lazily at bounds and draw time.
    pub fn attach(&mut self, node: NodeId, entity: Rc<dyn SceneEntity>) {
        self.nodes[node].entities.push(entity);
    }

    /// World transform of a node
    ///
    /// A node's world transform is its parent's world transform composed
    /// with its own local transform; the recursion terminates at the
    /// parentless root, whose world transform is its local transform.
    /// Recomputed on every query.
    pub fn world_transform(&self, id: NodeId) -> Mat3 {
        let node = &self.nodes[id];
        match node.parent {
            Some(parent) => self.world_transform(parent) * node.local_transform(),
            None => node.local_transform(),
        }
    }

    /// World-space bounding rectangle of a node's subtree
    ///
    /// The union of every directly attached entity's local rectangle,
    /// offset by the node's world *position* (world rotation and scale are
    /// deliberately not applied to the rectangle; a known imprecision kept
    /// for compatibility), and of every child's own bounding rectangle.
    /// Descendants whose subtrees contribute nothing are skipped.
    ///
    /// # Errors
    /// [`SceneError::EmptyBounds`] if the entire subtree has no attached
    /// entities; the min/max reduction has no well-defined result then.
    pub fn bounding_rectangle(&self, id: NodeId) -> Result<RectangleF, SceneError> {
        self.subtree_bounds(id).ok_or_else(|| SceneError::EmptyBounds {
            node: self.display_name(id),
        })
    }

    fn subtree_bounds(&self, id: NodeId) -> Option<RectangleF> {
        let node = &self.nodes[id];
        let world = Transform2D::from_matrix(self.world_transform(id));

        let mut bounds: Option<RectangleF> = None;
        let mut merge = |rect: RectangleF| {
            bounds = Some(match bounds {
                Some(acc) => acc.union(&rect),
                None => rect,
            });
        };

        for entity in &node.entities {
            let mut rect = entity.bounding_rectangle();
            rect.offset(world.position);
            merge(rect);
        }

        for &child in &node.children {
            if let Some(rect) = self.subtree_bounds(child) {
                merge(rect);
            }
        }

        bounds
    }

    /// Draw the whole scene into a sprite batch
    ///
    /// Equivalent to [`Scene::draw_node`] on the root.
    pub fn draw(&self, batch: &mut dyn SpriteBatch) {
        self.draw_node(self.root, batch);
    }

    /// Draw a subtree into a sprite batch, depth-first pre-order
    ///
    /// At each node the world transform is decomposed into position,
    /// rotation, and scale; every visible sprite-drawable entity is
    /// submitted with its local attributes folded in (position added,
    /// rotation added, scale multiplied component-wise, depth fixed at
    /// 0.0). Children are drawn after the node's own entities, in child-
    /// sequence order. Draw order is purely structural; callers arrange
    /// back-to-front ordering themselves if it matters.
    pub fn draw_node(&self, id: NodeId, batch: &mut dyn SpriteBatch) {
        let node = &self.nodes[id];
        let world = Transform2D::from_matrix(self.world_transform(id));

        for entity in &node.entities {
            if let Some(drawable) = entity.as_sprite_drawable() {
                if drawable.is_visible() {
                    let region = drawable.texture_region();

                    batch.draw(SpriteDrawCall {
                        texture: region.texture,
                        position: world.position + drawable.position(),
                        source: region.bounds,
                        color: drawable.color(),
                        rotation: world.rotation + drawable.rotation(),
                        origin: drawable.origin(),
                        scale: world.scale.component_mul(&drawable.scale()),
                        effects: drawable.effects(),
                        depth: 0.0,
                    });
                }
            }
        }

        for &child in &node.children {
            self.draw_node(child, batch);
        }
    }

    // Work-stack removal so deep subtrees stay off the call stack.
    fn despawn(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(removed) = self.nodes.remove(id) {
                stack.extend(removed.children);
            }
        }
    }

    fn display_name(&self, id: NodeId) -> String {
        self.nodes
            .get(id)
            .and_then(|node| node.name.clone())
            .unwrap_or_else(|| format!("{id:?}"))
    }
}
