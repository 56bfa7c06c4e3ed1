//! Scene management system
//!
//! A hierarchical scene graph for 2D sprite rendering. Callers build the
//! tree top-down from the root, attach entities to nodes, then each frame
//! call [`Scene::draw`] (or [`Scene::bounding_rectangle`]) which recurses
//! depth-first over the tree, composing transforms on the way down.
//!
//! ## Architecture
//!
//! ```text
//! Scene (arena of SceneNodes)
//!      ↓ world transforms, bounds, traversal order
//! SpriteBatch (rendering backend)
//! ```
//!
//! The scene graph:
//! - Composes nested local transforms into world-space transforms
//! - Aggregates world-space bounding rectangles across subtrees
//! - Produces a deterministic, purely structural draw order

mod draw_queue;
mod entity;
mod scene_graph;
mod sprite;

pub use draw_queue::{DrawQueue, SpriteBatch, SpriteDrawCall};
pub use entity::{SceneEntity, SpriteDrawable, SpriteEffects, TextureId, TextureRegion};
pub use scene_graph::{NodeId, NodeParams, Scene, SceneError, SceneNode};
pub use sprite::Sprite;
