//! # scene2d
//!
//! A 2D hierarchical scene graph with batched sprite draw submission.
//!
//! ## Features
//!
//! - **Scene tree**: named nodes with local position/rotation/scale,
//!   arena-owned with generational handles
//! - **Transform composition**: world transforms composed recursively,
//!   scale → rotate → translate
//! - **Bounds aggregation**: world-space bounding rectangles over subtrees
//! - **Deterministic draw order**: depth-first pre-order submission to a
//!   pluggable sprite batch backend
//!
//! ## Quick Start
//!
//! ```rust
//! use scene2d::prelude::*;
//! use std::rc::Rc;
//!
//! let mut scene = Scene::new();
//! let ship = scene.create_child(
//!     scene.root(),
//!     NodeParams::new()
//!         .with_name("ship")
//!         .with_position(Vec2::new(100.0, 50.0)),
//! );
//!
//! let sprite = Rc::new(Sprite::new(TextureRegion::new(
//!     TextureId(0),
//!     RectangleF::new(0.0, 0.0, 32.0, 32.0),
//! )));
//! scene.attach(ship, sprite);
//!
//! let mut queue = DrawQueue::new();
//! scene.draw(&mut queue);
//! assert_eq!(queue.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod scene;

/// Common imports for crate users
pub mod prelude {
    pub use crate::foundation::{
        math::{Mat3, Point2, Transform2D, Vec2},
        rect::RectangleF,
    };
    pub use crate::scene::{
        DrawQueue, NodeId, NodeParams, Scene, SceneEntity, SceneError, SceneNode, Sprite,
        SpriteBatch, SpriteDrawCall, SpriteDrawable, SpriteEffects, TextureId, TextureRegion,
    };
}
