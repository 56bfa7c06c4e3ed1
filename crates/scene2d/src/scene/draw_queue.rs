//! Draw submission contract and recording queue
//!
//! The scene graph computes *what* to submit; actual rasterization is the
//! backend's job. Backends implement [`SpriteBatch`] and receive one
//! [`SpriteDrawCall`] per visible drawable entity, in traversal order.

use crate::foundation::math::Vec2;
use crate::foundation::rect::RectangleF;
use crate::scene::entity::{SpriteEffects, TextureId};

/// A single batched sprite draw submission
///
/// Position, rotation, and scale are already in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDrawCall {
    /// Texture to sample
    pub texture: TextureId,

    /// World-space destination position
    pub position: Vec2,

    /// Source rectangle within the texture
    pub source: RectangleF,

    /// RGBA tint color
    pub color: [f32; 4],

    /// World-space rotation in radians
    pub rotation: f32,

    /// Origin point the sprite rotates and scales around
    pub origin: Vec2,

    /// World-space scale factors
    pub scale: Vec2,

    /// Mirroring flags
    pub effects: SpriteEffects,

    /// Layer depth; the scene graph always submits 0.0 (layering is the
    /// caller's concern)
    pub depth: f32,
}

/// Sink for batched sprite draw submissions
///
/// The rendering backend implements this; submission order is the draw
/// order.
pub trait SpriteBatch {
    /// Submit one sprite for drawing
    fn draw(&mut self, call: SpriteDrawCall);
}

/// Recording [`SpriteBatch`] that collects submissions in order
///
/// Useful as a bridge to backends that consume whole frames at once, and
/// for asserting on draw order in tests.
#[derive(Debug, Default)]
pub struct DrawQueue {
    commands: Vec<SpriteDrawCall>,
}

impl DrawQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded submissions in submission order
    pub fn commands(&self) -> &[SpriteDrawCall] {
        &self.commands
    }

    /// Number of recorded submissions
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been submitted
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Discard all recorded submissions
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl SpriteBatch for DrawQueue {
    fn draw(&mut self, call: SpriteDrawCall) {
        self.commands.push(call);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(texture: TextureId) -> SpriteDrawCall {
        SpriteDrawCall {
            texture,
            position: Vec2::zeros(),
            source: RectangleF::new(0.0, 0.0, 8.0, 8.0),
            color: [1.0, 1.0, 1.0, 1.0],
            rotation: 0.0,
            origin: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
            effects: SpriteEffects::empty(),
            depth: 0.0,
        }
    }

    #[test]
    fn test_queue_preserves_submission_order() {
        let mut queue = DrawQueue::new();
        queue.draw(call(TextureId(2)));
        queue.draw(call(TextureId(0)));
        queue.draw(call(TextureId(1)));

        let textures: Vec<_> = queue.commands().iter().map(|c| c.texture).collect();
        assert_eq!(textures, vec![TextureId(2), TextureId(0), TextureId(1)]);
    }

    #[test]
    fn test_queue_clear() {
        let mut queue = DrawQueue::new();
        queue.draw(call(TextureId(0)));
        assert_eq!(queue.len(), 1);

        queue.clear();
        assert!(queue.is_empty());
    }
}
