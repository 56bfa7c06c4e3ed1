//! Concrete sprite entity
//!
//! A [`Sprite`] is a texture region plus the local draw attributes the
//! sprite batch needs. It implements both entity capabilities, so it
//! contributes to bounds aggregation and to draw traversal.

use crate::foundation::math::Vec2;
use crate::foundation::rect::RectangleF;
use crate::scene::entity::{SceneEntity, SpriteDrawable, SpriteEffects, TextureRegion};

/// A drawable texture region with local draw attributes
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Texture region to sample
    pub texture_region: TextureRegion,

    /// Offset position relative to the owning node
    pub position: Vec2,

    /// Local rotation in radians
    pub rotation: f32,

    /// Local scale factors
    pub scale: Vec2,

    /// RGBA tint color
    pub color: [f32; 4],

    /// Origin point the sprite rotates and scales around
    pub origin: Vec2,

    /// Mirroring flags
    pub effects: SpriteEffects,

    /// Whether the sprite is drawn
    pub visible: bool,
}

impl Sprite {
    /// Create a sprite for a texture region with default attributes
    pub fn new(texture_region: TextureRegion) -> Self {
        Self {
            texture_region,
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            color: [1.0, 1.0, 1.0, 1.0], // White, fully opaque
            origin: Vec2::zeros(),
            effects: SpriteEffects::empty(),
            visible: true,
        }
    }

    /// Builder pattern: Set the offset position
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: Set the rotation
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set the scale
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Builder pattern: Set the tint color
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Builder pattern: Set the origin point
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Builder pattern: Set the mirroring flags
    pub fn with_effects(mut self, effects: SpriteEffects) -> Self {
        self.effects = effects;
        self
    }

    /// Builder pattern: Set the visibility flag
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the offset position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Translate the offset position by a delta
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Set the rotation
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    /// Rotate by a delta in radians
    pub fn rotate_by(&mut self, delta_rotation: f32) {
        self.rotation += delta_rotation;
    }

    /// Show or hide the sprite
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl SceneEntity for Sprite {
    /// Local bounding rectangle: the scaled region size, positioned so the
    /// scaled origin sits at the sprite's offset position
    fn bounding_rectangle(&self) -> RectangleF {
        let size = self.texture_region.size().component_mul(&self.scale);
        let corner = self.position - self.origin.component_mul(&self.scale);

        RectangleF::new(corner.x, corner.y, size.x, size.y)
    }

    fn as_sprite_drawable(&self) -> Option<&dyn SpriteDrawable> {
        Some(self)
    }
}

impl SpriteDrawable for Sprite {
    fn texture_region(&self) -> TextureRegion {
        self.texture_region
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn scale(&self) -> Vec2 {
        self.scale
    }

    fn color(&self) -> [f32; 4] {
        self.color
    }

    fn origin(&self) -> Vec2 {
        self.origin
    }

    fn effects(&self) -> SpriteEffects {
        self.effects
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::entity::TextureId;

    fn region() -> TextureRegion {
        TextureRegion::new(TextureId(0), RectangleF::new(0.0, 0.0, 32.0, 16.0))
    }

    #[test]
    fn test_sprite_defaults() {
        let sprite = Sprite::new(region());

        assert!(sprite.visible);
        assert_eq!(sprite.color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(sprite.scale, Vec2::new(1.0, 1.0));
        assert_eq!(sprite.effects, SpriteEffects::empty());
    }

    #[test]
    fn test_sprite_builders() {
        let sprite = Sprite::new(region())
            .with_position(Vec2::new(4.0, 8.0))
            .with_rotation(1.5)
            .with_color([1.0, 0.0, 0.0, 1.0])
            .with_visible(false);

        assert_eq!(sprite.position, Vec2::new(4.0, 8.0));
        assert_eq!(sprite.rotation, 1.5);
        assert_eq!(sprite.color, [1.0, 0.0, 0.0, 1.0]);
        assert!(!sprite.visible);
    }

    #[test]
    fn test_bounding_rectangle_follows_position() {
        let sprite = Sprite::new(region()).with_position(Vec2::new(10.0, 20.0));

        assert_eq!(
            sprite.bounding_rectangle(),
            RectangleF::new(10.0, 20.0, 32.0, 16.0)
        );
    }

    #[test]
    fn test_bounding_rectangle_accounts_for_origin_and_scale() {
        let sprite = Sprite::new(region())
            .with_origin(Vec2::new(16.0, 8.0))
            .with_scale(Vec2::new(2.0, 1.0));

        // Origin is scaled before being subtracted, size is scaled
        assert_eq!(
            sprite.bounding_rectangle(),
            RectangleF::new(-32.0, -8.0, 64.0, 16.0)
        );
    }

    #[test]
    fn test_sprite_advertises_drawable_capability() {
        let sprite = Sprite::new(region());

        let drawable = sprite.as_sprite_drawable().unwrap();
        assert!(drawable.is_visible());
        assert_eq!(drawable.texture_region().texture, TextureId(0));
    }
}
