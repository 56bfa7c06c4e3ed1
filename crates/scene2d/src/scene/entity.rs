//! Scene entity capability contracts
//!
//! Anything attached to a scene node implements [`SceneEntity`] so it can
//! participate in bounding-rectangle aggregation. Entities that can also be
//! drawn through a sprite batch implement the [`SpriteDrawable`] refinement
//! and advertise it through [`SceneEntity::as_sprite_drawable`]. The
//! capability query replaces runtime type inspection: the scene graph never
//! downcasts, it asks.
//!
//! Entities have no knowledge of which node(s) hold them; the node → entity
//! reference is one-directional.

use bitflags::bitflags;

use crate::foundation::math::Vec2;
use crate::foundation::rect::RectangleF;

/// Opaque handle to a texture owned by the rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A rectangular region of a source texture
///
/// For sprite atlases, `bounds` selects the sub-rectangle to sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureRegion {
    /// Source texture the region samples from
    pub texture: TextureId,

    /// Region bounds within the source texture
    pub bounds: RectangleF,
}

impl TextureRegion {
    /// Create a new texture region
    pub const fn new(texture: TextureId, bounds: RectangleF) -> Self {
        Self { texture, bounds }
    }

    /// Size of the region in texels
    pub fn size(&self) -> Vec2 {
        self.bounds.size()
    }
}

bitflags! {
    /// Mirroring applied when a sprite is submitted for drawing
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SpriteEffects: u8 {
        /// Mirror the sprite along its vertical axis
        const FLIP_HORIZONTALLY = 1;
        /// Mirror the sprite along its horizontal axis
        const FLIP_VERTICALLY = 1 << 1;
    }
}

impl Default for SpriteEffects {
    fn default() -> Self {
        Self::empty()
    }
}

/// An object attachable to a scene node
///
/// The base capability is a local-space bounding rectangle; further
/// capabilities are discovered through explicit queries at use time.
pub trait SceneEntity {
    /// Local-space bounding rectangle of this entity
    fn bounding_rectangle(&self) -> RectangleF;

    /// Query the sprite-drawing capability
    ///
    /// Returns `Some` if this entity can be submitted to a sprite batch.
    /// The default implementation opts out.
    fn as_sprite_drawable(&self) -> Option<&dyn SpriteDrawable> {
        None
    }
}

/// Refinement of [`SceneEntity`] for entities drawn through a sprite batch
///
/// All attributes are local to the owning node; the scene graph folds them
/// into the node's world transform at draw time.
pub trait SpriteDrawable: SceneEntity {
    /// Texture region to sample
    fn texture_region(&self) -> TextureRegion;

    /// Offset position relative to the owning node
    fn position(&self) -> Vec2;

    /// Rotation in radians, added to the node's world rotation
    fn rotation(&self) -> f32;

    /// Scale factors, multiplied component-wise with the world scale
    fn scale(&self) -> Vec2;

    /// RGBA tint color
    fn color(&self) -> [f32; 4];

    /// Origin point the sprite rotates and scales around
    fn origin(&self) -> Vec2;

    /// Mirroring flags
    fn effects(&self) -> SpriteEffects;

    /// Whether this entity should be drawn at all
    fn is_visible(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BoundsOnly;

    impl SceneEntity for BoundsOnly {
        fn bounding_rectangle(&self) -> RectangleF {
            RectangleF::new(0.0, 0.0, 1.0, 1.0)
        }
    }

    #[test]
    fn test_drawable_capability_defaults_to_none() {
        let entity = BoundsOnly;
        assert!(entity.as_sprite_drawable().is_none());
    }

    #[test]
    fn test_sprite_effects_combine() {
        let effects = SpriteEffects::FLIP_HORIZONTALLY | SpriteEffects::FLIP_VERTICALLY;

        assert!(effects.contains(SpriteEffects::FLIP_HORIZONTALLY));
        assert!(effects.contains(SpriteEffects::FLIP_VERTICALLY));
        assert_eq!(SpriteEffects::default(), SpriteEffects::empty());
    }

    #[test]
    fn test_texture_region_size() {
        let region = TextureRegion::new(TextureId(3), RectangleF::new(16.0, 0.0, 32.0, 48.0));

        assert_eq!(region.size(), Vec2::new(32.0, 48.0));
        assert_eq!(region.texture, TextureId(3));
    }
}
