//! Math utilities and types
//!
//! Provides the fundamental 2D math types the scene graph is built on.
//! Transforms are homogeneous 3x3 matrices acting on column vectors, so
//! in a product `A * B` the matrix `B` is applied first.

pub use nalgebra::{Matrix3, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3x3 matrix type (homogeneous 2D transform)
pub type Mat3 = Matrix3<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Transform representing position, rotation, and scale in 2D
#[derive(Debug, Clone, PartialEq)]
pub struct Transform2D {
    /// Position in parent space
    pub position: Vec2,

    /// Rotation in radians, counter-clockwise
    pub rotation: f32,

    /// Component-wise scale factors
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Transform2D {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform from full position, rotation, and scale
    pub fn new(position: Vec2, rotation: f32, scale: Vec2) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Convert to a transformation matrix
    ///
    /// Composition order is scale, then rotation, then translation.
    /// The order matters whenever scale is non-uniform.
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::new_translation(&self.position)
            * Mat3::new_rotation(self.rotation)
            * Mat3::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point2) -> Point2 {
        let matrix = self.to_matrix();
        matrix.transform_point(&point)
    }

    /// Create a transform from a transformation matrix
    pub fn from_matrix(matrix: Mat3) -> Self {
        // Extract position from the homogeneous column
        let position = Vec2::new(matrix.m13, matrix.m23);

        // Extract scale from the basis column lengths
        let scale_x = Vec2::new(matrix.m11, matrix.m21).magnitude();
        let scale_y = Vec2::new(matrix.m12, matrix.m22).magnitude();

        // Extract rotation from the first basis column (scale removed by atan2)
        let rotation = matrix.m21.atan2(matrix.m11);

        Self {
            position,
            rotation,
            scale: Vec2::new(scale_x, scale_y),
        }
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_transform_identity() {
        let transform = Transform2D::identity();

        assert_eq!(transform.position, Vec2::zeros());
        assert_eq!(transform.rotation, 0.0);
        assert_eq!(transform.scale, Vec2::new(1.0, 1.0));
        assert_relative_eq!(transform.to_matrix(), Mat3::identity(), epsilon = EPSILON);
    }

    #[test]
    fn test_scale_applies_before_translation() {
        let transform = Transform2D::new(Vec2::new(10.0, 0.0), 0.0, Vec2::new(2.0, 1.0));

        let origin = transform.transform_point(Point2::origin());
        assert_relative_eq!(origin.x, 10.0, epsilon = EPSILON);
        assert_relative_eq!(origin.y, 0.0, epsilon = EPSILON);

        // (1, 0) scales to (2, 0) first, then translates to (12, 0)
        let unit_x = transform.transform_point(Point2::new(1.0, 0.0));
        assert_relative_eq!(unit_x.x, 12.0, epsilon = EPSILON);
        assert_relative_eq!(unit_x.y, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_is_counter_clockwise() {
        let transform = Transform2D::new(Vec2::zeros(), utils::deg_to_rad(90.0), Vec2::new(1.0, 1.0));

        let rotated = transform.transform_point(Point2::new(1.0, 0.0));
        assert_relative_eq!(rotated.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(rotated.y, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_from_matrix_round_trip() {
        let transform = Transform2D::new(
            Vec2::new(3.0, -7.5),
            utils::deg_to_rad(30.0),
            Vec2::new(2.0, 0.5),
        );

        let recovered = Transform2D::from_matrix(transform.to_matrix());

        assert_relative_eq!(recovered.position.x, transform.position.x, epsilon = EPSILON);
        assert_relative_eq!(recovered.position.y, transform.position.y, epsilon = EPSILON);
        assert_relative_eq!(recovered.rotation, transform.rotation, epsilon = EPSILON);
        assert_relative_eq!(recovered.scale.x, transform.scale.x, epsilon = EPSILON);
        assert_relative_eq!(recovered.scale.y, transform.scale.y, epsilon = EPSILON);
    }
}
