//! Math utilities and types
//!
//! Provides the fundamental math types for 3D rendering, plus the two
//! transform helpers the batching pipeline uses to bake object geometry
//! into world space.

pub use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Transform a position by the full 4x4 model matrix, translation included.
pub fn transform_position(model: &Mat4, position: [f32; 3]) -> [f32; 3] {
    let p = model.transform_point(&Point3::new(position[0], position[1], position[2]));
    [p.x, p.y, p.z]
}

/// Transform a normal by the upper-left 3x3 block of the model matrix.
///
/// Normals are directions, so the translation column must not apply.
pub fn transform_normal(model: &Mat4, normal: [f32; 3]) -> [f32; 3] {
    let block: Mat3 = model.fixed_view::<3, 3>(0, 0).into_owned();
    let n = block * Vec3::new(normal[0], normal[1], normal[2]);
    [n.x, n.y, n.z]
}
