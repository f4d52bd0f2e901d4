//! Math type aliases and helper functions.
//!
//! All rendering math is `f32`. Points are stored as [`Vec2`] so that point
//! arrays can be reinterpreted as raw bytes (nalgebra's `bytemuck` feature makes
//! vectors and matrices `Pod`).

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// 2D point. Stored as a plain vector so `&[Point]` is castable to bytes.
pub type Point = Vec2;

/// Create a point from x, y components.
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Apply a 4x4 transform to a 2D point.
///
/// The point is lifted to `(x, y, 0, 1)`. A non-zero `w` after the transform
/// is divided out, so projective matrices behave as expected. A point that
/// lands at `w == 0` has no finite image and maps to the origin.
pub fn transform_point(m: &Mat4, p: Point) -> Point {
    let v = m * Vec4::new(p.x, p.y, 0.0, 1.0);
    if v.w == 0.0 {
        Point::zeros()
    } else if v.w != 1.0 {
        Point::new(v.x / v.w, v.y / v.w)
    } else {
        Point::new(v.x, v.y)
    }
}

/// Build a translation-only 4x4 matrix in the XY plane.
pub fn mat4_from_translation(tx: f32, ty: f32) -> Mat4 {
    Mat4::new_translation(&nalgebra::Vector3::new(tx, ty, 0.0))
}

/// Build a scale-only 4x4 matrix in the XY plane (Z is left untouched).
pub fn mat4_from_scale(sx: f32, sy: f32) -> Mat4 {
    Mat4::new_nonuniform_scaling(&nalgebra::Vector3::new(sx, sy, 1.0))
}

/// Pixel-space orthographic projection for a pass of the given size.
///
/// Maps `(0, 0)` to clip `(-1, 1)` and `(width, height)` to clip `(1, -1)`,
/// flattening Z to `0.5`. Zero-sized passes are treated as one pixel.
pub fn orthographic_pixels(width: u32, height: u32) -> Mat4 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    #[rustfmt::skip]
    let result = Mat4::new(
        2.0 / w, 0.0,      0.0, -1.0,
        0.0,     -2.0 / h, 0.0,  1.0,
        0.0,     0.0,      0.0,  0.5,
        0.0,     0.0,      0.0,  1.0,
    );
    result
}

/// Resolve the transform a shader needs to draw `model` into a pass of the
/// given pixel size.
pub fn shader_transform(pass_width: u32, pass_height: u32, model: &Mat4) -> Mat4 {
    orthographic_pixels(pass_width, pass_height) * model
}
