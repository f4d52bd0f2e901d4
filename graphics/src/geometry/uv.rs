//! Texture coordinate generation.
//!
//! Texture coordinates are produced by mapping a source point (the vertex's
//! own texture coordinate, or its position) through the texture coverage's
//! normalizing transform and the effect transform, then clamping just inside
//! the unit square so samplers never read across the far texture edge.

use vellum_core::geometry::Rect;
use vellum_core::math::{Mat4, Point, point};

/// Distance kept from the far edge of the texture when clamping.
pub const UV_EDGE_EPSILON: f32 = 1e-3;

/// Compose the transform from source coordinates to texture space.
///
/// `effect_transform` applies first, then the normalizing transform of
/// `texture_coverage`.
pub fn uv_transform(texture_coverage: &Rect, effect_transform: &Mat4) -> Mat4 {
    texture_coverage.normalizing_transform() * effect_transform
}

/// Clamp both components to `[0, 1 - UV_EDGE_EPSILON]`.
///
/// NaN clamps to 0.
pub fn clamp_uv(uv: Point) -> Point {
    point(clamp_component(uv.x), clamp_component(uv.y))
}

#[inline]
fn clamp_component(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0 - UV_EDGE_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_core::math::{mat4_from_translation, transform_point};

    fn assert_close(a: Point, b: Point) {
        assert!((a - b).norm() < 1e-6, "{a:?} != {b:?}");
    }

    #[test]
    fn test_clamp_uv() {
        assert_eq!(clamp_uv(point(0.25, 0.5)), point(0.25, 0.5));
        assert_eq!(clamp_uv(point(-1.0, 2.0)), point(0.0, 1.0 - UV_EDGE_EPSILON));
        assert_eq!(clamp_uv(point(1.0, 0.0)), point(1.0 - UV_EDGE_EPSILON, 0.0));
        assert_eq!(clamp_uv(point(f32::NAN, f32::INFINITY)), point(0.0, 1.0 - UV_EDGE_EPSILON));
    }

    #[test]
    fn test_uv_transform_normalizes_coverage() {
        let coverage = Rect::from_ltrb(0.0, 0.0, 100.0, 100.0);
        let transform = uv_transform(&coverage, &Mat4::identity());

        assert_close(transform_point(&transform, point(50.0, 50.0)), point(0.5, 0.5));
        assert_close(transform_point(&transform, point(100.0, 100.0)), point(1.0, 1.0));
    }

    #[test]
    fn test_uv_transform_applies_effect_first() {
        let coverage = Rect::from_ltrb(16.0, 32.0, 80.0, 64.0);
        let effect = mat4_from_translation(16.0, 32.0);
        let transform = uv_transform(&coverage, &effect);

        assert_close(transform_point(&transform, point(0.0, 0.0)), point(0.0, 0.0));
        assert_close(transform_point(&transform, point(32.0, 16.0)), point(0.5, 0.5));
    }

    #[test]
    fn test_uv_transform_empty_coverage() {
        let coverage = Rect::from_ltrb(10.0, 10.0, 10.0, 20.0);
        let transform = uv_transform(&coverage, &Mat4::identity());
        assert_eq!(transform_point(&transform, point(12.0, 15.0)), point(0.0, 0.0));
    }
}
