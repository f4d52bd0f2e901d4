//! Axis-aligned rectangle.

use crate::math::{Mat4, Point, transform_point};

/// An axis-aligned rectangle stored as left/top/right/bottom edges.
///
/// Y grows downwards, so `top <= bottom` for a non-empty rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (minimum x).
    pub left: f32,
    /// Top edge (minimum y).
    pub top: f32,
    /// Right edge (maximum x).
    pub right: f32,
    /// Bottom edge (maximum y).
    pub bottom: f32,
}

impl Rect {
    /// Create a rect from its four edges.
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rect from an origin and a size.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_ltrb(x, y, x + width, y + height)
    }

    /// Tight bounds of a set of points.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_point_bounds<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_ltrb(first.x, first.y, first.x, first.y);
        for p in iter {
            bounds.left = bounds.left.min(p.x);
            bounds.top = bounds.top.min(p.y);
            bounds.right = bounds.right.max(p.x);
            bounds.bottom = bounds.bottom.max(p.y);
        }
        Some(bounds)
    }

    /// Width of the rect.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the rect.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Check if the rect encloses no area.
    ///
    /// NaN edges count as empty.
    pub fn is_empty(&self) -> bool {
        !(self.left < self.right && self.top < self.bottom)
    }

    /// The four corners, clockwise from the top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }

    /// Bounds of this rect after applying a transform to its corners.
    ///
    /// Only the corners are mapped and nothing is clipped against the `w = 0`
    /// plane, so the result is exact for affine transforms and for projective
    /// ones that keep `w > 0` over the whole rect.
    pub fn transform_bounds(&self, transform: &Mat4) -> Self {
        let corners = self.corners().map(|c| transform_point(transform, c));
        // Four corners are never empty
        Self::from_point_bounds(corners).unwrap_or(*self)
    }

    /// Transform mapping this rect onto the unit square.
    ///
    /// `(left, top)` maps to `(0, 0)` and `(right, bottom)` to `(1, 1)`. Empty
    /// rects, and rects whose scale or offset would not be finite, map every
    /// point to the origin.
    pub fn normalizing_transform(&self) -> Mat4 {
        if !self.is_empty() {
            let sx = 1.0 / self.width();
            let sy = 1.0 / self.height();
            let tx = -self.left * sx;
            let ty = -self.top * sy;
            let finite = sx.is_finite() && sy.is_finite() && tx.is_finite() && ty.is_finite();
            if finite && sx != 0.0 && sy != 0.0 {
                #[rustfmt::skip]
                let result = Mat4::new(
                    sx,  0.0, 0.0, tx,
                    0.0, sy,  0.0, ty,
                    0.0, 0.0, 1.0, 0.0,
                    0.0, 0.0, 0.0, 1.0,
                );
                return result;
            }
        }
        Mat4::new_nonuniform_scaling(&nalgebra::Vector3::new(0.0, 0.0, 1.0))
    }
}
