//! Per-vertex records for the fixed 2D pipelines.
//!
//! Each record is `#[repr(C)]` and `Pod`, so a packed buffer is just the
//! records' bytes laid end to end. The matching attribute descriptions live in
//! [`VertexLayout`](super::VertexLayout).
//!
//! | Record                    | Stride | Attributes                                    |
//! |---------------------------|--------|-----------------------------------------------|
//! | [`PositionVertex`]        | 8      | position `Float2` @0                          |
//! | [`PositionColorVertex`]   | 24     | position `Float2` @0, color `Float4` @8       |
//! | [`PositionUvColorVertex`] | 32     | position @0, texcoord0 `Float2` @8, color @16 |

use static_assertions::const_assert_eq;
use vellum_core::geometry::Color;
use vellum_core::math::Point;

/// Position-only vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    /// Position in model space.
    pub position: [f32; 2],
}

impl PositionVertex {
    /// Create a vertex at `position`.
    pub fn new(position: Point) -> Self {
        Self {
            position: [position.x, position.y],
        }
    }
}

/// Vertex with a position and a per-vertex color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionColorVertex {
    /// Position in model space.
    pub position: [f32; 2],
    /// Linear RGBA color.
    pub color: Color,
}

impl PositionColorVertex {
    /// Create a colored vertex.
    pub fn new(position: Point, color: Color) -> Self {
        Self {
            position: [position.x, position.y],
            color,
        }
    }
}

/// Vertex with a position, texture coordinates and a color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionUvColorVertex {
    /// Position in model space.
    pub position: [f32; 2],
    /// Texture coordinates, clamped to `[0, 1 - UV_EDGE_EPSILON]`.
    pub texture_coords: [f32; 2],
    /// Linear RGBA color.
    pub color: Color,
}

impl PositionUvColorVertex {
    /// Create a textured, colored vertex.
    pub fn new(position: Point, texture_coords: Point, color: Color) -> Self {
        Self {
            position: [position.x, position.y],
            texture_coords: [texture_coords.x, texture_coords.y],
            color,
        }
    }
}

// Must match the shader-stage layouts byte for byte
const_assert_eq!(std::mem::size_of::<PositionVertex>(), 8);
const_assert_eq!(std::mem::size_of::<PositionColorVertex>(), 24);
const_assert_eq!(std::mem::size_of::<PositionUvColorVertex>(), 32);
const_assert_eq!(std::mem::align_of::<PositionVertex>(), 4);
const_assert_eq!(std::mem::align_of::<PositionColorVertex>(), 4);
const_assert_eq!(std::mem::align_of::<PositionUvColorVertex>(), 4);
