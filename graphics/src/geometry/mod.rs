//! Draw-ready geometry.
//!
//! - [`VerticesGeometry`] - Packs a user vertex mesh into a fixed vertex layout
//! - [`GeometryResult`] / [`VertexBufferBinding`] - What a draw call consumes
//! - [`uv_transform`] / [`clamp_uv`] - Texture coordinate generation

mod result;
mod uv;
mod vertices;

pub use result::{GeometryResult, VertexBufferBinding};
pub use uv::{UV_EDGE_EPSILON, clamp_uv, uv_transform};
pub use vertices::VerticesGeometry;
