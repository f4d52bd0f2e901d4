//! # Vellum Graphics
//!
//! GPU-facing half of Vellum: packs 2D vertex meshes into the fixed vertex
//! layouts of the 2D pipelines and streams them through transient memory.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`VerticesGeometry`] - Position, position+color and position+UV+color packers
//! - [`TransientAllocator`] - Seam to the allocator that owns GPU-visible memory
//! - [`TransientBuffer`] - Block-based host implementation of that allocator
//! - [`VertexLayout`] - Attribute descriptors matching the packed records
//! - [`GeometryResult`] - The draw-ready output of a packer
//!
//! ## Example
//!
//! ```
//! use vellum_core::geometry::{Color, Rect};
//! use vellum_core::math::{Mat4, point, shader_transform};
//! use vellum_graphics::{TransientBuffer, VertexType, VerticesDescriptor, VerticesGeometry};
//!
//! let mesh = VerticesDescriptor::new(
//!     vec![point(0.0, 0.0), point(32.0, 0.0), point(0.0, 32.0)],
//!     Rect::from_ltrb(0.0, 0.0, 32.0, 32.0),
//! )
//! .with_colors(vec![Color::RED, Color::GREEN, Color::BLUE])
//! .build();
//!
//! let geometry = VerticesGeometry::new(mesh);
//! assert_eq!(geometry.vertex_type(), VertexType::Color);
//!
//! let mut transient = TransientBuffer::new(64 * 1024, "frame")?;
//! let transform = shader_transform(640, 480, &Mat4::identity());
//! let result = geometry.position_color_buffer(&mut transient, &transform)?;
//! assert_eq!(result.vertex_buffer.vertex_count, 3);
//!
//! // Next frame
//! transient.reset();
//! # Ok::<(), vellum_graphics::GraphicsError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod mesh;
pub mod resources;
pub mod types;

// Re-export main types for convenience
pub use error::GraphicsError;
pub use geometry::{GeometryResult, UV_EDGE_EPSILON, VertexBufferBinding, VerticesGeometry};
pub use mesh::{
    PositionColorVertex, PositionUvColorVertex, PositionVertex, VertexAttribute,
    VertexAttributeFormat, VertexAttributeSemantic, VertexLayout,
};
pub use resources::{Buffer, BufferView, TransientAllocator, TransientBuffer};
pub use types::{BufferDescriptor, BufferUsage, IndexType};

// Re-export CPU-side types from core
pub use vellum_core::mesh::{
    MeshError, PrimitiveTopology, VertexMode, VertexType, VerticesDescriptor, VerticesMesh,
};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
pub fn init() {
    vellum_core::init();
    log::info!("Vellum Graphics v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_layout_for_every_vertex_type() {
        assert_eq!(VertexLayout::for_vertex_type(VertexType::Position).stride, 8);
        assert_eq!(VertexLayout::for_vertex_type(VertexType::Color).stride, 24);
        assert_eq!(VertexLayout::for_vertex_type(VertexType::Uv).stride, 32);
    }
}
