//! Packing user vertex meshes into GPU buffers.
//!
//! [`VerticesGeometry`] wraps a [`VerticesMesh`] and writes it into one of the
//! three fixed vertex layouts through a [`TransientAllocator`]. Indices are
//! copied verbatim after the vertex records; a mesh without indices is drawn
//! in order.
//!
//! # Example
//!
//! ```
//! use vellum_core::geometry::Rect;
//! use vellum_core::math::{Mat4, point};
//! use vellum_graphics::{
//!     IndexType, PrimitiveTopology, TransientBuffer, VertexMode, VerticesDescriptor,
//!     VerticesGeometry,
//! };
//!
//! let mesh = VerticesDescriptor::new(
//!     vec![point(0.0, 0.0), point(8.0, 0.0), point(8.0, 8.0), point(0.0, 8.0)],
//!     Rect::from_ltrb(0.0, 0.0, 8.0, 8.0),
//! )
//! .with_mode(VertexMode::TriangleFan)
//! .build();
//!
//! let geometry = VerticesGeometry::new(mesh);
//! let mut transient = TransientBuffer::new(4096, "frame")?;
//! let result = geometry.position_buffer(&mut transient, &Mat4::identity())?;
//!
//! assert_eq!(result.topology, PrimitiveTopology::TriangleList);
//! assert_eq!(result.vertex_buffer.vertex_count, 6);
//! assert_eq!(result.vertex_buffer.index_type, IndexType::Uint16);
//! # Ok::<(), vellum_graphics::GraphicsError>(())
//! ```

use std::mem::{align_of, size_of};

use vellum_core::geometry::{Color, Rect};
use vellum_core::math::{Mat4, transform_point};
use vellum_core::mesh::{VertexType, VerticesMesh};

use crate::error::GraphicsError;
use crate::mesh::{PositionColorVertex, PositionUvColorVertex, PositionVertex};
use crate::resources::{BufferView, TransientAllocator};
use crate::types::IndexType;

use super::result::{GeometryResult, VertexBufferBinding};
use super::uv::{clamp_uv, uv_transform};

/// A drawable vertex mesh.
///
/// Every packer checks the mesh contract first and returns
/// [`GraphicsError::InvalidMesh`] instead of reading out of bounds. Missing
/// colors pack as [`Color::TRANSPARENT`].
#[derive(Debug, Clone, PartialEq)]
pub struct VerticesGeometry {
    mesh: VerticesMesh,
}

impl VerticesGeometry {
    /// Wrap a mesh for drawing.
    pub fn new(mesh: VerticesMesh) -> Self {
        Self { mesh }
    }

    /// Get the underlying mesh.
    pub fn mesh(&self) -> &VerticesMesh {
        &self.mesh
    }

    /// The vertex layout this mesh should be drawn with.
    pub fn vertex_type(&self) -> VertexType {
        self.mesh.vertex_type()
    }

    /// Screen-space coverage under `transform`.
    pub fn coverage(&self, transform: &Mat4) -> Rect {
        self.mesh.coverage(transform)
    }

    /// Pack positions only.
    ///
    /// The vertex buffer is a byte copy of the vertex array.
    pub fn position_buffer(
        &self,
        allocator: &mut dyn TransientAllocator,
        transform: &Mat4,
    ) -> Result<GeometryResult, GraphicsError> {
        self.mesh.validate()?;

        let vertex_buffer = allocator.emplace(
            bytemuck::cast_slice(self.mesh.vertices()),
            align_of::<PositionVertex>() as u64,
        )?;

        self.finish(allocator, vertex_buffer, transform, VertexType::Position)
    }

    /// Pack positions with per-vertex colors.
    pub fn position_color_buffer(
        &self,
        allocator: &mut dyn TransientAllocator,
        transform: &Mat4,
    ) -> Result<GeometryResult, GraphicsError> {
        self.mesh.validate()?;

        let vertices = self.mesh.vertices();
        let colors = self.mesh.colors();
        let stride = size_of::<PositionColorVertex>();

        let vertex_buffer = allocator.emplace_with(
            (vertices.len() * stride) as u64,
            align_of::<PositionColorVertex>() as u64,
            &mut |dst: &mut [u8]| {
                for (i, (chunk, &position)) in
                    dst.chunks_exact_mut(stride).zip(vertices).enumerate()
                {
                    let color = colors.get(i).copied().unwrap_or(Color::TRANSPARENT);
                    let vertex = PositionColorVertex::new(position, color);
                    chunk.copy_from_slice(bytemuck::bytes_of(&vertex));
                }
            },
        )?;

        self.finish(allocator, vertex_buffer, transform, VertexType::Color)
    }

    /// Pack positions, texture coordinates and colors.
    ///
    /// Each vertex's texture coordinate (or its position, when the mesh has no
    /// texture coordinates) is mapped through `effect_transform` and then onto
    /// `texture_coverage`'s unit square, and clamped to
    /// `[0, 1 - UV_EDGE_EPSILON]`.
    pub fn position_uv_color_buffer(
        &self,
        texture_coverage: Rect,
        effect_transform: &Mat4,
        allocator: &mut dyn TransientAllocator,
        transform: &Mat4,
    ) -> Result<GeometryResult, GraphicsError> {
        self.mesh.validate()?;

        let uv_transform = uv_transform(&texture_coverage, effect_transform);
        let vertices = self.mesh.vertices();
        let texture_coordinates = self.mesh.texture_coordinates();
        let colors = self.mesh.colors();
        let stride = size_of::<PositionUvColorVertex>();

        let vertex_buffer = allocator.emplace_with(
            (vertices.len() * stride) as u64,
            align_of::<PositionUvColorVertex>() as u64,
            &mut |dst: &mut [u8]| {
                for (i, (chunk, &position)) in
                    dst.chunks_exact_mut(stride).zip(vertices).enumerate()
                {
                    let source = texture_coordinates.get(i).copied().unwrap_or(position);
                    let uv = clamp_uv(transform_point(&uv_transform, source));
                    let color = colors.get(i).copied().unwrap_or(Color::TRANSPARENT);
                    let vertex = PositionUvColorVertex::new(position, uv, color);
                    chunk.copy_from_slice(bytemuck::bytes_of(&vertex));
                }
            },
        )?;

        self.finish(allocator, vertex_buffer, transform, VertexType::Uv)
    }

    /// Copy the indices and assemble the result.
    fn finish(
        &self,
        allocator: &mut dyn TransientAllocator,
        vertex_buffer: BufferView,
        transform: &Mat4,
        vertex_type: VertexType,
    ) -> Result<GeometryResult, GraphicsError> {
        let index_buffer = if self.mesh.is_indexed() {
            Some(allocator.emplace(
                bytemuck::cast_slice(self.mesh.indices()),
                align_of::<u16>() as u64,
            )?)
        } else {
            None
        };

        let draw_count = self.mesh.draw_count();
        let vertex_count = u32::try_from(draw_count).map_err(|_| {
            GraphicsError::InvalidParameter(format!("draw count {draw_count} exceeds u32"))
        })?;

        let index_type = if index_buffer.is_some() {
            IndexType::Uint16
        } else {
            IndexType::None
        };

        log::debug!(
            "VerticesGeometry: packed {} vertices as {:?} ({} bytes), draw count {}, {:?}",
            self.mesh.vertex_count(),
            vertex_type,
            vertex_buffer.size,
            vertex_count,
            index_type
        );

        Ok(GeometryResult {
            topology: self.mesh.primitive_topology(),
            vertex_buffer: VertexBufferBinding {
                vertex_buffer,
                index_buffer,
                vertex_count,
                index_type,
            },
            transform: *transform,
        })
    }
}

impl From<VerticesMesh> for VerticesGeometry {
    fn from(mesh: VerticesMesh) -> Self {
        Self::new(mesh)
    }
}

static_assertions::assert_impl_all!(VerticesGeometry: Send, Sync);
