//! User-supplied vertex meshes.
//!
//! A [`VerticesMesh`] is built once per draw from caller-owned arrays. Its
//! indices are normalized during construction (fans become lists), after which
//! the mesh is immutable and only answers queries.
//!
//! # Example
//!
//! ```
//! use vellum_core::geometry::Rect;
//! use vellum_core::math::point;
//! use vellum_core::mesh::{VertexMode, VertexType, VerticesDescriptor};
//!
//! let mesh = VerticesDescriptor::new(
//!     vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0), point(0.0, 10.0)],
//!     Rect::from_ltrb(0.0, 0.0, 10.0, 10.0),
//! )
//! .with_mode(VertexMode::TriangleFan)
//! .build();
//!
//! assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
//! assert_eq!(mesh.vertex_type(), VertexType::Position);
//! ```

use crate::geometry::{Color, Rect};
use crate::math::{Mat4, Point};

use super::data::{PrimitiveTopology, VertexMode, VertexType};
use super::error::MeshError;
use super::topology::normalize_indices;

/// An immutable mesh of 2D vertices with optional colors, texture coordinates
/// and indices.
///
/// # Invariants
///
/// - Stored indices never use fan topology; fans are unrolled at construction.
/// - Indices refer to the unmodified `vertices`, `colors` and
///   `texture_coordinates` arrays.
/// - `bounds` is supplied by the caller and used as-is for coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticesMesh {
    vertices: Vec<Point>,
    colors: Vec<Color>,
    texture_coordinates: Vec<Point>,
    indices: Vec<u16>,
    bounds: Rect,
    vertex_mode: VertexMode,
    degenerate_fan: bool,
}

impl VerticesMesh {
    /// Create a mesh, normalizing its indices for `vertex_mode`.
    ///
    /// `colors` and `texture_coordinates` may be empty; when present they must
    /// have one entry per vertex. That contract is checked by [`validate`], not
    /// here.
    ///
    /// [`validate`]: Self::validate
    pub fn new(
        vertices: Vec<Point>,
        indices: Vec<u16>,
        texture_coordinates: Vec<Point>,
        colors: Vec<Color>,
        bounds: Rect,
        vertex_mode: VertexMode,
    ) -> Self {
        let (indices, degenerate_fan) =
            match normalize_indices(vertex_mode, vertices.len(), indices) {
                Some(normalized) => (normalized, false),
                None => {
                    log::warn!(
                        "VerticesMesh: degenerate triangle fan ({} vertices), nothing will be drawn",
                        vertices.len()
                    );
                    (Vec::new(), true)
                }
            };

        Self {
            vertices,
            colors,
            texture_coordinates,
            indices,
            bounds,
            vertex_mode,
            degenerate_fan,
        }
    }

    /// Get the vertex positions.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Get the per-vertex colors (empty if absent).
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Get the per-vertex texture coordinates (empty if absent).
    pub fn texture_coordinates(&self) -> &[Point] {
        &self.texture_coordinates
    }

    /// Get the normalized indices (empty means draw vertices in order).
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Get the caller-supplied bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Get the mode the mesh was created with.
    ///
    /// Kept for provenance only; use [`primitive_topology`] to draw.
    ///
    /// [`primitive_topology`]: Self::primitive_topology
    pub fn vertex_mode(&self) -> VertexMode {
        self.vertex_mode
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of normalized indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Check if this mesh uses indexed drawing.
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Check if the mesh was a fan with no complete triangle.
    ///
    /// Such a mesh has no indices but must not be drawn as a plain list.
    pub fn is_degenerate_fan(&self) -> bool {
        self.degenerate_fan
    }

    /// The topology the pipeline should use. Never reports a fan.
    pub fn primitive_topology(&self) -> PrimitiveTopology {
        self.vertex_mode.topology()
    }

    /// Number of vertices the draw call should consume.
    ///
    /// The index count when indexed, otherwise the vertex count. Degenerate
    /// fans draw nothing.
    pub fn draw_count(&self) -> usize {
        if self.degenerate_fan {
            0
        } else if self.is_indexed() {
            self.indices.len()
        } else {
            self.vertices.len()
        }
    }

    /// Number of triangles the draw produces.
    pub fn primitive_count(&self) -> u32 {
        let count = u32::try_from(self.draw_count()).unwrap_or(u32::MAX);
        self.primitive_topology().primitive_count(count)
    }

    /// Check if per-vertex colors are present.
    pub fn has_vertex_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Check if per-vertex texture coordinates are present.
    pub fn has_texture_coordinates(&self) -> bool {
        !self.texture_coordinates.is_empty()
    }

    /// Tight bounds of the texture coordinates.
    ///
    /// Returns `None` without texture coordinates or without vertices.
    pub fn texture_coordinate_coverage(&self) -> Option<Rect> {
        if !self.has_texture_coordinates() || self.vertices.is_empty() {
            return None;
        }
        Rect::from_point_bounds(self.texture_coordinates.iter().copied())
    }

    /// Screen-space coverage: the stored bounds under `transform`.
    ///
    /// Never derived from the vertex data.
    pub fn coverage(&self, transform: &Mat4) -> Rect {
        self.bounds.transform_bounds(transform)
    }

    /// Select the vertex layout for a draw.
    ///
    /// Colors win over texture coordinates when both are present.
    pub fn vertex_type(&self) -> VertexType {
        if self.has_vertex_colors() {
            VertexType::Color
        } else if self.has_texture_coordinates() {
            VertexType::Uv
        } else {
            VertexType::Position
        }
    }

    /// Check the caller contract: attribute arrays are empty or match the
    /// vertex count, and every index is in range.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();

        if self.has_vertex_colors() && self.colors.len() != vertex_count {
            return Err(MeshError::ColorCountMismatch {
                expected: vertex_count,
                actual: self.colors.len(),
            });
        }

        if self.has_texture_coordinates() && self.texture_coordinates.len() != vertex_count {
            return Err(MeshError::TextureCoordinateCountMismatch {
                expected: vertex_count,
                actual: self.texture_coordinates.len(),
            });
        }

        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            });
        }

        Ok(())
    }
}

// Read-only after construction
static_assertions::assert_impl_all!(VerticesMesh: Send, Sync);

/// Builder for a [`VerticesMesh`].
///
/// Only vertices and bounds are required; everything else defaults to empty
/// and [`VertexMode::Triangles`].
#[derive(Debug, Clone)]
pub struct VerticesDescriptor {
    /// Vertex positions.
    pub vertices: Vec<Point>,
    /// Indices into `vertices` (empty for sequential drawing).
    pub indices: Vec<u16>,
    /// Per-vertex texture coordinates (empty if absent).
    pub texture_coordinates: Vec<Point>,
    /// Per-vertex colors (empty if absent).
    pub colors: Vec<Color>,
    /// Precomputed bounds used for coverage.
    pub bounds: Rect,
    /// Triangle assembly mode.
    pub mode: VertexMode,
}

impl VerticesDescriptor {
    /// Create a descriptor from vertices and their bounds.
    pub fn new(vertices: Vec<Point>, bounds: Rect) -> Self {
        Self {
            vertices,
            indices: Vec::new(),
            texture_coordinates: Vec::new(),
            colors: Vec::new(),
            bounds,
            mode: VertexMode::Triangles,
        }
    }

    /// Set the index list.
    pub fn with_indices(mut self, indices: Vec<u16>) -> Self {
        self.indices = indices;
        self
    }

    /// Set per-vertex texture coordinates.
    pub fn with_texture_coordinates(mut self, texture_coordinates: Vec<Point>) -> Self {
        self.texture_coordinates = texture_coordinates;
        self
    }

    /// Set per-vertex colors.
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Set the triangle assembly mode.
    pub fn with_mode(mut self, mode: VertexMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the mesh, normalizing its indices.
    pub fn build(self) -> VerticesMesh {
        VerticesMesh::new(
            self.vertices,
            self.indices,
            self.texture_coordinates,
            self.colors,
            self.bounds,
            self.mode,
        )
    }
}
