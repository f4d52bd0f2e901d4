//! Topology and vertex-type tags.
//!
//! This module provides:
//! - [`VertexMode`] - How the caller describes triangle assembly (includes fans)
//! - [`PrimitiveTopology`] - What the GPU pipeline actually draws (no fans)
//! - [`VertexType`] - Which fixed vertex layout a draw should use

/// Primitive topology understood by the GPU pipeline.
///
/// Fans are not representable here; they are unrolled into lists before a
/// draw ever reaches pipeline selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Every three vertices form a triangle.
    #[default]
    TriangleList,
    /// Vertices form a connected strip of triangles.
    TriangleStrip,
}

impl PrimitiveTopology {
    /// Get the number of vertices per primitive (for non-strip topologies).
    pub fn vertices_per_primitive(&self) -> Option<u32> {
        match self {
            Self::TriangleList => Some(3),
            Self::TriangleStrip => None, // Variable
        }
    }

    /// Number of triangles drawn from `count` vertices or indices.
    pub fn primitive_count(&self, count: u32) -> u32 {
        match self {
            Self::TriangleList => count / 3,
            Self::TriangleStrip => count.saturating_sub(2),
        }
    }
}

/// How a user-supplied mesh assembles its vertices into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexMode {
    /// Independent triangles, three vertices each.
    #[default]
    Triangles,
    /// Each vertex after the second forms a triangle with the previous two.
    TriangleStrip,
    /// Every triangle shares the first vertex.
    TriangleFan,
}

impl VertexMode {
    /// The pipeline topology used to draw this mode.
    ///
    /// Fans are drawn as lists once their indices have been unrolled.
    pub fn topology(&self) -> PrimitiveTopology {
        match self {
            Self::TriangleFan => PrimitiveTopology::TriangleList,
            Self::TriangleStrip => PrimitiveTopology::TriangleStrip,
            Self::Triangles => PrimitiveTopology::TriangleList,
        }
    }
}

/// The fixed vertex layout a draw needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexType {
    /// Position only.
    Position,
    /// Position and per-vertex color.
    Color,
    /// Position, texture coordinates and per-vertex color.
    Uv,
}
