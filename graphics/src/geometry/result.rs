//! Draw-ready descriptors produced by geometry packers.

use vellum_core::math::Mat4;
use vellum_core::mesh::PrimitiveTopology;

use crate::resources::BufferView;
use crate::types::IndexType;

/// Vertex and index buffers for one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VertexBufferBinding {
    /// Packed vertex records.
    pub vertex_buffer: BufferView,
    /// 16-bit indices, absent for sequential drawing.
    pub index_buffer: Option<BufferView>,
    /// Number of vertices (or indices, when indexed) the draw consumes.
    pub vertex_count: u32,
    /// [`IndexType::Uint16`] exactly when `index_buffer` is present.
    pub index_type: IndexType,
}

impl VertexBufferBinding {
    /// Check if the draw is indexed.
    pub fn is_indexed(&self) -> bool {
        self.index_buffer.is_some()
    }
}

/// Everything a render pass needs to issue one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryResult {
    /// Pipeline primitive topology. Never a fan.
    pub topology: PrimitiveTopology,
    /// Buffers and counts.
    pub vertex_buffer: VertexBufferBinding,
    /// Transform for the vertex shader.
    pub transform: Mat4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binding_is_not_indexed() {
        let binding = VertexBufferBinding::default();
        assert!(!binding.is_indexed());
        assert_eq!(binding.index_type, IndexType::None);
        assert_eq!(binding.vertex_count, 0);
    }
}
