//! Vertex layout definitions for the fixed 2D pipelines.
//!
//! A [`VertexLayout`] describes one interleaved vertex buffer: its stride and
//! the attributes read from it. Pipeline selection uses these descriptors to
//! build pipelines that match the records packed by
//! [`VerticesGeometry`](crate::geometry::VerticesGeometry).
//!
//! The three fixed layouts are built once and shared via `Arc`, so draws that
//! use the same layout can be batched by pointer comparison.
//!
//! # Example
//!
//! ```
//! use vellum_graphics::{VertexAttributeSemantic, VertexLayout, VertexType};
//!
//! let layout = VertexLayout::for_vertex_type(VertexType::Uv);
//! assert_eq!(layout.stride, 32);
//! assert_eq!(
//!     layout.get_attribute(VertexAttributeSemantic::TexCoord0).map(|a| a.offset),
//!     Some(8)
//! );
//! ```

use std::sync::{Arc, OnceLock};

use vellum_core::mesh::VertexType;

use super::vertex::{PositionColorVertex, PositionUvColorVertex, PositionVertex};

/// Semantic meaning of a vertex attribute.
///
/// Semantics are used to match layout attributes with shader inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (float2).
    Position,
    /// Texture coordinates set 0 (float2).
    TexCoord0,
    /// Vertex color (float4).
    Color,
}

impl VertexAttributeSemantic {
    /// Get a unique index for this semantic (used as the shader location).
    pub fn index(&self) -> u32 {
        match self {
            Self::Position => 0,
            Self::TexCoord0 => 1,
            Self::Color => 2,
        }
    }
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Two 32-bit floats.
    Float2,
    /// Four 32-bit floats.
    Float4,
}

impl VertexAttributeFormat {
    /// Get the size in bytes of this format.
    pub fn size(&self) -> usize {
        match self {
            Self::Float2 => 8,
            Self::Float4 => 16,
        }
    }
}

/// A single vertex attribute description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: VertexAttributeSemantic,
    /// Data format of this attribute.
    pub format: VertexAttributeFormat,
    /// Byte offset within the vertex record.
    pub offset: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(semantic: VertexAttributeSemantic, format: VertexAttributeFormat, offset: u32) -> Self {
        Self {
            semantic,
            format,
            offset,
        }
    }

    /// Create a position attribute (float2).
    pub fn position(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Position,
            VertexAttributeFormat::Float2,
            offset,
        )
    }

    /// Create a texcoord0 attribute (float2).
    pub fn texcoord0(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::TexCoord0,
            VertexAttributeFormat::Float2,
            offset,
        )
    }

    /// Create a color attribute (float4).
    pub fn color(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Color,
            VertexAttributeFormat::Float4,
            offset,
        )
    }

    /// Get the end offset (offset + format size).
    pub fn end(&self) -> u32 {
        self.offset + self.format.size() as u32
    }
}

/// Describes the layout of one interleaved vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    /// Stride in bytes between consecutive vertices.
    pub stride: u32,
    /// The vertex attributes.
    pub attributes: Vec<VertexAttribute>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl VertexLayout {
    /// Create a new empty vertex layout with the given stride.
    pub fn new(stride: u32) -> Self {
        Self {
            stride,
            attributes: Vec::new(),
            label: None,
        }
    }

    /// Add a vertex attribute.
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check if this layout has a specific semantic.
    pub fn has_semantic(&self, semantic: VertexAttributeSemantic) -> bool {
        self.attributes.iter().any(|attr| attr.semantic == semantic)
    }

    /// Get an attribute by semantic.
    pub fn get_attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.semantic == semantic)
    }

    /// Validate the layout (check that every attribute fits in the stride).
    pub fn validate(&self) -> Result<(), String> {
        for attr in &self.attributes {
            if attr.end() > self.stride {
                return Err(format!(
                    "Attribute {:?} ends at byte {} but the stride is {}",
                    attr.semantic,
                    attr.end(),
                    self.stride
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Fixed Layouts
// ============================================================================

static POSITION_LAYOUT: OnceLock<Arc<VertexLayout>> = OnceLock::new();
static POSITION_COLOR_LAYOUT: OnceLock<Arc<VertexLayout>> = OnceLock::new();
static POSITION_UV_COLOR_LAYOUT: OnceLock<Arc<VertexLayout>> = OnceLock::new();

impl VertexLayout {
    /// Position-only layout (8 bytes per vertex).
    pub fn position() -> Arc<Self> {
        POSITION_LAYOUT
            .get_or_init(|| {
                Arc::new(
                    Self::new(std::mem::size_of::<PositionVertex>() as u32)
                        .with_attribute(VertexAttribute::position(0))
                        .with_label("position"),
                )
            })
            .clone()
    }

    /// Position + color layout (24 bytes per vertex).
    pub fn position_color() -> Arc<Self> {
        POSITION_COLOR_LAYOUT
            .get_or_init(|| {
                Arc::new(
                    Self::new(std::mem::size_of::<PositionColorVertex>() as u32)
                        .with_attribute(VertexAttribute::position(0))
                        .with_attribute(VertexAttribute::color(8))
                        .with_label("position_color"),
                )
            })
            .clone()
    }

    /// Position + texcoord + color layout (32 bytes per vertex).
    pub fn position_uv_color() -> Arc<Self> {
        POSITION_UV_COLOR_LAYOUT
            .get_or_init(|| {
                Arc::new(
                    Self::new(std::mem::size_of::<PositionUvColorVertex>() as u32)
                        .with_attribute(VertexAttribute::position(0))
                        .with_attribute(VertexAttribute::texcoord0(8))
                        .with_attribute(VertexAttribute::color(16))
                        .with_label("position_uv_color"),
                )
            })
            .clone()
    }

    /// The layout packed for a mesh of the given vertex type.
    pub fn for_vertex_type(vertex_type: VertexType) -> Arc<Self> {
        match vertex_type {
            VertexType::Position => Self::position(),
            VertexType::Color => Self::position_color(),
            VertexType::Uv => Self::position_uv_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_attribute_format_size() {
        assert_eq!(VertexAttributeFormat::Float2.size(), 8);
        assert_eq!(VertexAttributeFormat::Float4.size(), 16);
    }

    #[test]
    fn test_strides_match_records() {
        assert_eq!(VertexLayout::position().stride as usize, size_of::<PositionVertex>());
        assert_eq!(
            VertexLayout::position_color().stride as usize,
            size_of::<PositionColorVertex>()
        );
        assert_eq!(
            VertexLayout::position_uv_color().stride as usize,
            size_of::<PositionUvColorVertex>()
        );
    }

    #[test]
    fn test_fixed_layouts_validate() {
        for vertex_type in [VertexType::Position, VertexType::Color, VertexType::Uv] {
            assert!(VertexLayout::for_vertex_type(vertex_type).validate().is_ok());
        }
    }

    #[test]
    fn test_fixed_layouts_are_shared() {
        assert!(Arc::ptr_eq(
            &VertexLayout::position(),
            &VertexLayout::for_vertex_type(VertexType::Position)
        ));
        assert!(Arc::ptr_eq(
            &VertexLayout::for_vertex_type(VertexType::Color),
            &VertexLayout::for_vertex_type(VertexType::Color)
        ));
        assert!(Arc::ptr_eq(
            &VertexLayout::position_uv_color(),
            &VertexLayout::for_vertex_type(VertexType::Uv)
        ));
        assert!(!Arc::ptr_eq(
            &VertexLayout::position_color(),
            &VertexLayout::position_uv_color()
        ));
    }

    #[test]
    fn test_position_color_layout() {
        let layout = VertexLayout::for_vertex_type(VertexType::Color);
        assert_eq!(layout.stride, 24);
        assert!(layout.has_semantic(VertexAttributeSemantic::Position));
        assert!(layout.has_semantic(VertexAttributeSemantic::Color));
        assert!(!layout.has_semantic(VertexAttributeSemantic::TexCoord0));

        let color = layout.get_attribute(VertexAttributeSemantic::Color).unwrap();
        assert_eq!(color.offset, 8);
        assert_eq!(color.format, VertexAttributeFormat::Float4);
    }

    #[test]
    fn test_position_uv_color_layout() {
        let layout = VertexLayout::for_vertex_type(VertexType::Uv);
        assert_eq!(layout.label.as_deref(), Some("position_uv_color"));
        let offsets: Vec<_> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 8, 16]);
    }

    #[test]
    fn test_vertex_layout_validation() {
        let invalid_layout = VertexLayout::new(16)
            .with_attribute(VertexAttribute::position(0))
            .with_attribute(VertexAttribute::color(8)); // Ends at 24

        assert!(invalid_layout.validate().is_err());
    }

    #[test]
    fn test_semantic_index() {
        assert_eq!(VertexAttributeSemantic::Position.index(), 0);
        assert_eq!(VertexAttributeSemantic::TexCoord0.index(), 1);
        assert_eq!(VertexAttributeSemantic::Color.index(), 2);
    }
}
