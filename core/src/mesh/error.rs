//! Mesh validation errors.

use std::fmt;

/// A broken caller contract detected by [`VerticesMesh::validate`].
///
/// [`VerticesMesh::validate`]: super::VerticesMesh::validate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The color array is non-empty but its length differs from the vertex count.
    ColorCountMismatch { expected: usize, actual: usize },
    /// The texture coordinate array is non-empty but its length differs from the vertex count.
    TextureCoordinateCountMismatch { expected: usize, actual: usize },
    /// An index points past the end of the vertex array.
    IndexOutOfRange {
        position: usize,
        index: u16,
        vertex_count: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColorCountMismatch { expected, actual } => {
                write!(f, "expected {expected} colors, got {actual}")
            }
            Self::TextureCoordinateCountMismatch { expected, actual } => {
                write!(f, "expected {expected} texture coordinates, got {actual}")
            }
            Self::IndexOutOfRange {
                position,
                index,
                vertex_count,
            } => write!(
                f,
                "index {index} at position {position} is out of range for {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for MeshError {}
