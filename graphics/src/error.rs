//! Graphics error types.

use std::fmt;

use vellum_core::mesh::MeshError;

/// Errors that can occur while packing geometry for the GPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// An invalid parameter was provided.
    InvalidParameter(String),
    /// The transient allocator could not satisfy a request.
    OutOfMemory,
    /// The mesh breaks its attribute or index contract.
    InvalidMesh(MeshError),
    /// An internal error occurred.
    Internal(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::OutOfMemory => write!(f, "out of transient buffer memory"),
            Self::InvalidMesh(err) => write!(f, "invalid mesh: {err}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for GraphicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidMesh(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MeshError> for GraphicsError {
    fn from(err: MeshError) -> Self {
        Self::InvalidMesh(err)
    }
}
