//! CPU-side mesh types.
//!
//! This module provides GPU-agnostic mesh data structures:
//!
//! - [`VerticesMesh`] - User-supplied 2D vertices with optional colors, texture
//!   coordinates and indices, normalized for the pipeline at construction
//! - [`VerticesDescriptor`] - Builder for a [`VerticesMesh`]
//! - [`VertexMode`] / [`PrimitiveTopology`] - Caller-facing vs pipeline-facing topology
//! - [`VertexType`] - Which fixed vertex layout a draw needs
//! - [`normalize_indices`] - Fan-to-list index rewriting
//!
//! These types are re-exported by `vellum-graphics` for convenience.

mod data;
mod error;
mod topology;
mod vertices;

pub use data::{PrimitiveTopology, VertexMode, VertexType};
pub use error::MeshError;
pub use topology::{normalize_indices, unroll_fan};
pub use vertices::{VerticesDescriptor, VerticesMesh};
