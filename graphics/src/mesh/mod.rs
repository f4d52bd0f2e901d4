//! Vertex records and layouts for the fixed 2D pipelines.
//!
//! - [`PositionVertex`], [`PositionColorVertex`], [`PositionUvColorVertex`] -
//!   The byte structure of one GPU vertex for each pipeline
//! - [`VertexLayout`] - Describes those records' attributes (shared via `Arc`)

mod layout;
mod vertex;

pub use layout::{VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout};
pub use vertex::{PositionColorVertex, PositionUvColorVertex, PositionVertex};
