//! Buffer usage flags, descriptors and index formats.

mod buffer;

pub use buffer::{BufferDescriptor, BufferUsage, IndexType};
