//! Transient GPU memory.
//!
//! - [`Buffer`] - Host-visible block of memory
//! - [`TransientBuffer`] - Block allocator for per-frame geometry
//! - [`TransientAllocator`] - Allocation seam used by geometry packers
//! - [`BufferView`] - Region of a transient block

mod buffer;
mod transient;

pub use buffer::Buffer;
pub use transient::{BufferView, TransientAllocator, TransientBuffer};
