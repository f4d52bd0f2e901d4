//! Host-visible buffer resource.

use crate::types::BufferDescriptor;

/// A block of host-visible memory that a backend uploads or maps for the GPU.
///
/// Buffers are owned by a [`TransientBuffer`], which hands out sub-ranges of
/// them as [`BufferView`]s.
///
/// [`TransientBuffer`]: super::TransientBuffer
/// [`BufferView`]: super::BufferView
pub struct Buffer {
    descriptor: BufferDescriptor,
    data: Vec<u8>,
}

impl Buffer {
    /// Create a zero-filled buffer matching the descriptor.
    pub(crate) fn new(descriptor: BufferDescriptor) -> Self {
        let data = vec![0; descriptor.size as usize];
        Self { descriptor, data }
    }

    /// Get the buffer descriptor.
    pub fn descriptor(&self) -> &BufferDescriptor {
        &self.descriptor
    }

    /// Get the buffer size in bytes.
    pub fn size(&self) -> u64 {
        self.descriptor.size
    }

    /// Get the buffer label, if set.
    pub fn label(&self) -> Option<&str> {
        self.descriptor.label.as_deref()
    }

    /// Get the buffer contents.
    pub fn contents(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer contents for writing.
    pub(crate) fn contents_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("size", &self.descriptor.size)
            .field("usage", &self.descriptor.usage)
            .field("label", &self.descriptor.label)
            .finish()
    }
}

// Ensure Buffer is Send + Sync
static_assertions::assert_impl_all!(Buffer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BufferUsage;

    #[test]
    fn test_buffer_debug() {
        let desc = BufferDescriptor::new(1024, BufferUsage::VERTEX);
        let buffer = Buffer::new(desc);
        let debug = format!("{:?}", buffer);
        assert!(debug.contains("Buffer"));
        assert!(debug.contains("1024"));
    }

    #[test]
    fn test_buffer_is_zeroed() {
        let desc = BufferDescriptor::new(64, BufferUsage::INDEX).with_label("indices");
        let buffer = Buffer::new(desc);
        assert_eq!(buffer.size(), 64);
        assert_eq!(buffer.label(), Some("indices"));
        assert!(buffer.contents().iter().all(|&b| b == 0));
    }
}
