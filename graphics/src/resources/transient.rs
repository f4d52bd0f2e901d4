//! Transient buffer for per-frame geometry streaming.
//!
//! Geometry for immediate-mode draws is rebuilt every frame, so instead of
//! creating a buffer per draw, a transient buffer pre-allocates large blocks
//! and hands out consecutive, aligned regions of them. When a block is full
//! the next one is used (and created on first use). At the start of a frame
//! [`TransientBuffer::reset`] rewinds to the first block and keeps every block
//! for reuse.
//!
//! Packers only see the [`TransientAllocator`] trait, so a backend can plug in
//! its own GPU-mapped allocator instead.
//!
//! # Example
//!
//! ```
//! use vellum_graphics::{TransientAllocator, TransientBuffer};
//!
//! let mut transient = TransientBuffer::new(64 * 1024, "geometry")?;
//!
//! // Copy raw bytes
//! let indices: [u16; 3] = [0, 1, 2];
//! let view = transient.emplace(bytemuck::cast_slice(&indices), 2)?;
//! assert_eq!(transient.contents(&view), Some(bytemuck::cast_slice(&indices)));
//!
//! // Fill computed data in place
//! let view = transient.emplace_with(8, 4, &mut |dst: &mut [u8]| dst.fill(0xff))?;
//! assert_eq!(view.size, 8);
//!
//! // Next frame
//! transient.reset();
//! assert_eq!(transient.contents(&view), None);
//! # Ok::<(), vellum_graphics::GraphicsError>(())
//! ```

use std::ops::Range;

use crate::error::GraphicsError;
use crate::types::{BufferDescriptor, BufferUsage};

use super::buffer::Buffer;

/// A region of a transient buffer block.
///
/// Views are plain handles: they stay meaningful until the allocator that
/// produced them is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BufferView {
    /// Index of the block holding the data.
    pub block: usize,
    /// Byte offset into the block.
    pub offset: u64,
    /// Size of the region in bytes.
    pub size: u64,
    /// Frame the view was allocated in.
    pub frame: u64,
}

impl BufferView {
    /// Get the end offset (offset + size).
    pub fn end(&self) -> u64 {
        self.offset + self.size
    }

    /// Check if the view covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Byte range within the block.
    pub fn range(&self) -> Range<usize> {
        self.offset as usize..self.end() as usize
    }
}

/// Allocator of short-lived, GPU-visible memory.
///
/// Alignments must be powers of two. Implementations return
/// [`GraphicsError::InvalidParameter`] for other values and
/// [`GraphicsError::OutOfMemory`] when a request cannot be satisfied.
pub trait TransientAllocator {
    /// Allocate `size` bytes at `alignment` and let `fill` write them.
    ///
    /// `fill` receives exactly `size` bytes.
    fn emplace_with(
        &mut self,
        size: u64,
        alignment: u64,
        fill: &mut dyn FnMut(&mut [u8]),
    ) -> Result<BufferView, GraphicsError>;

    /// Copy `bytes` into a new allocation at `alignment`.
    fn emplace(&mut self, bytes: &[u8], alignment: u64) -> Result<BufferView, GraphicsError> {
        self.emplace_with(bytes.len() as u64, alignment, &mut |dst: &mut [u8]| {
            dst.copy_from_slice(bytes)
        })
    }
}

/// A block-based transient buffer living in host memory.
///
/// # Alignment
///
/// Offsets are aligned relative to the start of their block, which is what a
/// GPU binding offset needs. Host-side contents are only ever read and written
/// as bytes.
///
/// # Thread Safety
///
/// `TransientBuffer` is NOT thread-safe. If you need concurrent access, wrap it
/// in a mutex or use separate transient buffers per thread.
pub struct TransientBuffer {
    blocks: Vec<Buffer>,
    block_size: u64,
    current_block: usize,
    write_offset: u64,
    default_alignment: u64,
    frame: u64,
    label: String,
}

impl TransientBuffer {
    /// Default alignment for allocations (16 bytes, enough for any vertex record).
    pub const DEFAULT_ALIGNMENT: u64 = 16;

    /// Largest single allocation (1 GB).
    pub const MAX_ALLOCATION_SIZE: u64 = 1 << 30;

    /// Create a new transient buffer whose blocks hold `block_size` bytes.
    ///
    /// # Arguments
    ///
    /// * `block_size` - Size of each block in bytes
    /// * `label` - Debug label prefix for the blocks
    pub fn new(block_size: u64, label: &str) -> Result<Self, GraphicsError> {
        Self::with_alignment(block_size, label, Self::DEFAULT_ALIGNMENT)
    }

    /// Create a new transient buffer with a custom default alignment.
    ///
    /// # Arguments
    ///
    /// * `block_size` - Size of each block in bytes
    /// * `label` - Debug label prefix for the blocks
    /// * `alignment` - Alignment for [`allocate`] (must be power of 2)
    ///
    /// [`allocate`]: Self::allocate
    pub fn with_alignment(
        block_size: u64,
        label: &str,
        alignment: u64,
    ) -> Result<Self, GraphicsError> {
        check_alignment(alignment)?;

        if block_size == 0 {
            return Err(GraphicsError::InvalidParameter(
                "transient block size cannot be zero".to_string(),
            ));
        }

        if block_size > Self::MAX_ALLOCATION_SIZE {
            return Err(GraphicsError::InvalidParameter(format!(
                "transient block size {block_size} exceeds maximum {}",
                Self::MAX_ALLOCATION_SIZE
            )));
        }

        // Ensure block size is aligned; both inputs are capped so this cannot overflow
        let block_size = align_up(block_size, alignment);
        if block_size > Self::MAX_ALLOCATION_SIZE {
            return Err(GraphicsError::InvalidParameter(format!(
                "aligned transient block size {block_size} exceeds maximum {}",
                Self::MAX_ALLOCATION_SIZE
            )));
        }

        let mut transient = Self {
            blocks: Vec::new(),
            block_size,
            current_block: 0,
            write_offset: 0,
            default_alignment: alignment,
            frame: 0,
            label: label.to_string(),
        };
        let first = transient.create_block(0, block_size);
        transient.blocks.push(first);
        Ok(transient)
    }

    /// Get the default size of each block.
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Get the number of blocks allocated so far.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get a block by index.
    pub fn block(&self, index: usize) -> Option<&Buffer> {
        self.blocks.get(index)
    }

    /// Get the block currently being written.
    pub fn current_block(&self) -> usize {
        self.current_block
    }

    /// Get the write offset within the current block.
    pub fn write_offset(&self) -> u64 {
        self.write_offset
    }

    /// Get the number of frames that have been reset since creation.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Get the space remaining in the current block.
    pub fn remaining(&self) -> u64 {
        self.blocks[self.current_block].size() - self.write_offset
    }

    /// Allocate space with the default alignment.
    pub fn allocate(&mut self, size: u64) -> Result<BufferView, GraphicsError> {
        self.allocate_aligned(size, self.default_alignment)
    }

    /// Allocate space with a custom alignment.
    ///
    /// Moves to the next block when the current one cannot fit the request.
    /// Requests larger than the block size get a dedicated, larger block.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the allocation in bytes
    /// * `alignment` - Required alignment (must be power of 2)
    pub fn allocate_aligned(
        &mut self,
        size: u64,
        alignment: u64,
    ) -> Result<BufferView, GraphicsError> {
        check_alignment(alignment)?;

        if size > Self::MAX_ALLOCATION_SIZE {
            return Err(GraphicsError::OutOfMemory);
        }

        if size == 0 {
            // Offset 0 is aligned for any alignment
            let offset = align_up(self.write_offset, alignment);
            let offset = if offset <= self.blocks[self.current_block].size() {
                offset
            } else {
                0
            };
            return Ok(self.view(offset, 0));
        }

        let mut aligned_offset = align_up(self.write_offset, alignment);
        if aligned_offset + size > self.blocks[self.current_block].size() {
            self.advance_block(size);
            aligned_offset = 0;
        }

        self.write_offset = aligned_offset + size;

        log::trace!(
            "TransientBuffer '{}': allocated {} bytes at block {} offset {}",
            self.label,
            size,
            self.current_block,
            aligned_offset
        );

        Ok(self.view(aligned_offset, size))
    }

    /// Get the bytes behind a view.
    ///
    /// Returns `None` for views from an earlier frame or outside any block.
    pub fn contents(&self, view: &BufferView) -> Option<&[u8]> {
        if view.frame != self.frame {
            return None;
        }
        self.blocks
            .get(view.block)
            .and_then(|block| block.contents().get(view.range()))
    }

    /// Start a new frame, reclaiming every block.
    ///
    /// # Warning
    ///
    /// Make sure the GPU has finished reading the previous frame's data before
    /// calling this; the blocks are overwritten by the next allocations.
    pub fn reset(&mut self) {
        if self.current_block > 0 || self.write_offset > 0 {
            self.frame += 1;
        }
        self.current_block = 0;
        self.write_offset = 0;
    }

    fn view(&self, offset: u64, size: u64) -> BufferView {
        BufferView {
            block: self.current_block,
            offset,
            size,
            frame: self.frame,
        }
    }

    fn create_block(&self, index: usize, size: u64) -> Buffer {
        let usage = BufferUsage::VERTEX
            | BufferUsage::INDEX
            | BufferUsage::UNIFORM
            | BufferUsage::COPY_SRC
            | BufferUsage::TRANSIENT;
        Buffer::new(
            BufferDescriptor::new(size, usage).with_label(format!("{}_transient_{index}", self.label)),
        )
    }

    fn advance_block(&mut self, min_size: u64) {
        self.current_block += 1;
        self.write_offset = 0;

        let size = align_up(min_size, self.default_alignment).max(self.block_size);
        if self.current_block == self.blocks.len() {
            let block = self.create_block(self.current_block, size);
            self.blocks.push(block);
        } else if self.blocks[self.current_block].size() < min_size {
            // Blocks past the current one are unused this frame
            self.blocks[self.current_block] = self.create_block(self.current_block, size);
        }

        log::debug!(
            "TransientBuffer '{}': moved to block {} of {}",
            self.label,
            self.current_block,
            self.blocks.len()
        );
    }
}

impl TransientAllocator for TransientBuffer {
    fn emplace_with(
        &mut self,
        size: u64,
        alignment: u64,
        fill: &mut dyn FnMut(&mut [u8]),
    ) -> Result<BufferView, GraphicsError> {
        let view = self.allocate_aligned(size, alignment)?;
        let block = self.blocks.get_mut(view.block).ok_or_else(|| {
            GraphicsError::Internal(format!("transient block {} missing", view.block))
        })?;
        fill(&mut block.contents_mut()[view.range()]);
        Ok(view)
    }
}

impl std::fmt::Debug for TransientBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransientBuffer")
            .field("label", &self.label)
            .field("block_size", &self.block_size)
            .field("block_count", &self.blocks.len())
            .field("current_block", &self.current_block)
            .field("write_offset", &self.write_offset)
            .field("default_alignment", &self.default_alignment)
            .field("frame", &self.frame)
            .finish()
    }
}

/// Check that `alignment` is a power of 2 no larger than a block can be.
fn check_alignment(alignment: u64) -> Result<(), GraphicsError> {
    if !alignment.is_power_of_two() {
        return Err(GraphicsError::InvalidParameter(format!(
            "alignment must be a power of 2, got {alignment}"
        )));
    }
    if alignment > TransientBuffer::MAX_ALLOCATION_SIZE {
        return Err(GraphicsError::InvalidParameter(format!(
            "alignment {alignment} exceeds maximum {}",
            TransientBuffer::MAX_ALLOCATION_SIZE
        )));
    }
    Ok(())
}

/// Align a value up to the given alignment.
#[inline]
fn align_up(value: u64, alignment: u64) -> u64 {
    debug_assert!(alignment.is_power_of_two());
    (value + alignment - 1) & !(alignment - 1)
}
