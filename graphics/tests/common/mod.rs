//! Common utilities for geometry integration tests.

use vellum_core::geometry::Rect;
use vellum_core::math::{Point, point};
use vellum_graphics::{BufferView, GraphicsError, TransientAllocator, TransientBuffer};

/// Install a test logger once; repeated calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A transient buffer large enough for every test mesh.
pub fn transient() -> TransientBuffer {
    TransientBuffer::new(16 * 1024, "test").unwrap()
}

/// Five vertices along the rim of a pentagon-ish fan, center first.
pub fn fan_vertices() -> Vec<Point> {
    vec![
        point(50.0, 50.0),
        point(100.0, 50.0),
        point(75.0, 100.0),
        point(25.0, 100.0),
        point(0.0, 50.0),
    ]
}

/// Bounds of [`fan_vertices`].
pub fn fan_bounds() -> Rect {
    Rect::from_ltrb(0.0, 50.0, 100.0, 100.0)
}

/// Read a view back as `f32`s.
pub fn read_f32(transient: &TransientBuffer, view: &BufferView) -> Vec<f32> {
    transient
        .contents(view)
        .unwrap()
        .chunks_exact(4)
        .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
        .collect()
}

/// Read a view back as `u16`s.
pub fn read_u16(transient: &TransientBuffer, view: &BufferView) -> Vec<u16> {
    transient
        .contents(view)
        .unwrap()
        .chunks_exact(2)
        .map(|b| u16::from_ne_bytes([b[0], b[1]]))
        .collect()
}

/// An allocator that records each request and forwards it to a transient
/// buffer.
pub struct RecordingAllocator {
    pub inner: TransientBuffer,
    /// `(size, alignment)` per request.
    pub requests: Vec<(u64, u64)>,
}

impl RecordingAllocator {
    pub fn new() -> Self {
        Self {
            inner: transient(),
            requests: Vec::new(),
        }
    }
}

impl TransientAllocator for RecordingAllocator {
    fn emplace_with(
        &mut self,
        size: u64,
        alignment: u64,
        fill: &mut dyn FnMut(&mut [u8]),
    ) -> Result<BufferView, GraphicsError> {
        self.requests.push((size, alignment));
        self.inner.emplace_with(size, alignment, fill)
    }
}

/// An allocator that is always out of memory.
pub struct ExhaustedAllocator;

impl TransientAllocator for ExhaustedAllocator {
    fn emplace_with(
        &mut self,
        _size: u64,
        _alignment: u64,
        _fill: &mut dyn FnMut(&mut [u8]),
    ) -> Result<BufferView, GraphicsError> {
        Err(GraphicsError::OutOfMemory)
    }
}
