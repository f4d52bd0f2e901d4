//! Index normalization for topologies the pipeline cannot draw directly.
//!
//! Triangle fans are unrolled into triangle lists by rewriting the index
//! buffer only. Vertex, color and texture coordinate arrays are never touched,
//! so the rewritten indices keep pointing into the caller's data.

use super::data::VertexMode;

/// Normalize `indices` so they can be drawn with [`VertexMode::topology`].
///
/// Lists and strips pass through unchanged. Fans are unrolled with
/// [`unroll_fan`]. Returns `None` for a degenerate fan, which has no triangle
/// to draw.
pub fn normalize_indices(
    mode: VertexMode,
    vertex_count: usize,
    indices: Vec<u16>,
) -> Option<Vec<u16>> {
    match mode {
        VertexMode::TriangleFan => unroll_fan(vertex_count, &indices),
        VertexMode::Triangles | VertexMode::TriangleStrip => Some(indices),
    }
}

/// Unroll a triangle fan into triangle-list indices.
///
/// With an index list, `indices[0]` is the shared center and every sliding
/// window `(indices[i], indices[i + 1])` forms a triangle with it. Without one,
/// vertex 0 is the center and the windows run over the vertices in order.
///
/// Returns `None` when the fan has no triangle: fewer than three indices, or
/// (with no indices) fewer than three vertices. Also returns `None` when the
/// synthesized indices would not fit in 16 bits.
pub fn unroll_fan(vertex_count: usize, indices: &[u16]) -> Option<Vec<u16>> {
    if !indices.is_empty() {
        if indices.len() < 3 {
            return None;
        }

        let center = indices[0];
        let mut unrolled = Vec::with_capacity((indices.len() - 2) * 3);
        for window in indices[1..].windows(2) {
            unrolled.extend_from_slice(&[center, window[0], window[1]]);
        }
        return Some(unrolled);
    }

    if vertex_count < 3 {
        return None;
    }

    let last = u16::try_from(vertex_count - 1).ok()?;
    let mut unrolled = Vec::with_capacity((vertex_count - 2) * 3);
    for i in 1..last {
        unrolled.extend_from_slice(&[0, i, i + 1]);
    }
    Some(unrolled)
}
