//! 2D geometry value types.
//!
//! - [`Rect`] - Axis-aligned rectangle with coverage and normalizing transforms
//! - [`Color`] - Linear RGBA color, laid out for direct GPU upload

mod color;
mod rect;

pub use color::Color;
pub use rect::Rect;
