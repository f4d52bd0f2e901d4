//! # Vellum Core
//!
//! CPU-side building blocks for Vellum: `f32` math helpers, 2D geometry value
//! types, and the user-facing vertex mesh with its topology normalization.

pub mod geometry;
pub mod math;
pub mod mesh;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core crate.
pub fn init() {
    log::info!("Vellum Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
