//! Media conversion utilities

pub mod video;

// Re-exports for convenience
pub use video::{compress, CompressionOptions};
