pub mod source;

// Re-exports for convenience
pub use source::{BrandTileSource, CartoBasemapSource, TileSource};
