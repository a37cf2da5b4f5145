//! # brandmap
//!
//! Core logic for an interactive map of a retail brand's store footprint.
//!
//! The crate owns the two pieces that involve real arithmetic and protocol
//! work: fitting the initial viewport to a bounding box, and turning a
//! clicked geographic coordinate into a tiled feature-info request
//! (zoom/column/row plus in-tile pixel offset). Rendering itself is left to
//! an external widget reached through the narrow [`MapSurface`] capability
//! trait, so everything here runs and tests headlessly.

pub mod core;
pub mod data;
pub mod input;
pub mod lookup;
pub mod map;
pub mod tiles;

// Re-export public API
pub use crate::core::{
    bbox::BoundingBox,
    config::{BrandContext, SessionConfig},
    geo::{LatLng, LatLngBounds, PixelOffset, Point, TileCoord},
    viewport::Viewport,
};

pub use crate::data::geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry};

pub use crate::input::events::MapEvent;

pub use crate::lookup::{
    query::FeatureQuery,
    resolver::{ClickResolver, LookupResult},
    source::{FeatureSource, HttpFeatureSource},
};

pub use crate::map::{
    surface::{MapSurface, TileLayerConfig},
    Map,
};

pub use crate::tiles::source::{BrandTileSource, CartoBasemapSource, TileSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The session input contract (bounding box, brand identifiers) was
    /// malformed. Raised before any viewport work happens.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A feature query failed in transport or came back with a non-success
    /// status. Terminal for that one lookup, never for the session.
    #[error("feature lookup failed: {0}")]
    FeatureLookup(String),

    /// A feature query response body was not a valid GeoJSON document.
    #[error("malformed feature document: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for MapError {
    fn from(err: reqwest::Error) -> Self {
        MapError::FeatureLookup(err.to_string())
    }
}

/// Error type alias for convenience
pub type Error = MapError;
