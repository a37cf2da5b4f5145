use crate::core::geo::{LatLngBounds, Point};
use crate::tiles::source::TileSource;

/// Options for one tile layer on the surface
#[derive(Debug, Clone)]
pub struct TileLayerConfig {
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub attribution: Option<String>,
    /// Request tiles in anonymous cross-origin mode (credentials disabled)
    pub cross_origin: bool,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0,
            max_zoom: 18,
            attribution: None,
            cross_origin: false,
        }
    }
}

/// Narrow capability interface of the external map widget.
///
/// The widget (whatever actually rasterizes tiles) is injected behind this
/// trait instead of being reached as a global, so the core stays testable
/// without a rendering surface. It owns the on-screen viewport; this crate
/// tells it where to look and which layers to draw.
pub trait MapSurface {
    /// Current viewport size in pixels
    fn size(&self) -> Point;

    /// Fit the visible region to the given geographic bounds
    fn fit_bounds(&mut self, bounds: &LatLngBounds);

    /// Install a tile layer drawing from `source` with the given options
    fn add_tile_layer(&mut self, source: Box<dyn TileSource>, config: TileLayerConfig);
}
