use crate::core::geo::{PixelOffset, TileCoord};

/// Media type requested from the feature-info endpoint
pub const GEO_JSON_MEDIA_TYPE: &str = "application/geo+json";

/// One feature-info request: which brand's pyramid, which tile, and which
/// pixel within it. Built per click, serialized into the request path, and
/// discarded once the response is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureQuery {
    pub brand_id: String,
    pub tile: TileCoord,
    pub offset: PixelOffset,
}

impl FeatureQuery {
    pub fn new(brand_id: impl Into<String>, tile: TileCoord, offset: PixelOffset) -> Self {
        Self {
            brand_id: brand_id.into(),
            tile,
            offset,
        }
    }

    /// Request path identifying the single geographic feature at the pixel
    pub fn path(&self) -> String {
        format!(
            "/tiles/{}-brand/{}/{}/{}/{}/{}.geojson",
            self.brand_id, self.tile.z, self.tile.x, self.tile.y, self.offset.i, self.offset.j
        )
    }
}
