use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Third-party raster basemap: Carto's light style, subdomain-rotated.
pub struct CartoBasemapSource {
    subdomains: Vec<&'static str>,
}

impl CartoBasemapSource {
    pub fn new() -> Self {
        Self {
            subdomains: vec!["a", "b", "c", "d"],
        }
    }
}

impl Default for CartoBasemapSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSource for CartoBasemapSource {
    fn url(&self, coord: TileCoord) -> String {
        // Guard against empty subdomain list (should not happen, but be safe)
        if self.subdomains.is_empty() {
            return format!(
                "https://basemaps.cartocdn.com/light_all/{}/{}/{}.png",
                coord.z, coord.x, coord.y
            );
        }

        let idx = (coord.x + coord.y).rem_euclid(self.subdomains.len() as i32) as usize;
        let sub = self.subdomains[idx];
        format!(
            "https://{}.basemaps.cartocdn.com/light_all/{}/{}/{}.png",
            sub, coord.z, coord.x, coord.y
        )
    }
}

/// Store-footprint overlay tiles rendered per brand by the backend.
pub struct BrandTileSource {
    brand_id: String,
}

impl BrandTileSource {
    pub fn new(brand_id: impl Into<String>) -> Self {
        Self {
            brand_id: brand_id.into(),
        }
    }
}

impl TileSource for BrandTileSource {
    fn url(&self, coord: TileCoord) -> String {
        format!(
            "/tiles/{}-brand/{}/{}/{}.png",
            self.brand_id, coord.z, coord.x, coord.y
        )
    }
}
