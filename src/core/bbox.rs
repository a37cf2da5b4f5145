use crate::core::geo::LatLngBounds;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Axis-aligned geographic rectangle as supplied by the page-rendering
/// collaborator: `[min_lon, min_lat, max_lon, max_lat]` in WGS84 degrees.
///
/// The raw array deserializes without checks; [`bounds`] enforces the
/// invariants before any viewport work starts.
///
/// [`bounds`]: BoundingBox::bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundingBox(pub [f64; 4]);

impl BoundingBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self([min_lon, min_lat, max_lon, max_lat])
    }

    pub fn min_lon(&self) -> f64 {
        self.0[0]
    }

    pub fn min_lat(&self) -> f64 {
        self.0[1]
    }

    pub fn max_lon(&self) -> f64 {
        self.0[2]
    }

    pub fn max_lat(&self) -> f64 {
        self.0[3]
    }

    /// Converts the box into geographic bounds with the southwest corner at
    /// `(min_lat, min_lon)` and the northeast corner at `(max_lat, max_lon)`.
    ///
    /// Fails with [`MapError::InvalidInput`] when a component is not a
    /// finite in-range coordinate or the ordering invariant is violated.
    /// A degenerate box (zero width or height) is accepted; fitting the
    /// viewport to it falls back to the deepest allowed zoom.
    pub fn bounds(&self) -> Result<LatLngBounds> {
        let [min_lon, min_lat, max_lon, max_lat] = self.0;

        if self.0.iter().any(|v| !v.is_finite()) {
            return Err(MapError::InvalidInput(format!(
                "bounding box has non-finite component: {:?}",
                self.0
            )));
        }
        if !(-180.0..=180.0).contains(&min_lon) || !(-180.0..=180.0).contains(&max_lon) {
            return Err(MapError::InvalidInput(format!(
                "bounding box longitude out of [-180, 180]: {:?}",
                self.0
            )));
        }
        if !(-90.0..=90.0).contains(&min_lat) || !(-90.0..=90.0).contains(&max_lat) {
            return Err(MapError::InvalidInput(format!(
                "bounding box latitude out of [-90, 90]: {:?}",
                self.0
            )));
        }
        if min_lon > max_lon || min_lat > max_lat {
            return Err(MapError::InvalidInput(format!(
                "bounding box corners out of order: {:?}",
                self.0
            )));
        }

        Ok(LatLngBounds::from_coords(min_lat, min_lon, max_lat, max_lon))
    }
}
