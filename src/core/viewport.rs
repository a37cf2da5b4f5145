use crate::core::geo::{LatLng, LatLngBounds, Point, TILE_SIZE};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator earth radius in meters (EPSG:3857)
const EARTH_RADIUS: f64 = 6378137.0;

/// Zoom floor for every map session; the basemap provider serves nothing
/// shallower.
pub const MIN_ZOOM: f64 = 1.0;

/// Deepest zoom level of the tile pyramid
pub const MAX_ZOOM: f64 = 18.0;

/// The coordinate reference frame shared by rendering and feature lookups:
/// current center, zoom, viewport size, and the projection mapping a
/// geographic coordinate to a continuous pixel coordinate at a zoom.
///
/// Established once by the viewport initializer; afterwards only user-driven
/// view changes write it, while click resolution reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport with the session-wide zoom limits
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            size,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }

    /// Sets the zoom level, clamping to the allowed range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// The integer zoom used for tile addressing at the current view
    pub fn tile_zoom(&self) -> u8 {
        self.zoom.floor() as u8
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level
    /// using the standard Web Mercator projection (EPSG:3857).
    ///
    /// The coordinate is normalized first (longitude wrapped to
    /// `[-180, 180]`, latitude clamped to the Mercator range), so clicks
    /// near the antimeridian resolve to the same tiles the renderer draws.
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let z = zoom.unwrap_or(self.zoom);
        let scale = TILE_SIZE * 2_f64.powf(z);
        let lat_lng = lat_lng.normalized();

        let x = lat_lng.lng.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + lat_lng.lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;

        let pixel_x = (x + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale;
        let pixel_y = (-y + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale;

        Point::new(pixel_x, pixel_y)
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let z = zoom.unwrap_or(self.zoom);
        let scale = TILE_SIZE * 2_f64.powf(z);

        let x = (pixel.x / scale) * (2.0 * PI * EARTH_RADIUS) - PI * EARTH_RADIUS;
        let y = PI * EARTH_RADIUS - (pixel.y / scale) * (2.0 * PI * EARTH_RADIUS);

        let lng = (x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();

        LatLng::new(lat, lng)
    }

    /// Fits the viewport to contain the given bounds, adjusting center and
    /// zoom so the whole box is visible.
    ///
    /// Picks the deepest integer zoom at which the projected bounds still
    /// fit inside the viewport size. A degenerate box fits at every zoom,
    /// which leaves the view at the deepest allowed level.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.center = bounds.center();

        let mut best_zoom = self.min_zoom;
        for test_zoom in (self.min_zoom as i32)..=(self.max_zoom as i32) {
            let zoom = test_zoom as f64;

            let nw = self.project(
                &LatLng::new(bounds.north_east.lat, bounds.south_west.lng),
                Some(zoom),
            );
            let se = self.project(
                &LatLng::new(bounds.south_west.lat, bounds.north_east.lng),
                Some(zoom),
            );

            let bounds_width = (se.x - nw.x).abs();
            let bounds_height = (se.y - nw.y).abs();

            if bounds_width <= self.size.x && bounds_height <= self.size.y {
                best_zoom = zoom;
            } else {
                break;
            }
        }

        self.set_zoom(best_zoom);
        log::debug!(
            "fit bounds to center ({:.4}, {:.4}) at zoom {}",
            self.center.lat,
            self.center.lng,
            self.zoom
        );
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), MIN_ZOOM, Point::new(800.0, 600.0))
    }
}
