use serde::{Deserialize, Serialize};

/// Latitude beyond which the Web Mercator projection degenerates
const MAX_LATITUDE: f64 = 85.0511287798;

/// Edge length of one slippy-map tile in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the Web Mercator range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Returns the coordinate with longitude wrapped and latitude clamped,
    /// so that positions near the antimeridian project consistently.
    pub fn normalized(&self) -> LatLng {
        LatLng::new(Self::clamp_lat(self.lat), Self::wrap_lng(self.lng))
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in continuous projected pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// Represents a tile address in the slippy map tile pyramid.
///
/// Columns and rows are signed: a projected pixel left of or above the map
/// origin still floors to a well-defined (negative) address instead of
/// wrapping. Such tiles simply fall outside the world, see [`in_world`].
///
/// [`in_world`]: TileCoord::in_world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: i32, y: i32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Derives the tile address containing a projected pixel coordinate.
    ///
    /// Uses floor division, so negative pixel coordinates land in the tile
    /// to their left/top rather than truncating toward the origin.
    pub fn from_pixel(pixel: Point, zoom: u8) -> Self {
        Self::new(
            (pixel.x / TILE_SIZE).floor() as i32,
            (pixel.y / TILE_SIZE).floor() as i32,
            zoom,
        )
    }

    /// Checks whether the address lies inside the tile pyramid at its zoom
    pub fn in_world(&self) -> bool {
        let max_coord = 1_i64 << self.z;
        self.x >= 0 && self.y >= 0 && (self.x as i64) < max_coord && (self.y as i64) < max_coord
    }
}

/// Position within a single tile, both components in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelOffset {
    pub i: u32,
    pub j: u32,
}

impl PixelOffset {
    pub fn new(i: u32, j: u32) -> Self {
        Self { i, j }
    }

    /// Derives the in-tile offset from a projected pixel coordinate.
    ///
    /// The modulo is floored (`rem_euclid`), not truncated: a pixel at
    /// x = -5 belongs to column -1 at offset 251, so negative coordinates
    /// still produce offsets in `[0, 255]`.
    pub fn from_pixel(pixel: Point) -> Self {
        Self::new(
            pixel.x.rem_euclid(TILE_SIZE).floor() as u32,
            pixel.y.rem_euclid(TILE_SIZE).floor() as u32,
        )
    }
}
