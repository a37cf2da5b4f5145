use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Map events forwarded by the widget's event pump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// Pointer click at a geographic coordinate
    Click { lat_lng: LatLng },
    /// Map view has changed through user interaction (pan/zoom)
    ViewChanged { center: LatLng, zoom: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_carries_coordinate() {
        let event = MapEvent::Click {
            lat_lng: LatLng::new(47.5, 10.5),
        };
        match event {
            MapEvent::Click { lat_lng } => assert_eq!(lat_lng, LatLng::new(47.5, 10.5)),
            _ => panic!("expected click"),
        }
    }
}
