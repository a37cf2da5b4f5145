use crate::core::geo::LatLng;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: [f64; 2],
    },
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPoint {
        coordinates: Vec<[f64; 2]>,
    },
    MultiLineString {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

/// A single geographic entity (one store) with coordinates and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<GeoJsonGeometry>,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

impl GeoJsonFeature {
    /// The feature's point location, when its geometry is a single point
    pub fn location(&self) -> Option<LatLng> {
        match self.geometry {
            Some(GeoJsonGeometry::Point { coordinates }) => {
                Some(LatLng::new(coordinates[1], coordinates[0]))
            }
            _ => None,
        }
    }

    /// Looks up a property as a display string
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.as_ref()?.get(key)?.as_str()
    }
}

/// Root GeoJSON document as returned by the feature-info endpoint: either a
/// single feature or a (possibly empty) collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
}

impl GeoJson {
    /// Parses a response body. Failures are decode errors, not lookup
    /// failures: the request succeeded but the document is malformed.
    pub fn from_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Number of features contained in the document
    pub fn feature_count(&self) -> usize {
        match self {
            GeoJson::Feature(_) => 1,
            GeoJson::FeatureCollection { features } => features.len(),
        }
    }

    /// Consumes the document and yields the feature at the queried pixel,
    /// or `None` when nothing was hit.
    pub fn into_first_feature(self) -> Option<GeoJsonFeature> {
        match self {
            GeoJson::Feature(feature) => Some(feature),
            GeoJson::FeatureCollection { features } => features.into_iter().next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE_DOC: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "node/42",
                "geometry": {"type": "Point", "coordinates": [8.5417, 47.3769]},
                "properties": {
                    "name": "Acme Bahnhofstrasse",
                    "addr:city": "Zürich"
                }
            }
        ]
    }
    "#;

    #[test]
    fn test_parses_feature_collection() {
        let doc = GeoJson::from_str(STORE_DOC).unwrap();
        assert_eq!(doc.feature_count(), 1);

        let feature = doc.into_first_feature().unwrap();
        assert_eq!(feature.property("name"), Some("Acme Bahnhofstrasse"));
        assert_eq!(feature.property("addr:city"), Some("Zürich"));
        assert_eq!(feature.location(), Some(LatLng::new(47.3769, 8.5417)));
    }

    #[test]
    fn test_empty_collection_has_no_feature() {
        let doc = GeoJson::from_str(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert_eq!(doc.feature_count(), 0);
        assert!(doc.into_first_feature().is_none());
    }

    #[test]
    fn test_single_feature_document() {
        let doc = GeoJson::from_str(
            r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}, "properties": null}"#,
        )
        .unwrap();
        assert_eq!(doc.feature_count(), 1);
        assert!(doc.into_first_feature().is_some());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = GeoJson::from_str("<html>not json</html>").unwrap_err();
        assert!(matches!(err, crate::MapError::Decode(_)));
    }
}
