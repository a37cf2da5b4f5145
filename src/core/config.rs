//! Session input contract supplied by the page-rendering collaborator.

use crate::core::bbox::BoundingBox;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Identifies the tile source and attribution for one brand.
///
/// `id` is opaque to this crate; it only namespaces the tile URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandContext {
    pub id: String,
    pub name: String,
}

/// Everything the collaborator hands over at initialization:
/// `{ "bbox": [minLon, minLat, maxLon, maxLat], "brand_id": ..., "brand_name": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub bbox: BoundingBox,
    pub brand_id: String,
    pub brand_name: String,
}

impl SessionConfig {
    /// Parses the initialization payload. Malformed JSON is an input-contract
    /// violation, not a feature-response decode failure.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| MapError::InvalidInput(format!("session config: {}", e)))
    }

    /// Checks the parts of the contract serde cannot: a usable brand id and
    /// an ordered, in-range bounding box.
    pub fn validate(&self) -> Result<()> {
        if self.brand_id.is_empty() {
            return Err(MapError::InvalidInput("empty brand_id".to_string()));
        }
        self.bbox.bounds().map(|_| ())
    }

    pub fn brand(&self) -> BrandContext {
        BrandContext {
            id: self.brand_id.clone(),
            name: self.brand_name.clone(),
        }
    }
}
