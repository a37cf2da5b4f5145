use crate::data::geojson::GeoJson;
use crate::lookup::query::{FeatureQuery, GEO_JSON_MEDIA_TYPE};
use crate::{MapError, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// Shared async HTTP client for feature lookups. Building the client once
/// avoids TLS and connection pool setup on every click.
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("brandmap/0.1.0")
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("failed to build reqwest async client")
});

/// Seam between click resolution and the wire: anything that can answer a
/// feature query. Lets the resolver run against a fake in tests.
#[async_trait]
pub trait FeatureSource: Send + Sync {
    async fn fetch(&self, query: &FeatureQuery) -> Result<GeoJson>;
}

/// Feature-info endpoint of the tile backend, rooted at `base_url`.
pub struct HttpFeatureSource {
    base_url: String,
}

impl HttpFeatureSource {
    /// `base_url` is the server origin, e.g. `https://brands.example.org`;
    /// query paths are appended to it.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn url(&self, query: &FeatureQuery) -> String {
        format!("{}{}", self.base_url, query.path())
    }
}

#[async_trait]
impl FeatureSource for HttpFeatureSource {
    async fn fetch(&self, query: &FeatureQuery) -> Result<GeoJson> {
        let url = self.url(query);
        log::debug!("feature lookup {}", url);

        let response = HTTP_CLIENT
            .get(&url)
            .header(reqwest::header::ACCEPT, GEO_JSON_MEDIA_TYPE)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MapError::FeatureLookup(format!(
                "HTTP {} for {}",
                response.status(),
                query.path()
            )));
        }

        let body = response.text().await?;
        GeoJson::from_str(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::{PixelOffset, TileCoord};

    #[test]
    fn test_url_joins_base_and_path() {
        let source = HttpFeatureSource::new("https://brands.example.org/");
        let query = FeatureQuery::new(
            "acme",
            TileCoord::new(8802, 5373, 14),
            PixelOffset::new(45, 12),
        );
        assert_eq!(
            source.url(&query),
            "https://brands.example.org/tiles/acme-brand/14/8802/5373/45/12.geojson"
        );
    }
}
