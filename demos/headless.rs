use async_trait::async_trait;
use brandmap::{
    FeatureQuery, FeatureSource, GeoJson, LatLng, LatLngBounds, Map, MapEvent, MapSurface, Point,
    SessionConfig, TileCoord, TileLayerConfig, TileSource,
};
use std::sync::Arc;
use std::time::Duration;

/// Surface that prints what a real widget would do instead of rendering
struct HeadlessSurface;

impl MapSurface for HeadlessSurface {
    fn size(&self) -> Point {
        Point::new(1024.0, 768.0)
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        println!(
            "   surface: fit bounds SW({:.4}, {:.4}) NE({:.4}, {:.4})",
            bounds.south_west.lat,
            bounds.south_west.lng,
            bounds.north_east.lat,
            bounds.north_east.lng
        );
    }

    fn add_tile_layer(&mut self, source: Box<dyn TileSource>, config: TileLayerConfig) {
        println!(
            "   surface: add layer {} (min zoom {}, attribution {:?})",
            source.url(TileCoord::new(536, 358, 10)),
            config.min_zoom,
            config.attribution
        );
    }
}

/// Feature source that answers every query with one canned store, the way
/// the backend's feature-info endpoint would
struct CannedFeatureSource;

#[async_trait]
impl FeatureSource for CannedFeatureSource {
    async fn fetch(&self, query: &FeatureQuery) -> brandmap::Result<GeoJson> {
        println!("   fetch: {}", query.path());
        GeoJson::from_str(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "id": "node/42",
                    "geometry": {"type": "Point", "coordinates": [8.5417, 47.3769]},
                    "properties": {
                        "name": "Acme Bahnhofstrasse",
                        "addr:city": "Zürich",
                        "addr:street": "Bahnhofstrasse",
                        "addr:housenumber": "27"
                    }
                }]
            }"#,
        )
    }
}

/// Example of running a map session without any UI
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("🗺️ Brandmap Headless Example");
    println!("============================");

    // The payload a page-rendering collaborator would hand over
    let config = SessionConfig::from_json(
        r#"{
            "bbox": [5.9559, 45.818, 10.4921, 47.8084],
            "brand_id": "acme",
            "brand_name": "Acme Stores"
        }"#,
    )?;

    let mut map = Map::new(config, Box::new(HeadlessSurface), Arc::new(CannedFeatureSource))?;

    let viewport = map.viewport();
    println!("✅ Map session initialized:");
    println!(
        "   Center: {:.4}, {:.4}",
        viewport.center.lat, viewport.center.lng
    );
    println!("   Zoom: {}", viewport.zoom);

    // Simulate a click on a store
    let click = LatLng::new(47.3769, 8.5417);
    println!("\n🖱️ Clicking at {:.4}, {:.4}", click.lat, click.lng);
    map.handle_event(MapEvent::Click { lat_lng: click });

    // Drain the lookup the way a UI event loop would
    for _ in 0..100 {
        let results = map.poll_lookups();
        if let Some(result) = results.into_iter().next() {
            match result.outcome {
                Ok(Some(feature)) => {
                    println!("✅ Feature at {}:", result.query.path());
                    if let Some(name) = feature.property("name") {
                        println!("   name: {}", name);
                    }
                    if let Some(location) = feature.location() {
                        println!("   location: {:.4}, {:.4}", location.lat, location.lng);
                    }
                }
                Ok(None) => println!("ℹ️ No store at that pixel"),
                Err(err) => println!("⚠️ Lookup failed: {}", err),
            }
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    anyhow::bail!("lookup never completed")
}
