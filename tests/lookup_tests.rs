use async_trait::async_trait;
use brandmap::{
    BoundingBox, FeatureQuery, FeatureSource, GeoJson, LatLng, LatLngBounds, Map, MapError,
    MapEvent, MapSurface, Point, SessionConfig, TileLayerConfig, TileSource, Viewport,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Canned behavior for one fetch
#[derive(Debug, Clone, Copy)]
enum Reply {
    Hit,
    Empty,
    NotFound,
    Garbage,
}

/// Scriptable feature source: pops one reply per fetch (repeating the last
/// one) and records every query it saw.
struct ScriptedFeatureSource {
    replies: Mutex<VecDeque<Reply>>,
    queries: Mutex<Vec<FeatureQuery>>,
}

impl ScriptedFeatureSource {
    fn new(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            queries: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<FeatureQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeatureSource for ScriptedFeatureSource {
    async fn fetch(&self, query: &FeatureQuery) -> brandmap::Result<GeoJson> {
        self.queries.lock().unwrap().push(query.clone());
        let reply = {
            let mut replies = self.replies.lock().unwrap();
            if replies.len() > 1 {
                replies.pop_front().unwrap()
            } else {
                *replies.front().unwrap()
            }
        };
        match reply {
            Reply::Hit => GeoJson::from_str(
                r#"{
                    "type": "FeatureCollection",
                    "features": [{
                        "type": "Feature",
                        "geometry": {"type": "Point", "coordinates": [8.5417, 47.3769]},
                        "properties": {"name": "Acme Bahnhofstrasse"}
                    }]
                }"#,
            ),
            Reply::Empty => GeoJson::from_str(r#"{"type": "FeatureCollection", "features": []}"#),
            Reply::NotFound => Err(MapError::FeatureLookup(format!(
                "HTTP 404 Not Found for {}",
                query.path()
            ))),
            Reply::Garbage => GeoJson::from_str("<html>service unavailable</html>"),
        }
    }
}

/// Surface stub; lookups never touch it after initialization
struct StubSurface;

impl MapSurface for StubSurface {
    fn size(&self) -> Point {
        Point::new(800.0, 600.0)
    }

    fn fit_bounds(&mut self, _bounds: &LatLngBounds) {}

    fn add_tile_layer(&mut self, _source: Box<dyn TileSource>, _config: TileLayerConfig) {}
}

fn acme_map(source: Arc<ScriptedFeatureSource>) -> Map {
    let config = SessionConfig {
        bbox: BoundingBox::new(10.0, 47.0, 11.0, 48.0),
        brand_id: "acme".to_string(),
        brand_name: "Acme Stores".to_string(),
    };
    Map::new(config, Box::new(StubSurface), source).unwrap()
}

/// Polls until at least one lookup completes or the deadline passes
async fn drain(map: &Map) -> Vec<brandmap::LookupResult> {
    for _ in 0..100 {
        let results = map.poll_lookups();
        if !results.is_empty() {
            return results;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    Vec::new()
}

/// The worked end-to-end case: a click at zoom 14 that projects into tile
/// (8802, 5373) at offset (45, 12) must produce exactly that query path.
#[tokio::test]
async fn click_resolves_to_feature_query_path() {
    let source = ScriptedFeatureSource::new([Reply::Hit]);
    let mut map = acme_map(source.clone());

    // Pick the click coordinate by unprojecting the center of the target
    // pixel, so the assertion pins the whole transform chain
    let viewport = Viewport::default();
    let lat_lng = viewport.unproject(
        &Point::new(8802.0 * 256.0 + 45.5, 5373.0 * 256.0 + 12.5),
        Some(14.0),
    );

    map.handle_event(MapEvent::ViewChanged {
        center: lat_lng,
        zoom: 14.0,
    });
    map.handle_event(MapEvent::Click { lat_lng });

    let results = drain(&map).await;
    assert_eq!(results.len(), 1);

    let result = &results[0];
    assert_eq!(
        result.query.path(),
        "/tiles/acme-brand/14/8802/5373/45/12.geojson"
    );

    let feature = result.outcome.as_ref().unwrap().as_ref().unwrap();
    assert_eq!(feature.property("name"), Some("Acme Bahnhofstrasse"));
    assert_eq!(source.seen().len(), 1);
}

#[tokio::test]
async fn empty_result_resolves_to_none() {
    let source = ScriptedFeatureSource::new([Reply::Empty]);
    let mut map = acme_map(source);

    map.handle_event(MapEvent::Click {
        lat_lng: LatLng::new(47.5, 10.5),
    });

    let results = drain(&map).await;
    assert_eq!(results.len(), 1);
    assert!(results[0].outcome.as_ref().unwrap().is_none());
}

#[tokio::test]
async fn http_failure_is_reported_not_fatal() {
    let source = ScriptedFeatureSource::new([Reply::NotFound, Reply::Hit]);
    let mut map = acme_map(source);

    map.handle_event(MapEvent::Click {
        lat_lng: LatLng::new(47.5, 10.5),
    });
    let results = drain(&map).await;
    assert_eq!(results.len(), 1);
    assert!(matches!(
        results[0].outcome,
        Err(MapError::FeatureLookup(_))
    ));

    // The session stays interactive: the next click resolves normally
    map.handle_event(MapEvent::Click {
        lat_lng: LatLng::new(47.6, 10.6),
    });
    let results = drain(&map).await;
    assert_eq!(results.len(), 1);
    assert!(results[0].outcome.is_ok());
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let source = ScriptedFeatureSource::new([Reply::Garbage]);
    let mut map = acme_map(source);

    map.handle_event(MapEvent::Click {
        lat_lng: LatLng::new(47.5, 10.5),
    });

    let results = drain(&map).await;
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0].outcome, Err(MapError::Decode(_))));
}

/// Superseded lookups are dropped at drain time: when a second click lands
/// before the first response is consumed, only the newest result surfaces.
#[tokio::test]
async fn superseded_lookup_is_discarded() {
    let source = ScriptedFeatureSource::new([Reply::Hit]);
    let mut map = acme_map(source.clone());

    map.handle_event(MapEvent::Click {
        lat_lng: LatLng::new(47.2, 10.2),
    });
    // Let the first lookup complete but do not drain it yet
    tokio::time::sleep(Duration::from_millis(200)).await;

    map.handle_event(MapEvent::Click {
        lat_lng: LatLng::new(47.8, 10.8),
    });
    tokio::time::sleep(Duration::from_millis(200)).await;

    let results = map.poll_lookups();
    assert_eq!(results.len(), 1, "stale first lookup should be dropped");
    assert_eq!(results[0].generation, 2);

    let seen = source.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(results[0].query, seen[1]);
}
