use crate::core::geo::{LatLng, PixelOffset, TileCoord};
use crate::core::viewport::Viewport;
use crate::data::geojson::GeoJsonFeature;
use crate::lookup::query::FeatureQuery;
use crate::lookup::source::FeatureSource;
use crate::Result;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Completed feature lookup, delivered back to the event loop.
///
/// `outcome` is `Ok(Some(feature))` when the click hit a store,
/// `Ok(None)` when the pixel was empty, and `Err` with the classified
/// failure otherwise.
#[derive(Debug)]
pub struct LookupResult {
    pub generation: u64,
    pub query: FeatureQuery,
    pub outcome: Result<Option<GeoJsonFeature>>,
}

/// Turns pointer clicks into feature-info requests.
///
/// Each click is an independent, stateless lookup: the resolver projects the
/// clicked coordinate at the current zoom, derives the tile address and
/// in-tile offset, and dispatches the query on the async runtime. Completed
/// lookups arrive over a channel drained by [`try_recv_results`].
///
/// Superseded requests are not aborted on the wire; instead every click
/// bumps a generation counter and results from older generations are
/// discarded at drain time, so a slow early response can never overwrite a
/// later click.
///
/// [`try_recv_results`]: ClickResolver::try_recv_results
pub struct ClickResolver {
    brand_id: String,
    viewport: Arc<RwLock<Viewport>>,
    source: Arc<dyn FeatureSource>,
    generation: AtomicU64,
    result_tx: Sender<LookupResult>,
    result_rx: Receiver<LookupResult>,
}

impl ClickResolver {
    pub fn new(
        brand_id: impl Into<String>,
        viewport: Arc<RwLock<Viewport>>,
        source: Arc<dyn FeatureSource>,
    ) -> Self {
        let (result_tx, result_rx) = unbounded();
        Self {
            brand_id: brand_id.into(),
            viewport,
            source,
            generation: AtomicU64::new(0),
            result_tx,
            result_rx,
        }
    }

    /// Resolves a click at a geographic coordinate into a feature query and
    /// dispatches it. Returns the query that was sent.
    ///
    /// Must be called from within a tokio runtime; the fetch itself never
    /// blocks the caller.
    pub fn resolve(&self, lat_lng: LatLng) -> FeatureQuery {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;

        let (zoom, pixel) = {
            let viewport = self.viewport.read().unwrap_or_else(|e| e.into_inner());
            let zoom = viewport.tile_zoom();
            (zoom, viewport.project(&lat_lng, Some(zoom as f64)))
        };

        let tile = TileCoord::from_pixel(pixel, zoom);
        let offset = PixelOffset::from_pixel(pixel);
        let query = FeatureQuery::new(self.brand_id.clone(), tile, offset);

        if !tile.in_world() {
            log::warn!(
                "click at ({:.4}, {:.4}) resolves outside the tile pyramid: {:?}",
                lat_lng.lat,
                lat_lng.lng,
                tile
            );
        }
        log::debug!("dispatching {} (generation {})", query.path(), generation);

        let source = self.source.clone();
        let result_tx = self.result_tx.clone();
        let task_query = query.clone();
        tokio::spawn(async move {
            let outcome = source
                .fetch(&task_query)
                .await
                .map(|doc| doc.into_first_feature());
            // The receiver only disappears when the whole map session does
            let _ = result_tx.send(LookupResult {
                generation,
                query: task_query,
                outcome,
            });
        });

        query
    }

    /// Drains completed lookups (non-blocking), dropping any that a newer
    /// click has superseded.
    pub fn try_recv_results(&self) -> Vec<LookupResult> {
        let current = self.generation.load(Ordering::Relaxed);
        let mut results = Vec::new();
        while let Ok(result) = self.result_rx.try_recv() {
            if result.generation != current {
                log::debug!(
                    "discarding superseded lookup {} (generation {} < {})",
                    result.query.path(),
                    result.generation,
                    current
                );
                continue;
            }
            results.push(result);
        }
        results
    }

    /// Whether a completed lookup is waiting without consuming it
    pub fn has_pending_results(&self) -> bool {
        !self.result_rx.is_empty()
    }
}
