pub mod surface;

use crate::core::config::{BrandContext, SessionConfig};
use crate::core::viewport::{Viewport, MIN_ZOOM};
use crate::input::events::MapEvent;
use crate::lookup::resolver::{ClickResolver, LookupResult};
use crate::lookup::source::FeatureSource;
use crate::map::surface::{MapSurface, TileLayerConfig};
use crate::tiles::source::{BrandTileSource, CartoBasemapSource};
use crate::Result;
use std::sync::{Arc, RwLock};

const BASEMAP_ATTRIBUTION: &str = "© OpenStreetMap";

/// One brand's map session: the fitted viewport, the installed tile layers,
/// and the click-to-feature resolver.
///
/// Construction runs the whole initialization sequence: validate the input
/// contract, fit the viewport to the bounding box, and install the basemap
/// and brand overlay layers on the injected surface. Afterwards the caller's
/// event loop feeds [`handle_event`] and drains [`poll_lookups`].
///
/// [`handle_event`]: Map::handle_event
/// [`poll_lookups`]: Map::poll_lookups
pub struct Map {
    brand: BrandContext,
    surface: Box<dyn MapSurface>,
    viewport: Arc<RwLock<Viewport>>,
    resolver: ClickResolver,
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("brand", &self.brand)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl Map {
    pub fn new(
        config: SessionConfig,
        mut surface: Box<dyn MapSurface>,
        features: Arc<dyn FeatureSource>,
    ) -> Result<Self> {
        config.validate()?;
        let brand = config.brand();
        let bounds = config.bbox.bounds()?;

        let mut viewport = Viewport::new(bounds.center(), MIN_ZOOM, surface.size());
        viewport.fit_bounds(&bounds);
        surface.fit_bounds(&bounds);

        surface.add_tile_layer(
            Box::new(CartoBasemapSource::new()),
            TileLayerConfig {
                min_zoom: 1,
                attribution: Some(BASEMAP_ATTRIBUTION.to_string()),
                cross_origin: true,
                ..TileLayerConfig::default()
            },
        );
        surface.add_tile_layer(
            Box::new(BrandTileSource::new(brand.id.clone())),
            TileLayerConfig {
                attribution: Some(format!("© {}", brand.name)),
                cross_origin: false,
                ..TileLayerConfig::default()
            },
        );

        let viewport = Arc::new(RwLock::new(viewport));
        let resolver = ClickResolver::new(brand.id.clone(), viewport.clone(), features);

        log::info!("map session for brand {} initialized", brand.id);
        Ok(Self {
            brand,
            surface,
            viewport,
            resolver,
        })
    }

    /// Routes one widget event. Clicks dispatch a feature lookup; view
    /// changes update the shared viewport the next lookup will read.
    pub fn handle_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::Click { lat_lng } => {
                self.resolver.resolve(lat_lng);
            }
            MapEvent::ViewChanged { center, zoom } => {
                let mut viewport = self.viewport.write().unwrap_or_else(|e| e.into_inner());
                viewport.center = center;
                viewport.set_zoom(zoom);
            }
        }
    }

    /// Drains completed feature lookups (non-blocking, superseded results
    /// already dropped)
    pub fn poll_lookups(&self) -> Vec<LookupResult> {
        self.resolver.try_recv_results()
    }

    /// Snapshot of the current viewport state
    pub fn viewport(&self) -> Viewport {
        self.viewport
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn brand(&self) -> &BrandContext {
        &self.brand
    }

    /// The injected widget surface, for callers that embed it elsewhere
    pub fn surface_mut(&mut self) -> &mut dyn MapSurface {
        self.surface.as_mut()
    }
}
