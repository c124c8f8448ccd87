/// World view shown when a record carries no coordinates.
pub const DEFAULT_CENTER: (f64, f64) = (20.0, 0.0);
pub const WORLD_ZOOM: u8 = 2;
/// Street-level zoom for a located record.
pub const CLOSE_ZOOM: u8 = 13;

/// A map viewport: center plus zoom, ready to hand to any slippy-map
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

/// Resolve an optional coordinate pair into a viewport. Both coordinates
/// present centers the view there at street level; anything else falls back
/// to the world view.
pub fn resolve(latitude: Option<f64>, longitude: Option<f64>) -> MapView {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => MapView {
            latitude: lat,
            longitude: lon,
            zoom: CLOSE_ZOOM,
        },
        _ => MapView {
            latitude: DEFAULT_CENTER.0,
            longitude: DEFAULT_CENTER.1,
            zoom: WORLD_ZOOM,
        },
    }
}

impl MapView {
    /// Link to the equivalent openstreetmap.org view.
    pub fn osm_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/#map={}/{}/{}",
            self.zoom, self.latitude, self.longitude
        )
    }
}
