//! FFI use-case API for the Flutter guide screens.
//!
//! # Responsibility
//! - Expose place load/list/add/remove/search and map-region calls to Dart.
//! - Own the single process-wide place store the screens share.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported inside response envelopes, never thrown.
//! - Place intents run one at a time; the store sits behind an async mutex.

use guide_core::{
    core_version as core_version_inner, focus_region, init_logging as init_logging_inner,
    overview_region as overview_region_inner, ping as ping_inner, Coordinate, GuideConfig,
    MapRegion, NewPlace, Place, PlaceId, PlaceStore, SqliteKvStore, StoreError,
};
use log::{error, info};
use once_cell::sync::Lazy;
use std::path::Path;
use tokio::sync::Mutex;

/// File name used when the host passes a directory instead of a file path.
pub const DEFAULT_DB_FILE_NAME: &str = "guide_places.sqlite3";

struct Session {
    config: GuideConfig,
    store: PlaceStore<SqliteKvStore>,
}

static SESSION: Lazy<Mutex<Option<Session>>> = Lazy::new(|| Mutex::new(None));

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and a message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Place as rendered by map markers and list cards.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Empty when the place has no link.
    pub website: String,
    pub image: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_recommended: bool,
}

impl From<Place> for PlaceItem {
    fn from(place: Place) -> Self {
        Self {
            id: place.id.to_string(),
            title: place.title,
            description: place.description,
            website: place.website,
            image: place.image,
            latitude: place.coordinate.latitude,
            longitude: place.coordinate.longitude,
            is_recommended: place.is_recommended,
        }
    }
}

/// Map viewport handed to the map widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionItem {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl From<MapRegion> for RegionItem {
    fn from(region: MapRegion) -> Self {
        Self {
            latitude: region.latitude,
            longitude: region.longitude,
            latitude_delta: region.latitude_delta,
            longitude_delta: region.longitude_delta,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceListResponse {
    pub items: Vec<PlaceItem>,
    /// Human-readable status for diagnostics.
    pub message: String,
}

/// Sectioned result for the list screen search box.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSearchResponse {
    pub recommended: Vec<PlaceItem>,
    pub user: Vec<PlaceItem>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceActionResponse {
    pub ok: bool,
    /// Created or removed place on success.
    pub place: Option<PlaceItem>,
    /// Stable machine-readable code (`ok`, `invalid_input`, `not_found`,
    /// `not_deletable`, `not_configured`).
    pub code: String,
    pub message: String,
}

impl PlaceActionResponse {
    fn success(place: Place, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            place: Some(place.into()),
            code: "ok".to_string(),
            message: message.into(),
        }
    }

    fn failure(code: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            place: None,
            code: code.to_string(),
            message: message.into(),
        }
    }

    fn from_store_error(err: &StoreError) -> Self {
        let code = match err {
            StoreError::Validation(_) => "invalid_input",
            StoreError::NotFound(_) => "not_found",
            StoreError::NotDeletable(_) => "not_deletable",
        };
        Self::failure(code, err.to_string())
    }
}

/// Opens the device database and installs the shared store.
///
/// `db_path` may be a file or an existing directory; `settings_json`
/// optionally overrides [`GuideConfig`] fields. Call `places_load` next.
/// Returns an empty string on success and a message otherwise.
pub async fn configure_store(db_path: String, settings_json: Option<String>) -> String {
    let config = match settings_json.as_deref().map(GuideConfig::from_json) {
        None => GuideConfig::default(),
        Some(Ok(config)) => config,
        Some(Err(err)) => return format!("configure_store failed: invalid settings: {err}"),
    };

    let path = Path::new(db_path.trim());
    let path = if path.is_dir() {
        path.join(DEFAULT_DB_FILE_NAME)
    } else {
        path.to_path_buf()
    };

    match SqliteKvStore::open(&path) {
        Ok(kv) => {
            let store = PlaceStore::new(kv, &config);
            *SESSION.lock().await = Some(Session { config, store });
            info!("event=ffi_configure module=ffi status=ok");
            String::new()
        }
        Err(err) => {
            error!("event=ffi_configure module=ffi status=error error={err}");
            format!("configure_store failed: {err}")
        }
    }
}

/// Loads (or seeds) the persisted list and returns it.
pub async fn places_load() -> PlaceListResponse {
    let mut guard = SESSION.lock().await;
    let Some(session) = guard.as_mut() else {
        return not_configured_list();
    };

    let outcome = session.store.load().await;
    PlaceListResponse {
        items: to_items(session.store.current_list()),
        message: format!("Loaded: {outcome:?}."),
    }
}

/// Returns the current in-memory list without touching storage.
pub async fn places_list() -> PlaceListResponse {
    let guard = SESSION.lock().await;
    let Some(session) = guard.as_ref() else {
        return not_configured_list();
    };

    let items = to_items(session.store.current_list());
    let message = format!("{} place(s).", items.len());
    PlaceListResponse { items, message }
}

/// Adds a user place picked by long-press on the map.
///
/// `latitude`/`longitude` are `None` when no point has been selected yet.
pub async fn places_add(
    title: String,
    description: String,
    website: String,
    image: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> PlaceActionResponse {
    let mut guard = SESSION.lock().await;
    let Some(session) = guard.as_mut() else {
        return PlaceActionResponse::failure("not_configured", "store is not configured");
    };

    let candidate = NewPlace {
        title,
        description,
        website,
        image,
        coordinate: latitude
            .zip(longitude)
            .map(|(lat, lon)| Coordinate::new(lat, lon)),
    };

    match session.store.add(candidate).await {
        Ok(place) => PlaceActionResponse::success(place, "Place added."),
        Err(err) => PlaceActionResponse::from_store_error(&err),
    }
}

/// Deletes a user place by id.
pub async fn places_remove(id: String) -> PlaceActionResponse {
    let mut guard = SESSION.lock().await;
    let Some(session) = guard.as_mut() else {
        return PlaceActionResponse::failure("not_configured", "store is not configured");
    };

    match session.store.remove(&PlaceId::from(id)).await {
        Ok(place) => PlaceActionResponse::success(place, "Place removed."),
        Err(err) => PlaceActionResponse::from_store_error(&err),
    }
}

/// Filters the current list for the search box.
pub async fn places_search(query: String) -> PlaceSearchResponse {
    let guard = SESSION.lock().await;
    let Some(session) = guard.as_ref() else {
        return PlaceSearchResponse {
            recommended: Vec::new(),
            user: Vec::new(),
            message: "store is not configured".to_string(),
        };
    };

    let partition = session.store.search(&query);
    let message = if partition.is_empty() {
        "No results.".to_string()
    } else {
        format!("Found {} result(s).", partition.len())
    };
    PlaceSearchResponse {
        recommended: to_items(partition.recommended),
        user: to_items(partition.user),
        message,
    }
}

/// Narrow viewport centered on a place; `None` for unknown ids.
pub async fn place_focus_region(id: String) -> Option<RegionItem> {
    let guard = SESSION.lock().await;
    let session = guard.as_ref()?;
    let place = session.store.get(&PlaceId::from(id))?;
    Some(focus_region(&place, &session.config).into())
}

/// City-wide viewport shown when the map opens.
pub async fn overview_region() -> RegionItem {
    let guard = SESSION.lock().await;
    match guard.as_ref() {
        Some(session) => overview_region_inner(&session.config).into(),
        None => overview_region_inner(&GuideConfig::default()).into(),
    }
}

fn to_items(places: Vec<Place>) -> Vec<PlaceItem> {
    places.into_iter().map(PlaceItem::from).collect()
}

fn not_configured_list() -> PlaceListResponse {
    PlaceListResponse {
        items: Vec::new(),
        message: "store is not configured".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        configure_store, place_focus_region, places_add, places_list, places_load, places_remove,
        places_search,
    };

    // One test drives the whole flow because the session is process-wide.
    #[tokio::test(flavor = "multi_thread")]
    async fn configure_load_add_search_remove_flow() {
        let missing = places_list().await;
        assert!(missing.items.is_empty());

        let dir = tempfile::tempdir().unwrap();
        let configured = configure_store(dir.path().to_str().unwrap().to_string(), None).await;
        assert!(configured.is_empty(), "{configured}");

        let loaded = places_load().await;
        assert_eq!(loaded.items.len(), 2);

        let rejected = places_add(
            String::new(),
            String::new(),
            String::new(),
            None,
            Some(61.8),
            Some(34.38),
        )
        .await;
        assert_eq!(rejected.code, "invalid_input");

        let added = places_add(
            "Park".to_string(),
            String::new(),
            String::new(),
            None,
            Some(61.8),
            Some(34.38),
        )
        .await;
        assert!(added.ok);
        let park_id = added.place.unwrap().id;

        let search = places_search("park".to_string()).await;
        assert_eq!(search.user.len(), 1);
        assert!(search.recommended.is_empty());

        let region = place_focus_region(park_id.clone()).await.unwrap();
        assert_eq!(region.latitude, 61.8);

        let seeded = places_remove("1".to_string()).await;
        assert_eq!(seeded.code, "not_deletable");

        let removed = places_remove(park_id).await;
        assert!(removed.ok);
        assert_eq!(places_list().await.items.len(), 2);
    }
}
