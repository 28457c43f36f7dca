//! Core data layer for the city guide.
//! This crate is the single source of truth for place invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{GuideConfig, RegionSpan, DEFAULT_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::place::{Coordinate, NewPlace, Place, PlaceId, PlaceValidationError};
pub use model::region::{focus_region, overview_region, MapRegion};
pub use repo::kv_store::{KeyValueStore, KvError, KvResult, MemoryKvStore};
pub use repo::sqlite_kv_store::SqliteKvStore;
pub use search::filter::{filter, SearchPartition};
pub use service::place_store::{LoadOutcome, PersistError, PlaceStore, StoreError, StoreResult};
pub use service::seed::seed_places;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
