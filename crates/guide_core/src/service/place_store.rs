//! Place store: the authoritative place list and its persistence sync.
//!
//! # Responsibility
//! - Own the in-memory place list every screen renders from.
//! - Apply add/remove intents and write the full list after each one.
//! - Seed curated places on first launch.
//!
//! # Invariants
//! - Place ids are unique within the list.
//! - Recommended places are never removed.
//! - Every successful `add`/`remove` performs exactly one full-document write
//!   before returning.
//! - Persistence failures are logged, never returned from `load`/`add`/`remove`.
//!
//! # Concurrency
//! - Mutating operations take `&mut self`, so one instance cannot interleave
//!   them. Share the store behind an async mutex when several tasks need it.

use crate::config::GuideConfig;
use crate::model::place::{NewPlace, Place, PlaceId, PlaceValidationError};
use crate::repo::kv_store::{KeyValueStore, KvError};
use crate::search::filter::{filter, SearchPartition};
use crate::service::document::{decode_places, encode_places};
use crate::service::seed::seed_places;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Caller-facing failures of store intents. No state changes when returned.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    Validation(PlaceValidationError),
    NotFound(PlaceId),
    /// Target is a curated place.
    NotDeletable(PlaceId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "place not found: {id}"),
            Self::NotDeletable(id) => write!(f, "recommended place cannot be deleted: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::NotDeletable(_) => None,
        }
    }
}

impl From<PlaceValidationError> for StoreError {
    fn from(value: PlaceValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Failure writing the place document.
#[derive(Debug)]
pub enum PersistError {
    Encode(serde_json::Error),
    Storage(KvError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode place document: {err}"),
            Self::Storage(err) => write!(f, "failed to write place document: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

/// How `load` populated the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No readable document; curated places were installed and written.
    Seeded,
    /// Document decoded into `count` places.
    Restored { count: usize },
    /// Document exists but could not be decoded; the list is empty.
    Corrupt,
}

/// Authoritative place list synchronized with a key-value store.
pub struct PlaceStore<S: KeyValueStore> {
    kv: S,
    storage_key: String,
    places: Vec<Place>,
    dirty: bool,
}

impl<S: KeyValueStore> PlaceStore<S> {
    /// Creates an empty store; call [`PlaceStore::load`] before use.
    pub fn new(kv: S, config: &GuideConfig) -> Self {
        Self {
            kv,
            storage_key: config.storage_key.clone(),
            places: Vec::new(),
            dirty: false,
        }
    }

    /// Replaces the in-memory list with the persisted document.
    ///
    /// # Contract
    /// - Missing or unreadable document: installs the seed and persists it.
    /// - Undecodable document: empty list, the document is left untouched.
    /// - Never fails; diagnostics go to the log.
    pub async fn load(&mut self) -> LoadOutcome {
        let started_at = Instant::now();
        info!("event=store_load module=store status=start");

        let outcome = match self.kv.get(&self.storage_key).await {
            Ok(Some(bytes)) => match decode_places(&bytes) {
                Ok(places) => {
                    self.places = places;
                    self.dirty = false;
                    LoadOutcome::Restored {
                        count: self.places.len(),
                    }
                }
                Err(err) => {
                    error!(
                        "event=store_load module=store status=error error_code=document_corrupt bytes={} error={err}",
                        bytes.len()
                    );
                    self.places = Vec::new();
                    self.dirty = false;
                    LoadOutcome::Corrupt
                }
            },
            Ok(None) => {
                self.install_seed("missing").await;
                LoadOutcome::Seeded
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=degraded error_code=document_read_failed error={err}"
                );
                self.install_seed("read_failed").await;
                LoadOutcome::Seeded
            }
        };

        info!(
            "event=store_load module=store status=ok outcome={outcome:?} count={} duration_ms={}",
            self.places.len(),
            started_at.elapsed().as_millis()
        );
        outcome
    }

    /// Creates a user place from `candidate` and persists the list.
    ///
    /// # Errors
    /// - `StoreError::Validation` for a blank title or a missing/out-of-range
    ///   coordinate. The list is unchanged.
    pub async fn add(&mut self, candidate: NewPlace) -> StoreResult<Place> {
        let id = self.fresh_id();
        let place = candidate.into_place(id).map_err(|err| {
            warn!("event=place_add module=store status=rejected reason={err}");
            StoreError::from(err)
        })?;

        self.places.push(place.clone());
        self.persist_logged("place_add").await;
        info!(
            "event=place_add module=store status=ok id={} count={}",
            place.id,
            self.places.len()
        );
        Ok(place)
    }

    /// Deletes a user place and persists the list.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no place has `id`.
    /// - `StoreError::NotDeletable` when the place is recommended.
    pub async fn remove(&mut self, id: &PlaceId) -> StoreResult<Place> {
        let Some(index) = self.places.iter().position(|place| &place.id == id) else {
            warn!("event=place_remove module=store status=rejected reason=not_found id={id}");
            return Err(StoreError::NotFound(id.clone()));
        };
        if !self.places[index].is_deletable() {
            warn!("event=place_remove module=store status=rejected reason=recommended id={id}");
            return Err(StoreError::NotDeletable(id.clone()));
        }

        let removed = self.places.remove(index);
        self.persist_logged("place_remove").await;
        info!(
            "event=place_remove module=store status=ok id={id} count={}",
            self.places.len()
        );
        Ok(removed)
    }

    /// Writes the full list under the storage key.
    ///
    /// On failure the in-memory list stays authoritative and the store is
    /// marked dirty until the next successful write.
    pub async fn persist(&mut self) -> Result<(), PersistError> {
        let result = match encode_places(&self.places) {
            Ok(bytes) => self
                .kv
                .set(&self.storage_key, bytes)
                .await
                .map_err(PersistError::Storage),
            Err(err) => Err(PersistError::Encode(err)),
        };
        self.dirty = result.is_err();
        result
    }

    /// Returns an owned snapshot of the list in insertion order.
    pub fn current_list(&self) -> Vec<Place> {
        self.places.clone()
    }

    pub fn get(&self, id: &PlaceId) -> Option<Place> {
        self.places.iter().find(|place| &place.id == id).cloned()
    }

    /// Partitions the current list by `query`; see [`filter`].
    pub fn search(&self, query: &str) -> SearchPartition {
        filter(&self.places, query)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Whether the last write failed, leaving the document behind memory.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    async fn install_seed(&mut self, reason: &str) {
        self.places = seed_places();
        info!(
            "event=store_seed module=store status=start reason={reason} count={}",
            self.places.len()
        );
        self.persist_logged("store_seed").await;
    }

    async fn persist_logged(&mut self, event: &str) {
        let started_at = Instant::now();
        match self.persist().await {
            Ok(()) => debug!(
                "event={event} module=store status=persisted count={} duration_ms={}",
                self.places.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event={event} module=store status=persist_failed duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
    }

    fn fresh_id(&self) -> PlaceId {
        loop {
            let id = PlaceId::generate();
            if !self.places.iter().any(|place| place.id == id) {
                return id;
            }
        }
    }
}
