//! Persisted place document codec.
//!
//! # Responsibility
//! - Encode the place list as one JSON array.
//! - Decode documents written by current and older app releases.
//!
//! # Invariants
//! - Encoding always writes `isRecommended`.
//! - Decoding never yields two places with the same id.
//! - Decoding never yields a place that fails `Place::validate()`.

use crate::model::place::{Coordinate, Place, PlaceId};
use crate::service::seed::is_legacy_seed_id;
use log::warn;
use serde::Deserialize;
use std::collections::HashSet;

/// Wire shape accepted on read; tolerant of fields older releases omitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPlace {
    id: PlaceId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    website: String,
    #[serde(default)]
    image: Option<String>,
    coordinate: Coordinate,
    #[serde(default)]
    is_recommended: Option<bool>,
}

impl From<StoredPlace> for Place {
    fn from(stored: StoredPlace) -> Self {
        let is_recommended = stored
            .is_recommended
            .unwrap_or_else(|| is_legacy_seed_id(&stored.id));
        Self {
            id: stored.id,
            title: stored.title,
            description: stored.description,
            website: stored.website,
            image: stored.image,
            coordinate: stored.coordinate,
            is_recommended,
        }
    }
}

/// Serializes the full list.
pub fn encode_places(places: &[Place]) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(places)
}

/// Parses a persisted document.
///
/// Structural JSON errors fail the whole document. Records that parse but
/// break place invariants, and repeated ids, are skipped with a warning.
pub fn decode_places(bytes: &[u8]) -> serde_json::Result<Vec<Place>> {
    let stored: Vec<StoredPlace> = serde_json::from_slice(bytes)?;
    let mut seen = HashSet::with_capacity(stored.len());
    let mut places = Vec::with_capacity(stored.len());

    for (index, record) in stored.into_iter().enumerate() {
        let place = Place::from(record);
        if let Err(err) = place.validate() {
            warn!(
                "event=document_decode module=store status=skipped index={index} id={} reason={err}",
                place.id
            );
            continue;
        }
        if !seen.insert(place.id.clone()) {
            warn!(
                "event=document_decode module=store status=skipped index={index} id={} reason=duplicate_id",
                place.id
            );
            continue;
        }
        places.push(place);
    }

    Ok(places)
}
