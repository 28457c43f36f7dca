//! Core configuration.
//!
//! # Responsibility
//! - Hold the constants the store and map helpers depend on.
//! - Allow hosts to override them from a JSON settings blob.
//!
//! # Invariants
//! - `storage_key` is fixed for the lifetime of an installed app; changing it
//!   orphans the previously persisted document.

use crate::model::region::MapRegion;
use serde::{Deserialize, Serialize};

/// Storage key of the persisted place document.
pub const DEFAULT_STORAGE_KEY: &str = "guide.places";

/// Latitude/longitude span of a map viewport, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSpan {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Runtime settings for the guide core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuideConfig {
    pub storage_key: String,
    /// Region shown when the map screen first opens (Petrozavodsk center).
    pub overview_region: MapRegion,
    /// Span used when focusing a single place.
    pub focus_span: RegionSpan,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            overview_region: MapRegion {
                latitude: 61.7846,
                longitude: 34.3469,
                latitude_delta: 0.06,
                longitude_delta: 0.06,
            },
            focus_span: RegionSpan {
                latitude_delta: 0.01,
                longitude_delta: 0.01,
            },
        }
    }
}

impl GuideConfig {
    /// Parses host-provided JSON settings; missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
