//! Map viewport descriptors.
//!
//! # Responsibility
//! - Turn coordinates into viewport regions the map widget can consume.
//!
//! # Invariants
//! - Region spans come from configuration, never from place data.

use crate::config::{GuideConfig, RegionSpan};
use crate::model::place::{Coordinate, Place};
use serde::{Deserialize, Serialize};

/// Center plus latitude/longitude span, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn centered(center: Coordinate, span: RegionSpan) -> Self {
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta: span.latitude_delta,
            longitude_delta: span.longitude_delta,
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Returns whether `coordinate` falls inside this viewport (edges included).
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        let half_lat = self.latitude_delta / 2.0;
        let half_lon = self.longitude_delta / 2.0;
        (coordinate.latitude - self.latitude).abs() <= half_lat
            && (coordinate.longitude - self.longitude).abs() <= half_lon
    }
}

/// Default city-wide region shown when the map screen opens.
pub fn overview_region(config: &GuideConfig) -> MapRegion {
    config.overview_region
}

/// Narrow region centered on one place, used when a list card is selected.
pub fn focus_region(place: &Place, config: &GuideConfig) -> MapRegion {
    MapRegion::centered(place.coordinate, config.focus_span)
}
