//! Place domain model.
//!
//! # Responsibility
//! - Define the canonical point-of-interest record rendered by map and list views.
//! - Validate user-authored candidates before they become places.
//!
//! # Invariants
//! - `id` is stable and never reassigned.
//! - `title` is non-empty; text fields are stored exactly as entered.
//! - `coordinate` is finite and inside latitude [-90, 90], longitude [-180, 180].
//! - `is_recommended` is fixed at construction time.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque place identifier.
///
/// Seed and legacy records carry short numeric ids (`"1"`, `"2"`); places
/// created at runtime get a UUID v4 string. Only uniqueness is relied upon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for PlaceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlaceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns whether both components are finite and inside WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Validation failures for place construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaceValidationError {
    /// Title is the empty string.
    EmptyTitle,
    /// No target coordinate was selected on the map.
    MissingCoordinate,
    CoordinateOutOfRange { latitude: f64, longitude: f64 },
}

impl Display for PlaceValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "place title must not be empty"),
            Self::MissingCoordinate => write!(f, "place coordinate is required"),
            Self::CoordinateOutOfRange {
                latitude,
                longitude,
            } => write!(
                f,
                "coordinate ({latitude}, {longitude}) is outside latitude [-90, 90] / longitude [-180, 180]"
            ),
        }
    }
}

impl Error for PlaceValidationError {}

/// Canonical point-of-interest record.
///
/// Serialized with camelCase keys to stay compatible with documents written
/// by earlier app releases (`isRecommended`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub title: String,
    pub description: String,
    /// Empty string means "no link".
    pub website: String,
    /// Local resource reference returned by the image picker.
    pub image: Option<String>,
    pub coordinate: Coordinate,
    pub is_recommended: bool,
}

impl Place {
    /// Builds a curated, non-deletable place with a caller-provided id.
    ///
    /// Used by the first-launch seed only.
    pub fn recommended(
        id: impl Into<PlaceId>,
        title: impl Into<String>,
        description: impl Into<String>,
        website: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            website: website.into(),
            image: None,
            coordinate,
            is_recommended: true,
        }
    }

    /// Returns the website when it is set to something non-blank.
    pub fn website_link(&self) -> Option<&str> {
        let trimmed = self.website.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Returns whether a user action may delete this place.
    pub fn is_deletable(&self) -> bool {
        !self.is_recommended
    }

    /// Checks title and coordinate invariants.
    pub fn validate(&self) -> Result<(), PlaceValidationError> {
        if self.title.is_empty() {
            return Err(PlaceValidationError::EmptyTitle);
        }
        check_coordinate(self.coordinate)
    }
}

/// User-authored candidate collected by the "new place" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPlace {
    pub title: String,
    pub description: String,
    pub website: String,
    pub image: Option<String>,
    /// `None` until the user long-presses a point on the map.
    pub coordinate: Option<Coordinate>,
}

impl NewPlace {
    pub fn new(title: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            title: title.into(),
            coordinate: Some(coordinate),
            ..Self::default()
        }
    }

    /// Turns the candidate into a user place with the given id.
    ///
    /// Text fields are kept verbatim; `is_recommended` is always `false`.
    pub fn into_place(self, id: PlaceId) -> Result<Place, PlaceValidationError> {
        if self.title.is_empty() {
            return Err(PlaceValidationError::EmptyTitle);
        }
        let coordinate = self
            .coordinate
            .ok_or(PlaceValidationError::MissingCoordinate)?;
        check_coordinate(coordinate)?;

        Ok(Place {
            id,
            title: self.title,
            description: self.description,
            website: self.website,
            image: self.image,
            coordinate,
            is_recommended: false,
        })
    }
}

fn check_coordinate(coordinate: Coordinate) -> Result<(), PlaceValidationError> {
    if coordinate.is_valid() {
        Ok(())
    } else {
        Err(PlaceValidationError::CoordinateOutOfRange {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        })
    }
}
