//! First-launch curated places.

use crate::model::place::{Coordinate, Place, PlaceId};

/// Ids that documents from releases predating `isRecommended` used for the
/// curated places. Records carrying them are backfilled as recommended.
pub const LEGACY_SEED_IDS: &[&str] = &["1", "2"];

/// Returns the fixed recommended set written on first launch.
pub fn seed_places() -> Vec<Place> {
    vec![
        Place::recommended(
            "1",
            "Онежская набережная",
            "Сердце Петрозаводска, музей скульптур под открытым небом.",
            "https://wiki-karelia.ru",
            Coordinate::new(61.7905, 34.3900),
        ),
        Place::recommended(
            "2",
            "Национальный музей",
            "Крупнейший музей Республики Карелия.",
            "http://nmrk.karelia.ru/",
            Coordinate::new(61.7850, 34.3600),
        ),
    ]
}

pub fn is_legacy_seed_id(id: &PlaceId) -> bool {
    LEGACY_SEED_IDS.contains(&id.as_str())
}

#[cfg(test)]
mod tests {
    use super::{is_legacy_seed_id, seed_places};

    #[test]
    fn seed_is_recommended_and_uses_legacy_ids() {
        let seed = seed_places();
        assert_eq!(seed.len(), 2);
        assert!(seed.iter().all(|place| place.is_recommended));
        assert!(seed.iter().all(|place| is_legacy_seed_id(&place.id)));
        assert!(seed.iter().all(|place| place.validate().is_ok()));
    }
}
