mod common;

use common::{seeded_store, titles};
use guide_core::{filter, Coordinate, NewPlace, Place};
use std::collections::HashSet;

async fn sample_places() -> Vec<Place> {
    let (mut store, _kv) = seeded_store().await;
    let extras = [
        ("Park", "Green lawn by the lake"),
        ("Кафе «Карельская горница»", "Калитки и уха"),
        ("Boat pier", "Ferries to Kizhi from the MUSEUM side"),
    ];
    for (title, description) in extras {
        let mut candidate = NewPlace::new(title, Coordinate::new(61.78, 34.36));
        candidate.description = description.to_string();
        store.add(candidate).await.unwrap();
    }
    store.current_list()
}

#[tokio::test]
async fn empty_query_partitions_every_place_exactly_once() {
    let places = sample_places().await;

    let result = filter(&places, "");

    let mut ids: Vec<_> = result
        .recommended
        .iter()
        .chain(result.user.iter())
        .map(|place| place.id.clone())
        .collect();
    assert_eq!(ids.len(), places.len());
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), places.len());
    assert!(result.recommended.iter().all(|place| place.is_recommended));
    assert!(result.user.iter().all(|place| !place.is_recommended));
}

#[tokio::test]
async fn query_returns_exactly_the_matching_places() {
    let places = sample_places().await;

    for query in ["museum", "МУЗЕЙ", "lake", "калитки", "o", "zzz", " park", "   ", "lawn "] {
        let result = filter(&places, query);
        let returned: HashSet<_> = result
            .recommended
            .iter()
            .chain(result.user.iter())
            .map(|place| place.id.clone())
            .collect();

        let needle = query.to_lowercase();
        let expected: HashSet<_> = places
            .iter()
            .filter(|place| {
                place.title.to_lowercase().contains(&needle)
                    || place.description.to_lowercase().contains(&needle)
            })
            .map(|place| place.id.clone())
            .collect();

        assert_eq!(returned, expected, "query `{query}`");
    }
}

#[tokio::test]
async fn matches_recommended_by_cyrillic_title() {
    let places = sample_places().await;

    let result = filter(&places, "национальный");

    assert_eq!(titles(&result.recommended), vec!["Национальный музей"]);
    assert!(result.user.is_empty());
}

#[tokio::test]
async fn leading_space_is_part_of_the_query() {
    let (mut store, _kv) = seeded_store().await;
    store
        .add(NewPlace::new("Park", Coordinate::new(61.80, 34.38)))
        .await
        .unwrap();
    store
        .add(NewPlace::new("Old Park", Coordinate::new(61.79, 34.37)))
        .await
        .unwrap();

    let result = filter(&store.current_list(), " park");

    assert_eq!(titles(&result.user), vec!["Old Park"]);
    assert!(result.recommended.is_empty());
}

#[tokio::test]
async fn whitespace_only_query_does_not_match_everything() {
    let places = sample_places().await;

    let result = filter(&places, "   ");

    assert!(result.is_empty());
}
