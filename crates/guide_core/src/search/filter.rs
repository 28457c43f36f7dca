//! Substring search over the place list.
//!
//! # Responsibility
//! - Partition places into recommended and user-added sections.
//! - Narrow both sections by a case-insensitive title/description match.
//!
//! # Invariants
//! - Pure: no I/O, no logging, safe to run on every keystroke.
//! - Each section keeps the input order.

use crate::model::place::Place;
use serde::Serialize;

/// Search result split into the two list-screen sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchPartition {
    pub recommended: Vec<Place>,
    pub user: Vec<Place>,
}

impl SearchPartition {
    pub fn len(&self) -> usize {
        self.recommended.len() + self.user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommended.is_empty() && self.user.is_empty()
    }
}

/// Filters `places` by `query` and splits them by `is_recommended`.
///
/// Only an empty query matches everything; whitespace is part of the needle.
/// Matching lowercases both sides with Unicode rules, so Cyrillic titles
/// match regardless of case.
pub fn filter(places: &[Place], query: &str) -> SearchPartition {
    let needle = query.to_lowercase();
    let mut partition = SearchPartition::default();

    for place in places.iter().filter(|place| matches(place, &needle)) {
        if place.is_recommended {
            partition.recommended.push(place.clone());
        } else {
            partition.user.push(place.clone());
        }
    }

    partition
}

/// `needle` must already be lowercased.
fn matches(place: &Place, needle: &str) -> bool {
    needle.is_empty()
        || place.title.to_lowercase().contains(needle)
        || place.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::filter;
    use crate::model::place::{Coordinate, Place, PlaceId};

    fn user_place(id: &str, title: &str, description: &str) -> Place {
        Place {
            id: PlaceId::from(id),
            title: title.to_string(),
            description: description.to_string(),
            website: String::new(),
            image: None,
            coordinate: Coordinate::new(61.8, 34.3),
            is_recommended: false,
        }
    }

    #[test]
    fn empty_query_returns_everything_split_by_flag() {
        let places = vec![
            Place::recommended("1", "Embankment", "", "", Coordinate::new(61.79, 34.39)),
            user_place("u1", "Park", ""),
        ];

        let result = filter(&places, "");
        assert_eq!(result.recommended.len(), 1);
        assert_eq!(result.user.len(), 1);
    }

    #[test]
    fn whitespace_query_is_matched_literally() {
        let places = vec![user_place("a", "Park", ""), user_place("b", "Old Park", "")];

        let result = filter(&places, " park");
        assert_eq!(result.user.len(), 1);
        assert_eq!(result.user[0].id, PlaceId::from("b"));

        assert!(filter(&places, "   ").is_empty());
    }

    #[test]
    fn matches_description_and_cyrillic_case_insensitively() {
        let places = vec![
            user_place("a", "Cafe", "Лучший КОФЕ в городе"),
            user_place("b", "Bakery", "bread"),
        ];

        let result = filter(&places, "кофе");
        assert_eq!(result.user.len(), 1);
        assert_eq!(result.user[0].id, PlaceId::from("a"));
    }

    #[test]
    fn keeps_input_order_within_each_section() {
        let places = vec![
            user_place("c", "Park Two", ""),
            user_place("a", "Park One", ""),
            user_place("b", "Lake", "near the park"),
        ];

        let ids: Vec<_> = filter(&places, "PARK")
            .user
            .into_iter()
            .map(|place| place.id)
            .collect();
        assert_eq!(
            ids,
            vec![PlaceId::from("c"), PlaceId::from("a"), PlaceId::from("b")]
        );
    }
}
