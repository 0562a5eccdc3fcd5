//! Total-order comparators for catalog records.
//!
//! Every sort key ends its tie-break chain at id-ascending, so equal-keyed
//! records land in the same relative order on every evaluation, never in
//! insertion or call order. Records without a quality score sort after
//! rated ones under quality-keyed orders.

use ordered_float::OrderedFloat;
use std::cmp::Ordering;

use super::item::QueryItem;
use super::types::SortKey;

/// Compare two records under the given sort key.
pub fn compare_items<T: QueryItem>(a: &T, b: &T, sort: SortKey) -> Ordering {
    let ord = match sort {
        SortKey::Newest => b.timestamp().cmp(&a.timestamp()),
        SortKey::Oldest => a.timestamp().cmp(&b.timestamp()),
        SortKey::HighestRated => compare_quality_desc(a, b)
            .then_with(|| b.popularity().cmp(&a.popularity())),
        SortKey::MostDownloaded => b
            .popularity()
            .cmp(&a.popularity())
            .then_with(|| compare_quality_desc(a, b)),
        SortKey::TitleAscending => {
            a.title().to_lowercase().cmp(&b.title().to_lowercase())
        }
    };
    ord.then_with(|| a.id().cmp(&b.id()))
}

/// Sort a record slice in place under the given sort key.
pub fn sort_items_slice<T: QueryItem>(items: &mut [T], sort: SortKey) {
    items.sort_by(|a, b| compare_items(a, b, sort));
}

// Rated items first, higher scores first; unrated items sort last.
fn compare_quality_desc<T: QueryItem>(a: &T, b: &T) -> Ordering {
    match (a.quality(), b.quality()) {
        (Some(a), Some(b)) => OrderedFloat(b).cmp(&OrderedFloat(a)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use studium_model::{StudyListId, StudyListRecord, Subject, TagSet, Title};
    use uuid::Uuid;

    fn list(
        id: u128,
        title: &str,
        members: u64,
        created_at: DateTime<Utc>,
    ) -> StudyListRecord {
        StudyListRecord {
            id: StudyListId::from_uuid(Uuid::from_u128(id)),
            title: Title::new(title).unwrap(),
            description: String::new(),
            owner: "owner".to_string(),
            subject: Subject::Mathematics,
            members,
            documents: 0,
            likes: 0,
            views: 0,
            created_at,
            tags: TagSet::empty(),
            public: true,
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn newest_sorts_by_timestamp_descending() {
        let mut lists =
            vec![list(1, "a", 0, day(10)), list(2, "b", 0, day(20)), list(3, "c", 0, day(15))];
        sort_items_slice(&mut lists, SortKey::Newest);
        let days: Vec<u32> = lists
            .iter()
            .map(|l| {
                use chrono::Datelike;
                l.created_at.day()
            })
            .collect();
        assert_eq!(days, [20, 15, 10]);
    }

    #[test]
    fn equal_timestamps_tie_break_by_id_ascending() {
        let mut lists =
            vec![list(3, "a", 0, day(10)), list(1, "b", 0, day(10)), list(2, "c", 0, day(10))];
        sort_items_slice(&mut lists, SortKey::Newest);
        let ids: Vec<u128> = lists.iter().map(|l| l.id.to_uuid().as_u128()).collect();
        assert_eq!(ids, [1, 2, 3]);

        sort_items_slice(&mut lists, SortKey::Oldest);
        let ids: Vec<u128> = lists.iter().map(|l| l.id.to_uuid().as_u128()).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn most_popular_ties_fall_through_the_documented_chain() {
        // Same member count; no quality on study lists, so the chain lands
        // on id ascending.
        let mut lists =
            vec![list(2, "a", 40, day(10)), list(1, "b", 40, day(12)), list(3, "c", 90, day(1))];
        sort_items_slice(&mut lists, SortKey::MostDownloaded);
        let ids: Vec<u128> = lists.iter().map(|l| l.id.to_uuid().as_u128()).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn title_sort_is_case_insensitive_with_id_tie_break() {
        let mut lists = vec![
            list(2, "beta", 0, day(1)),
            list(3, "Alpha", 0, day(1)),
            list(1, "alpha", 0, day(1)),
        ];
        sort_items_slice(&mut lists, SortKey::TitleAscending);
        let ids: Vec<u128> = lists.iter().map(|l| l.id.to_uuid().as_u128()).collect();
        // "alpha" == "Alpha" case-insensitively; id 1 before id 3.
        assert_eq!(ids, [1, 3, 2]);
    }

    // Minimal item with an optional rating, for exercising the
    // missing-quality arms the homogeneous record families never hit.
    #[derive(Clone)]
    struct RatedItem {
        id: u128,
        quality: Option<f32>,
        popularity: u64,
    }

    impl QueryItem for RatedItem {
        fn id(&self) -> Uuid {
            Uuid::from_u128(self.id)
        }
        fn title(&self) -> &str {
            "item"
        }
        fn description(&self) -> &str {
            ""
        }
        fn facet_value(&self, _field: super::super::types::FacetField) -> Option<&str> {
            None
        }
        fn tags(&self) -> &[String] {
            &[]
        }
        fn tier(&self) -> Option<u8> {
            None
        }
        fn quality(&self) -> Option<f32> {
            self.quality
        }
        fn popularity(&self) -> u64 {
            self.popularity
        }
        fn timestamp(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        }
    }

    #[test]
    fn unrated_records_sort_after_rated_ones() {
        let mut items = vec![
            RatedItem { id: 1, quality: None, popularity: 9000 },
            RatedItem { id: 2, quality: Some(3.1), popularity: 5 },
            RatedItem { id: 3, quality: Some(4.9), popularity: 1 },
        ];
        sort_items_slice(&mut items, SortKey::HighestRated);
        let ids: Vec<u128> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn highest_rated_ties_break_by_popularity_then_id() {
        let mut items = vec![
            RatedItem { id: 3, quality: Some(4.9), popularity: 10 },
            RatedItem { id: 2, quality: Some(4.9), popularity: 50 },
            RatedItem { id: 1, quality: Some(4.9), popularity: 10 },
        ];
        sort_items_slice(&mut items, SortKey::HighestRated);
        let ids: Vec<u128> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, [2, 1, 3]);
    }
}
