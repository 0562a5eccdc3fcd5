//! Shared helpers for turning browse-control state into record predicates.
//!
//! # Field mapping
//!
//! Both browse surfaces feed the same conjunction:
//!
//! - the free-text term is matched (case-insensitive substring, trimmed)
//!   against title, description, the subject facet value, and every tag;
//! - facet constraints (subject, institution, kind) are exact,
//!   case-sensitive equality against the record's facet value; the values
//!   come from closed vocabularies, not free text;
//! - the tier range is inclusive on both ends;
//! - the quality threshold is a `>=` comparison, with 0.0 meaning "no
//!   threshold".
//!
//! A record passes only if every active predicate holds. Records that lack
//! a constrained field (study lists have no tier, quality, institution, or
//! kind) cannot match that constraint. Filtering preserves catalog order;
//! any reordering is the sort stage's job.

use super::item::QueryItem;
use super::types::{CatalogFilters, FacetField};

/// Normalize a raw search term: trim, lowercase, and treat empty as "no
/// constraint".
pub fn normalize_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether `item` satisfies the normalized term and every filter.
pub fn matches<T: QueryItem>(
    item: &T,
    term: Option<&str>,
    filters: &CatalogFilters,
) -> bool {
    matches_term(item, term)
        && matches_facets(item, filters)
        && matches_tier(item, filters)
        && matches_quality(item, filters)
}

fn matches_term<T: QueryItem>(item: &T, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };
    let subject = item.facet_value(FacetField::Subject).unwrap_or_default();
    item.title().to_lowercase().contains(term)
        || item.description().to_lowercase().contains(term)
        || subject.to_lowercase().contains(term)
        || item
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
}

fn matches_facets<T: QueryItem>(item: &T, filters: &CatalogFilters) -> bool {
    filters.facets.iter().all(|(field, wanted)| {
        // Empty selection means the control is back on "All ...".
        if wanted.is_empty() {
            return true;
        }
        item.facet_value(*field) == Some(wanted.as_str())
    })
}

fn matches_tier<T: QueryItem>(item: &T, filters: &CatalogFilters) -> bool {
    match (filters.tier, item.tier()) {
        (None, _) => true,
        (Some(range), Some(tier)) => range.contains(tier),
        (Some(_), None) => false,
    }
}

fn matches_quality<T: QueryItem>(item: &T, filters: &CatalogFilters) -> bool {
    if filters.min_quality <= 0.0 {
        return true;
    }
    item.quality()
        .is_some_and(|quality| quality >= filters.min_quality)
}
