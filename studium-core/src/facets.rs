//! Facet option derivation.
//!
//! Selection controls are populated from the full catalog, so they never
//! offer a value with zero matches before any query is applied.

use std::collections::HashSet;

use crate::query::item::QueryItem;
use crate::query::types::FacetField;

/// Distinct values of `field` across `records`, in first-seen order.
///
/// The ordering is stable for a fixed catalog; records that do not carry
/// the field contribute nothing.
pub fn facet_options<T: QueryItem>(records: &[T], field: FacetField) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for record in records {
        if let Some(value) = record.facet_value(field) {
            if seen.insert(value) {
                options.push(value.to_string());
            }
        }
    }
    options
}
