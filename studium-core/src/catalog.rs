//! Immutable catalog snapshots and query evaluation.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, trace};
use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::facets;
use crate::query::filtering::{matches, normalize_term};
use crate::query::item::QueryItem;
use crate::query::paging::ResultSet;
use crate::query::sorting::sort_items_slice;
use crate::query::types::{CatalogQuery, FacetField};

/// A fixed, fully resident collection of browsable records
///
/// Loaded once at startup and never mutated; clones share the backing
/// storage, so handing snapshots to concurrent evaluations is cheap.
/// Evaluation is a pure function of the snapshot and the query.
#[derive(Debug, Clone)]
pub struct Catalog<T: QueryItem> {
    records: Arc<[T]>,
}

impl<T: QueryItem> Catalog<T> {
    /// Build a catalog, enforcing identifier uniqueness across records.
    pub fn load(records: impl IntoIterator<Item = T>) -> Result<Self> {
        let records: Arc<[T]> = records.into_iter().collect();
        let mut ids = HashSet::with_capacity(records.len());
        for record in records.iter() {
            if !ids.insert(record.id()) {
                return Err(CatalogError::DuplicateId(record.id()));
            }
        }
        debug!(records = records.len(), "catalog loaded");
        Ok(Catalog { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Look up a record by identifier.
    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Evaluate a query: filter conjunction, then total-order sort.
    ///
    /// Filtering preserves catalog order before the sort stage, and the
    /// sort's tie-breaks end at id-ascending, so identical inputs always
    /// produce identical output.
    pub fn evaluate(&self, query: &CatalogQuery) -> ResultSet<T> {
        let term = normalize_term(&query.term);
        let mut hits: Vec<T> = self
            .records
            .iter()
            .filter(|record| matches(*record, term.as_deref(), &query.filters))
            .cloned()
            .collect();
        sort_items_slice(&mut hits, query.sort);
        trace!(
            matched = hits.len(),
            of = self.records.len(),
            sort = query.sort.token(),
            "query evaluated"
        );
        ResultSet::new(hits)
    }

    /// Distinct selectable values for a facet, in first-seen order.
    pub fn facet_options(&self, field: FacetField) -> Vec<String> {
        facets::facet_options(&self.records, field)
    }
}
