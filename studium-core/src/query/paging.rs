//! Presentation slicing over an evaluated result.
//!
//! The catalog is fully resident, so "load more" is a pure slice of an
//! already-computed result set: no re-evaluation, no fetch. A page index
//! beyond the data is a defined boundary ("load more" exhausted), not an
//! error.

use super::types::Pagination;

/// Ordered output of evaluating a query against a catalog
///
/// Derived, never stored between evaluations; recomputed whenever the
/// query changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<T> {
    records: Vec<T>,
}

/// One page of a result set
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Whether records remain past this page.
    pub has_more: bool,
}

impl<T> ResultSet<T> {
    pub fn new(records: Vec<T>) -> Self {
        ResultSet { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.records
    }

    /// Slice out page `page_index` (zero-based) of `page_size` records.
    ///
    /// Items are `[index*size, (index+1)*size)` clipped to the result
    /// length; `has_more` is true iff the un-clipped upper bound is
    /// strictly below the result length. Index arithmetic that overflows
    /// is past the data by definition.
    pub fn page(&self, page_size: usize, page_index: usize) -> Page<'_, T> {
        let len = self.records.len();
        let Some(start) = page_index.checked_mul(page_size) else {
            return Page { items: &[], has_more: false };
        };
        let has_more = match start.checked_add(page_size) {
            Some(end) => end < len,
            None => false,
        };
        let start = start.min(len);
        let end = start.saturating_add(page_size).min(len);
        Page {
            items: &self.records[start..end],
            has_more,
        }
    }

    /// Offset/limit view used by callers that carry `Pagination` state.
    pub fn window(&self, pagination: Pagination) -> &[T] {
        let len = self.records.len();
        let start = pagination.offset.min(len);
        let end = pagination.offset.saturating_add(pagination.limit).min(len);
        &self.records[start..end]
    }
}

impl<'a, T> IntoIterator for &'a ResultSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_of(n: usize) -> ResultSet<usize> {
        ResultSet::new((0..n).collect())
    }

    #[test]
    fn short_result_fits_one_page() {
        let results = result_of(6);
        let page = results.page(10, 0);
        assert_eq!(page.items.len(), 6);
        assert!(!page.has_more);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let results = result_of(6);
        let page = results.page(10, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let results = result_of(20);
        let page = results.page(10, 1);
        assert_eq!(page.items, &(10..20).collect::<Vec<_>>()[..]);
        assert!(!page.has_more);
    }

    #[test]
    fn middle_pages_report_more() {
        let results = result_of(25);
        assert!(results.page(10, 0).has_more);
        assert!(results.page(10, 1).has_more);
        let last = results.page(10, 2);
        assert_eq!(last.items.len(), 5);
        assert!(!last.has_more);
    }

    #[test]
    fn huge_index_does_not_overflow() {
        let results = result_of(3);
        let page = results.page(usize::MAX, 2);
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn window_clips_to_the_result() {
        let results = result_of(6);
        assert_eq!(results.window(Pagination { offset: 4, limit: 10 }), &[4, 5]);
        assert_eq!(results.window(Pagination { offset: 9, limit: 10 }), &[] as &[usize]);
    }
}
