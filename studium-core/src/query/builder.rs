use studium_model::{DocumentKind, Subject};

use super::types::*;

/// Fluent API for building catalog queries
///
/// `build` is the validation boundary: an inverted tier range or an unknown
/// sort token surfaces there as a `QueryError`, before any evaluation runs.
#[derive(Debug, Clone, Default)]
pub struct CatalogQueryBuilder {
    query: CatalogQuery,
    tier_bounds: Option<(u8, u8)>,
    sort_token: Option<String>,
}

impl CatalogQueryBuilder {
    /// Create a new query builder
    pub fn new() -> Self {
        Self::default()
    }

    // === Search methods ===

    /// Set the free-text term
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.query.term = term.into();
        self
    }

    // === Facet methods ===

    /// Constrain an arbitrary facet field to an exact value
    pub fn facet(mut self, field: FacetField, value: impl Into<String>) -> Self {
        self.query.filters.facets.insert(field, value.into());
        self
    }

    /// Constrain the subject facet
    pub fn subject(self, subject: Subject) -> Self {
        self.facet(FacetField::Subject, subject.api_name())
    }

    /// Constrain the institution facet
    pub fn institution(self, institution: impl Into<String>) -> Self {
        self.facet(FacetField::Institution, institution)
    }

    /// Constrain the document-kind facet
    pub fn kind(self, kind: DocumentKind) -> Self {
        self.facet(FacetField::Kind, kind.api_name())
    }

    // === Range and threshold methods ===

    /// Constrain the difficulty tier to an inclusive range.
    /// Validated when the query is built.
    pub fn tier_range(mut self, lower: u8, upper: u8) -> Self {
        self.tier_bounds = Some((lower, upper));
        self
    }

    /// Require a minimum quality score
    pub fn min_quality(mut self, threshold: f32) -> Self {
        self.query.filters.min_quality = threshold;
        self
    }

    // === Sort methods ===

    /// Select the sort order
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.query.sort = sort;
        self.sort_token = None;
        self
    }

    /// Select the sort order from a UI token.
    /// Parsed (and possibly rejected) when the query is built.
    pub fn sort_token(mut self, token: impl Into<String>) -> Self {
        self.sort_token = Some(token.into());
        self
    }

    // === Build method ===

    /// Validate and build the final query
    pub fn build(mut self) -> Result<CatalogQuery, QueryError> {
        if let Some((lower, upper)) = self.tier_bounds {
            self.query.filters.tier = Some(TierRange::new(lower, upper)?);
        }
        if let Some(token) = self.sort_token {
            self.query.sort = token.parse()?;
        }
        Ok(self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_fully_constrained_query() {
        let query = CatalogQueryBuilder::new()
            .term("calculus")
            .subject(Subject::Mathematics)
            .institution("Stanford University")
            .kind(DocumentKind::PracticeExam)
            .tier_range(2, 4)
            .min_quality(4.0)
            .sort(SortKey::HighestRated)
            .build()
            .unwrap();

        assert_eq!(query.term, "calculus");
        assert_eq!(
            query.filters.facets.get(&FacetField::Subject).map(String::as_str),
            Some("Mathematics")
        );
        assert_eq!(query.filters.tier, Some(TierRange::new(2, 4).unwrap()));
        assert_eq!(query.sort, SortKey::HighestRated);
    }

    #[test]
    fn inverted_range_fails_at_build_time() {
        let err = CatalogQueryBuilder::new().tier_range(5, 1).build().unwrap_err();
        assert_eq!(err, QueryError::InvalidRange { lower: 5, upper: 1 });
    }

    #[test]
    fn bad_sort_token_fails_at_build_time() {
        let err = CatalogQueryBuilder::new()
            .sort_token("popularity")
            .build()
            .unwrap_err();
        assert!(matches!(err, QueryError::InvalidSortKey(_)));
    }

    #[test]
    fn sort_token_accepts_ui_values() {
        let query = CatalogQueryBuilder::new().sort_token("downloads").build().unwrap();
        assert_eq!(query.sort, SortKey::MostDownloaded);
    }
}
