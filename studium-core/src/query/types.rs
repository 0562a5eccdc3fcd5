use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use studium_model::DifficultyTier;

/// Main query structure that works everywhere
///
/// A query is a transient value built per search interaction; evaluation is
/// a pure function of catalog + query. All validation happens while a query
/// is being constructed (`TierRange::new`, `SortKey::from_str`, the
/// builder's `build`), so the evaluator is total over values of this type.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Free-text term; trimmed and matched case-insensitively. Empty
    /// matches everything.
    pub term: String,
    pub filters: CatalogFilters,
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Create a term-only query with default filters and sort.
    pub fn matching(term: impl Into<String>) -> Self {
        CatalogQuery {
            term: term.into(),
            ..Default::default()
        }
    }
}

/// Record filtering options
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogFilters {
    /// Facet equality constraints. An absent field or an empty-string value
    /// imposes no constraint.
    pub facets: BTreeMap<FacetField, String>,
    /// Inclusive difficulty range; `None` imposes no constraint.
    pub tier: Option<TierRange>,
    /// Minimum quality score; 0.0 matches everything.
    pub min_quality: f32,
}

/// Categorical fields usable as equality filters
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FacetField {
    Subject,
    Institution,
    Kind,
}

impl FacetField {
    pub fn all() -> &'static [FacetField] {
        use FacetField::*;
        &[Subject, Institution, Kind]
    }
}

/// Inclusive difficulty-tier range
///
/// The fields stay private so an inverted range cannot exist; `new` is the
/// construction boundary the error contract points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRange {
    lower: u8,
    upper: u8,
}

impl TierRange {
    pub fn new(lower: u8, upper: u8) -> Result<Self, QueryError> {
        if lower > upper {
            return Err(QueryError::InvalidRange { lower, upper });
        }
        Ok(TierRange { lower, upper })
    }

    /// The whole 1-5 scale, equivalent to no constraint.
    pub fn full() -> Self {
        TierRange {
            lower: DifficultyTier::MIN,
            upper: DifficultyTier::MAX,
        }
    }

    pub fn single(tier: u8) -> Self {
        TierRange {
            lower: tier,
            upper: tier,
        }
    }

    pub fn lower(&self) -> u8 {
        self.lower
    }

    pub fn upper(&self) -> u8 {
        self.upper
    }

    pub fn contains(&self, tier: u8) -> bool {
        (self.lower..=self.upper).contains(&tier)
    }
}

impl Default for TierRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Result ordering selected by a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    HighestRated,
    MostDownloaded,
    TitleAscending,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[Newest, Oldest, HighestRated, MostDownloaded, TitleAscending]
    }

    /// Token the browse UI sends for this sort.
    pub fn token(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::HighestRated => "rating",
            SortKey::MostDownloaded => "downloads",
            SortKey::TitleAscending => "title",
        }
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    /// Parse a UI sort token. An unrecognized token is an error, never a
    /// silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "rating" => Ok(SortKey::HighestRated),
            "downloads" => Ok(SortKey::MostDownloaded),
            "title" => Ok(SortKey::TitleAscending),
            other => Err(QueryError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Pagination options for the presentation layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
        }
    }
}

/// Query construction error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum QueryError {
    #[error("unrecognized sort key: {0:?}")]
    InvalidSortKey(String),

    #[error("invalid tier range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange { lower: u8, upper: u8 },
}
