//! Catalog query engine for the Studium study-materials platform.
//!
//! A [`Catalog`] is a fixed, fully resident snapshot of browsable records;
//! a [`query::CatalogQuery`] is built per search interaction and validated
//! at construction; evaluation is a pure filter-then-sort function whose
//! output is paged by the presentation layer. The same pipeline serves the
//! document repository and the study-list discovery surface through the
//! [`query::QueryItem`] seam.

pub mod catalog;
#[cfg(feature = "demo")]
pub mod demo;
pub mod error;
pub mod facets;
pub mod query;
pub mod session;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use query::{
    CatalogFilters, CatalogQuery, CatalogQueryBuilder, FacetField, Page,
    Pagination, QueryError, QueryItem, ResultSet, SortKey, TierRange,
};
pub use session::{SearchOutcome, SearchSession};

/// One-stop imports for consumers of the engine.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::error::{CatalogError, Result};
    pub use crate::query::prelude::*;
    pub use crate::session::{SearchOutcome, SearchSession};
    pub use studium_model::prelude::*;
}
