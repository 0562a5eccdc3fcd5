pub use super::builder::CatalogQueryBuilder;
pub use super::filtering::normalize_term;
pub use super::item::QueryItem;
pub use super::paging::{Page, ResultSet};
pub use super::sorting::{compare_items, sort_items_slice};
pub use super::types::{
    CatalogFilters, CatalogQuery, FacetField, Pagination, QueryError, SortKey,
    TierRange,
};
