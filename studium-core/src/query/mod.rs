pub mod builder;
pub mod filtering;
pub mod item;
pub mod paging;
pub mod prelude;
pub mod sorting;
pub mod types;

pub use builder::CatalogQueryBuilder;
pub use item::QueryItem;
pub use paging::{Page, ResultSet};
pub use types::*;
