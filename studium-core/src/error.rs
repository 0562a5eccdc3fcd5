use thiserror::Error;
use uuid::Uuid;

use crate::query::types::QueryError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate record id: {0}")]
    DuplicateId(Uuid),

    #[error(transparent)]
    Query(#[from] QueryError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
