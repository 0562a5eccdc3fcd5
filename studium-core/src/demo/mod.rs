//! Demo-mode fixture catalogs for showcase environments. This module is
//! only compiled when the `demo` feature flag is enabled so production
//! builds incur zero overhead.

use once_cell::sync::Lazy;

use crate::catalog::Catalog;
use studium_model::{DocumentRecord, StudyListRecord};

mod documents;
mod study_lists;

static DOCUMENTS: Lazy<Catalog<DocumentRecord>> = Lazy::new(|| {
    Catalog::load(documents::records()).expect("demo document ids are unique")
});

static STUDY_LISTS: Lazy<Catalog<StudyListRecord>> = Lazy::new(|| {
    Catalog::load(study_lists::records()).expect("demo study list ids are unique")
});

/// The showcase document repository catalog.
pub fn document_catalog() -> &'static Catalog<DocumentRecord> {
    &DOCUMENTS
}

/// The showcase study-list discovery catalog.
pub fn study_list_catalog() -> &'static Catalog<StudyListRecord> {
    &STUDY_LISTS
}
