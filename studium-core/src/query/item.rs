//! The seam between the engine and the browsable record families.
//!
//! The document repository and the study-list discovery view run the same
//! filter/sort pipeline; `QueryItem` names the fields that pipeline needs.
//! Accessors for fields a family does not carry return `None`: a constraint
//! on such a field excludes the record, and quality-keyed sorts place it
//! after rated records.

use chrono::{DateTime, Utc};
use studium_model::{DocumentRecord, StudyListRecord};
use uuid::Uuid;

use super::types::FacetField;

/// A record the catalog engine can filter, sort, and facet
pub trait QueryItem: Clone + Send + Sync {
    /// Stable identifier; the final tie-break of every sort order.
    fn id(&self) -> Uuid;

    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Value of a facet field, if this record family carries it.
    fn facet_value(&self, field: FacetField) -> Option<&str>;

    fn tags(&self) -> &[String];

    /// Difficulty tier, if this record family is tiered.
    fn tier(&self) -> Option<u8>;

    /// Quality score, if this record family is rated.
    fn quality(&self) -> Option<f32>;

    /// Primary popularity counter (downloads for documents, members for
    /// study lists).
    fn popularity(&self) -> u64;

    /// Creation/upload timestamp used by recency sorts.
    fn timestamp(&self) -> DateTime<Utc>;
}

impl QueryItem for DocumentRecord {
    fn id(&self) -> Uuid {
        self.id.to_uuid()
    }

    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn facet_value(&self, field: FacetField) -> Option<&str> {
        match field {
            FacetField::Subject => Some(self.subject.api_name()),
            FacetField::Institution => Some(&self.institution),
            FacetField::Kind => Some(self.kind.api_name()),
        }
    }

    fn tags(&self) -> &[String] {
        self.tags.as_slice()
    }

    fn tier(&self) -> Option<u8> {
        Some(self.difficulty.value())
    }

    fn quality(&self) -> Option<f32> {
        Some(self.rating.value())
    }

    fn popularity(&self) -> u64 {
        self.downloads
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.uploaded_at
    }
}

impl QueryItem for StudyListRecord {
    fn id(&self) -> Uuid {
        self.id.to_uuid()
    }

    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn facet_value(&self, field: FacetField) -> Option<&str> {
        match field {
            FacetField::Subject => Some(self.subject.api_name()),
            FacetField::Institution | FacetField::Kind => None,
        }
    }

    fn tags(&self) -> &[String] {
        self.tags.as_slice()
    }

    fn tier(&self) -> Option<u8> {
        None
    }

    fn quality(&self) -> Option<f32> {
        None
    }

    fn popularity(&self) -> u64 {
        self.members
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}
