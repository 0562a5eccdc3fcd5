use crate::{
    facet_types::{DocumentKind, Subject},
    ids::DocumentId,
    numbers::{DifficultyTier, QualityScore},
    tags::TagSet,
    titles::Title,
};
use chrono::{DateTime, Utc};

/// A study document in the repository catalog
///
/// Field invariants (non-empty title, bounded difficulty and quality,
/// deduplicated tags) are carried by the field types; a `DocumentRecord`
/// holding an out-of-bounds value cannot be constructed. Identifier
/// uniqueness is checked when a catalog is loaded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub title: Title,
    pub description: String,
    pub author: String,
    pub institution: String,
    pub subject: Subject,
    pub kind: DocumentKind,
    /// Page count; zero for non-paginated material such as video lectures.
    pub pages: u32,
    pub difficulty: DifficultyTier,
    pub rating: QualityScore,
    pub downloads: u64,
    pub comments: u32,
    pub uploaded_at: DateTime<Utc>,
    pub tags: TagSet,
    /// Access-tier flag; gating on it belongs to the rendering layer.
    pub premium: bool,
}
