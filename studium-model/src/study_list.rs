use crate::{facet_types::Subject, ids::StudyListId, tags::TagSet, titles::Title};
use chrono::{DateTime, Utc};

/// A collaborative study list in the discovery catalog
///
/// Study lists carry no difficulty tier or quality score; queries that
/// constrain those fields exclude them, and quality-keyed sorts place them
/// after rated records.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudyListRecord {
    pub id: StudyListId,
    pub title: Title,
    pub description: String,
    pub owner: String,
    pub subject: Subject,
    /// Member count doubles as the list's popularity counter.
    pub members: u64,
    pub documents: u32,
    pub likes: u32,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub tags: TagSet,
    pub public: bool,
}
