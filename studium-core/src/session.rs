//! Latest-wins query evaluation for callers that search off the
//! interaction thread.
//!
//! The base contract is synchronous: `Catalog::evaluate` completes within
//! the caller's turn. A `SearchSession` is for the interactive path where a
//! control fires queries faster than results are consumed: every submitted
//! query gets a monotonically increasing generation, and a result is
//! delivered only while its generation is still the newest. A stale
//! evaluation is allowed to finish against its immutable snapshot, but its
//! result is discarded rather than applied out of order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::trace;

use crate::catalog::Catalog;
use crate::query::item::QueryItem;
use crate::query::paging::ResultSet;
use crate::query::types::CatalogQuery;

/// Result of the most recent query a session has delivered
#[derive(Debug, Clone)]
pub struct SearchOutcome<T> {
    pub generation: u64,
    pub query: CatalogQuery,
    pub results: Arc<ResultSet<T>>,
}

/// Supervises concurrent evaluations over one catalog snapshot
pub struct SearchSession<T: QueryItem + 'static> {
    catalog: Catalog<T>,
    generation: Arc<AtomicU64>,
    tx: watch::Sender<Option<SearchOutcome<T>>>,
}

impl<T: QueryItem + 'static> SearchSession<T> {
    pub fn new(catalog: Catalog<T>) -> Self {
        let (tx, _rx) = watch::channel(None);
        SearchSession {
            catalog,
            generation: Arc::new(AtomicU64::new(0)),
            tx,
        }
    }

    /// Watch delivered outcomes. Only the newest generation is ever
    /// observable; the channel never moves backwards.
    pub fn subscribe(&self) -> watch::Receiver<Option<SearchOutcome<T>>> {
        self.tx.subscribe()
    }

    /// The most recently delivered outcome, if any.
    pub fn latest(&self) -> Option<SearchOutcome<T>> {
        self.tx.borrow().clone()
    }

    /// Submit a query for evaluation, superseding any in-flight one.
    /// Returns the query's generation. Requires a tokio runtime.
    pub fn submit(&self, query: CatalogQuery) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let catalog = self.catalog.clone();
        let latest = Arc::clone(&self.generation);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let results = catalog.evaluate(&query);
            let outcome = SearchOutcome {
                generation,
                query,
                results: Arc::new(results),
            };
            deliver(&tx, &latest, outcome);
        });
        generation
    }

    /// Evaluate synchronously against the session's snapshot, bypassing
    /// the supersession machinery.
    pub fn evaluate_now(&self, query: &CatalogQuery) -> ResultSet<T> {
        self.catalog.evaluate(query)
    }

    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }
}

impl<T: QueryItem + std::fmt::Debug + 'static> std::fmt::Debug for SearchSession<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("catalog_len", &self.catalog.len())
            .field("generation", &self.generation.load(Ordering::Acquire))
            .finish()
    }
}

// Delivery guard. The closure runs under the channel lock, so the two
// checks are atomic with respect to other deliveries: a result older than
// the delivered one, or older than the newest submitted generation, is
// dropped.
fn deliver<T: QueryItem>(
    tx: &watch::Sender<Option<SearchOutcome<T>>>,
    latest: &AtomicU64,
    outcome: SearchOutcome<T>,
) {
    let generation = outcome.generation;
    let delivered = tx.send_if_modified(|current| {
        let newer_than_delivered = current
            .as_ref()
            .is_none_or(|delivered| delivered.generation < generation);
        let still_latest = latest.load(Ordering::Acquire) == generation;
        if newer_than_delivered && still_latest {
            *current = Some(outcome.clone());
            true
        } else {
            false
        }
    });
    if !delivered {
        trace!(generation, "stale search result discarded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::types::SortKey;
    use chrono::{TimeZone, Utc};
    use studium_model::{StudyListId, StudyListRecord, Subject, TagSet, Title};
    use uuid::Uuid;

    fn fixture_catalog() -> Catalog<StudyListRecord> {
        let lists = (1..=3u128).map(|id| StudyListRecord {
            id: StudyListId::from_uuid(Uuid::from_u128(id)),
            title: Title::new(format!("List {id}")).unwrap(),
            description: String::new(),
            owner: "owner".to_string(),
            subject: Subject::Physics,
            members: id as u64,
            documents: 0,
            likes: 0,
            views: 0,
            created_at: Utc.with_ymd_and_hms(2024, 11, id as u32, 0, 0, 0).unwrap(),
            tags: TagSet::empty(),
            public: true,
        });
        Catalog::load(lists).unwrap()
    }

    fn outcome_of(generation: u64) -> SearchOutcome<StudyListRecord> {
        SearchOutcome {
            generation,
            query: CatalogQuery::default(),
            results: Arc::new(ResultSet::new(Vec::new())),
        }
    }

    #[test]
    fn stale_delivery_cannot_overwrite_a_newer_one() {
        let (tx, rx) = watch::channel(None);
        let latest = AtomicU64::new(2);

        deliver(&tx, &latest, outcome_of(2));
        assert_eq!(rx.borrow().as_ref().unwrap().generation, 2);

        // Generation 1 finishes late; it must be discarded.
        deliver(&tx, &latest, outcome_of(1));
        assert_eq!(rx.borrow().as_ref().unwrap().generation, 2);
    }

    #[test]
    fn superseded_result_is_not_delivered_even_first() {
        let (tx, rx) = watch::channel(None);
        // A newer query was already submitted...
        let latest = AtomicU64::new(2);
        // ...so the older evaluation, finishing first, is dropped.
        deliver(&tx, &latest, outcome_of(1));
        assert!(rx.borrow().is_none());
    }

    #[tokio::test]
    async fn delivered_generations_are_monotonic() {
        let session = SearchSession::new(fixture_catalog());
        let mut rx = session.subscribe();

        session.submit(CatalogQuery::matching("list"));
        let last = session.submit(CatalogQuery {
            term: String::new(),
            sort: SortKey::MostDownloaded,
            ..Default::default()
        });
        assert_eq!(last, 2);

        let mut seen = 0;
        loop {
            rx.changed().await.unwrap();
            let outcome = rx.borrow_and_update().clone().unwrap();
            assert!(outcome.generation > seen);
            seen = outcome.generation;
            if seen == last {
                break;
            }
        }

        let final_outcome = session.latest().unwrap();
        assert_eq!(final_outcome.generation, 2);
        assert_eq!(final_outcome.results.len(), 3);
    }
}
