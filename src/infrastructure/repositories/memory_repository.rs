//! In-Memory Advertisement Repository
//!
//! Process-local document store used by the `memory` storage backend and by
//! the test suite. Documents keep their first insertion position so that
//! unsorted pages come back in insertion order, like the PostgreSQL store.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::Instant;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    AdvertisementDocument, AdvertisementRepository, Direction, Page, PageRequest, Sort, SortField,
};
use crate::infrastructure::metrics;
use crate::shared::error::StoreError;

const BACKEND: &str = "memory";

#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    document: AdvertisementDocument,
}

/// DashMap-backed advertisement repository.
#[derive(Debug, Default)]
pub struct InMemoryAdvertisementRepository {
    documents: DashMap<String, Entry>,
    next_seq: AtomicU64,
}

impl InMemoryAdvertisementRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Remove every document.
    pub fn clear(&self) {
        self.documents.clear();
    }
}

fn compare(sort: &Sort, a: &AdvertisementDocument, b: &AdvertisementDocument) -> Ordering {
    let ordering = match sort.field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Content => a.content.cmp(&b.content),
        SortField::MediaUrl => a.media_url.cmp(&b.media_url),
        SortField::MediaType => a.media_type.as_str().cmp(b.media_type.as_str()),
        SortField::StartDate => a.start_date.cmp(&b.start_date),
        SortField::EndDate => a.end_date.cmp(&b.end_date),
    };
    match sort.direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}

#[async_trait]
impl AdvertisementRepository for InMemoryAdvertisementRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<AdvertisementDocument>, StoreError> {
        let started = Instant::now();
        let document = self.documents.get(id).map(|entry| entry.document.clone());
        metrics::record_store_query("find_by_id", BACKEND, started.elapsed().as_secs_f64());

        Ok(document)
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<AdvertisementDocument>, StoreError> {
        let started = Instant::now();
        let mut entries: Vec<Entry> = self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        entries.sort_by(|a, b| {
            request
                .sort
                .iter()
                .map(|sort| compare(sort, &a.document, &b.document))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
                .then(a.seq.cmp(&b.seq))
        });

        let total = entries.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = entries
            .into_iter()
            .skip(offset)
            .take(request.size as usize)
            .map(|entry| entry.document)
            .collect();
        metrics::record_store_query("find_page", BACKEND, started.elapsed().as_secs_f64());

        Ok(Page::new(content, &request, total))
    }

    async fn save(&self, document: AdvertisementDocument) -> Result<AdvertisementDocument, StoreError> {
        let started = Instant::now();
        {
            let mut entry = self
                .documents
                .entry(document.id.clone())
                .or_insert_with(|| Entry {
                    seq: self.next_seq.fetch_add(1, AtomicOrdering::Relaxed),
                    document: document.clone(),
                });
            entry.document = document.clone();
        }
        metrics::record_store_query("save", BACKEND, started.elapsed().as_secs_f64());

        Ok(document)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let started = Instant::now();
        let removed = self.documents.remove(id).is_some();
        metrics::record_store_query("delete", BACKEND, started.elapsed().as_secs_f64());

        Ok(removed)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
