//! Persisted advertisement document and repository trait.
//!
//! Maps to the `advertisement` collection/table:
//! - _id: TEXT PRIMARY KEY (UUID assigned on create)
//! - title: TEXT NOT NULL
//! - content: TEXT NOT NULL
//! - media_url: TEXT NOT NULL
//! - media_type: VARCHAR(5) NOT NULL ('IMAGE' | 'VIDEO')
//! - start_date: TIMESTAMPTZ NOT NULL
//! - end_date: TIMESTAMPTZ NOT NULL

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::advertisement::{Advertisement, ValidationError};
use crate::domain::value_objects::{MediaType, Page, PageRequest};
use crate::shared::error::StoreError;

/// Stored shape of an advertisement.
///
/// Unlike [`Advertisement`] this type is plain data; the only way back to the
/// value object is [`AdvertisementDocument::into_advertisement`], which
/// re-checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertisementDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub media_url: String,
    pub media_type: MediaType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl AdvertisementDocument {
    /// Assemble a document for `advertisement` under the given id.
    ///
    /// Any id carried by the advertisement itself is ignored. Timestamps are
    /// truncated to millisecond precision.
    pub fn from_advertisement(id: impl Into<String>, advertisement: &Advertisement) -> Self {
        Self {
            id: id.into(),
            title: advertisement.title().to_string(),
            content: advertisement.content().to_string(),
            media_url: advertisement.media_url().to_string(),
            media_type: advertisement.media_type(),
            start_date: advertisement.start_date().trunc_subsecs(3),
            end_date: advertisement.end_date().trunc_subsecs(3),
        }
    }

    /// Overwrite every mutable field with the values from `advertisement`.
    /// The document id is left untouched.
    pub fn overwrite_with(&mut self, advertisement: &Advertisement) {
        self.title = advertisement.title().to_string();
        self.content = advertisement.content().to_string();
        self.media_url = advertisement.media_url().to_string();
        self.media_type = advertisement.media_type();
        self.start_date = advertisement.start_date().trunc_subsecs(3);
        self.end_date = advertisement.end_date().trunc_subsecs(3);
    }

    /// Convert back to the validated value object.
    pub fn into_advertisement(self) -> Result<Advertisement, ValidationError> {
        Advertisement::restore(
            self.id,
            self.title,
            self.content,
            self.media_url,
            self.media_type,
            self.start_date,
            self.end_date,
        )
    }
}

/// Repository trait for advertisement documents, keyed by `_id`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvertisementRepository: Send + Sync {
    /// Find a document by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<AdvertisementDocument>, StoreError>;

    /// Fetch one page of documents; the store computes totals and ordering.
    async fn find_page(&self, request: PageRequest) -> Result<Page<AdvertisementDocument>, StoreError>;

    /// Insert or replace a document, returning what was stored.
    async fn save(&self, document: AdvertisementDocument) -> Result<AdvertisementDocument, StoreError>;

    /// Remove a document. Returns `false` if nothing was stored under `id`.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
