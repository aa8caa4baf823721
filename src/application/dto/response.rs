//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Advertisement, MediaType, Page};

/// Advertisement response
#[derive(Debug, Clone, Serialize)]
pub struct AdvertisementResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub media_url: String,
    pub media_type: MediaType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<Advertisement> for AdvertisementResponse {
    fn from(advertisement: Advertisement) -> Self {
        Self {
            id: advertisement.id().map(str::to_string),
            title: advertisement.title().to_string(),
            content: advertisement.content().to_string(),
            media_url: advertisement.media_url().to_string(),
            media_type: advertisement.media_type(),
            start_date: advertisement.start_date(),
            end_date: advertisement.end_date(),
        }
    }
}

/// Paginated response envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub size: u32,
    pub number: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T, U> From<Page<T>> for PageResponse<U>
where
    U: From<T>,
{
    fn from(page: Page<T>) -> Self {
        let first = page.is_first();
        let last = page.is_last();
        let content: Vec<U> = page.content.into_iter().map(U::from).collect();

        Self {
            number_of_elements: content.len(),
            empty: content.is_empty(),
            content,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            size: page.size,
            number: page.number,
            first,
            last,
        }
    }
}
