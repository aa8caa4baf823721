//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::PaginationSettings;
use crate::domain::{Advertisement, MediaType, PageRequest, Sort, SortError, ValidationError};

/// Create/update advertisement request
#[derive(Debug, Clone, Deserialize)]
pub struct AdvertisementRequest {
    /// Accepted for symmetry with responses; never used as the stored id
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    pub title: String,
    pub content: String,
    pub media_url: String,
    pub media_type: MediaType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl TryFrom<AdvertisementRequest> for Advertisement {
    type Error = ValidationError;

    fn try_from(request: AdvertisementRequest) -> Result<Self, Self::Error> {
        Advertisement::new(
            request.title,
            request.content,
            request.media_url,
            request.media_type,
            request.start_date,
            request.end_date,
        )
    }
}

/// Malformed list query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageQueryError {
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error(transparent)]
    Sort(#[from] SortError),
}

/// Advertisement list query parameters
///
/// Read from raw key/value pairs so that `sort` may repeat, as in
/// `?sort=title&sort=end_date,desc`. Unknown parameters are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(try_from = "Vec<(String, String)>")]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
}

fn parse_number(name: &'static str, value: String) -> Result<u32, PageQueryError> {
    value
        .trim()
        .parse()
        .map_err(|_| PageQueryError::InvalidNumber { name, value })
}

impl TryFrom<Vec<(String, String)>> for PageQuery {
    type Error = PageQueryError;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self, Self::Error> {
        let mut query = PageQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => query.page = Some(parse_number("page", value)?),
                "size" => query.size = Some(parse_number("size", value)?),
                "sort" => query.sort.push(value),
                _ => {}
            }
        }
        Ok(query)
    }
}

impl PageQuery {
    /// Resolve the query against the configured page size limits.
    ///
    /// A missing or zero size falls back to the default; larger sizes are
    /// clamped to the maximum. Blank `sort` values are skipped.
    pub fn into_page_request(
        self,
        settings: &PaginationSettings,
    ) -> Result<PageRequest, PageQueryError> {
        let size = match self.size {
            None | Some(0) => settings.default_size,
            Some(size) => size.min(settings.max_size),
        };
        let mut request = PageRequest::new(self.page.unwrap_or_default(), size);

        for sort in self.sort.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            request = request.with_sort(sort.parse::<Sort>()?);
        }
        Ok(request)
    }
}
