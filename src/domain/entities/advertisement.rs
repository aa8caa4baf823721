//! Advertisement entity.
//!
//! An `Advertisement` is a validated, immutable value object. Every instance
//! that exists has passed the construction checks below, so the rest of the
//! crate never re-validates one.

use chrono::{DateTime, Utc};
use url::{ParseError, Url};

use crate::domain::value_objects::MediaType;

/// Minimum length of `title` and `content`, in UTF-16 code units.
pub const MIN_TEXT_LENGTH: usize = 2;

pub const START_AFTER_END: &str = "start_date should be before end_date";
pub const END_IN_PAST: &str = "end_date cannot be in the past";
pub const TITLE_TOO_SHORT: &str = "Title length too short";
pub const CONTENT_TOO_SHORT: &str = "Content length too short";
pub const URL_SCHEME_NOT_WEB: &str = "URL must use http or https";

/// Schemes that are recognised as URLs but are not web locations.
const NON_WEB_SCHEMES: &[&str] = &["ftp", "file", "jar", "mailto"];

/// Raised when an advertisement invariant does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn invalid_url(reason: impl std::fmt::Display) -> Self {
        Self::new(format!("URL is not valid: {}", reason))
    }
}

/// A promotional advertisement with a display window.
///
/// `start_date` and `end_date` are descriptive only; nothing in the service
/// acts when the window opens or closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    id: Option<String>,
    title: String,
    content: String,
    media_url: String,
    media_type: MediaType,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl Advertisement {
    /// Build a new advertisement, checking every invariant against the
    /// current wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, in this order: date ordering,
    /// end date in the past, title length, content length, media URL.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        media_url: impl Into<String>,
        media_type: MediaType,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Self::new_at(
            title,
            content,
            media_url,
            media_type,
            start_date,
            end_date,
            Utc::now(),
        )
    }

    /// Same as [`Advertisement::new`] with an explicit "now".
    pub fn new_at(
        title: impl Into<String>,
        content: impl Into<String>,
        media_url: impl Into<String>,
        media_type: MediaType,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let advertisement = Self {
            id: None,
            title: title.into(),
            content: content.into(),
            media_url: media_url.into(),
            media_type,
            start_date,
            end_date,
        };
        advertisement.validate(Some(now))?;
        Ok(advertisement)
    }

    /// Rebuild an advertisement that was already accepted once and persisted.
    ///
    /// The wall-clock check is skipped so that ads whose window has closed
    /// stay readable; every structural check still runs.
    pub(crate) fn restore(
        id: String,
        title: String,
        content: String,
        media_url: String,
        media_type: MediaType,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let advertisement = Self {
            id: Some(id),
            title,
            content,
            media_url,
            media_type,
            start_date,
            end_date,
        };
        advertisement.validate(None)?;
        Ok(advertisement)
    }

    fn validate(&self, now: Option<DateTime<Utc>>) -> Result<(), ValidationError> {
        if self.start_date > self.end_date {
            return Err(ValidationError::new(START_AFTER_END));
        }
        if let Some(now) = now {
            if self.end_date < now {
                return Err(ValidationError::new(END_IN_PAST));
            }
        }
        if text_length(&self.title) < MIN_TEXT_LENGTH {
            return Err(ValidationError::new(TITLE_TOO_SHORT));
        }
        if text_length(&self.content) < MIN_TEXT_LENGTH {
            return Err(ValidationError::new(CONTENT_TOO_SHORT));
        }
        validate_media_url(&self.media_url)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }
}

/// Length as UTF-16 code units, so a character outside the BMP counts twice.
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Check that `raw` is an absolute `http` or `https` URL.
fn validate_media_url(raw: &str) -> Result<(), ValidationError> {
    let url = Url::parse(raw).map_err(|e| match e {
        ParseError::RelativeUrlWithoutBase => {
            ValidationError::invalid_url(format!("no protocol: {}", raw))
        }
        other => ValidationError::invalid_url(other),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme if NON_WEB_SCHEMES.contains(&scheme) => {
            Err(ValidationError::new(URL_SCHEME_NOT_WEB))
        }
        scheme => Err(ValidationError::invalid_url(format!(
            "unknown protocol: {}",
            scheme
        ))),
    }
}
