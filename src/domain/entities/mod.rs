//! # Domain Entities
//!
//! Core domain entities for the advertisement service.
//!
//! - **Advertisement**: validated value object handed to and returned from
//!   the application layer
//! - **AdvertisementDocument**: persisted shape of an advertisement, carrying
//!   the store-assigned `_id`
//!
//! ## Repository Traits
//!
//! `AdvertisementRepository` defines the document store contract. It is
//! implemented in the infrastructure layer, following the dependency
//! inversion principle.

mod advertisement;
mod advertisement_document;

// Re-export Advertisement value object and validation types
pub use advertisement::{
    Advertisement, ValidationError, CONTENT_TOO_SHORT, END_IN_PAST, MIN_TEXT_LENGTH,
    START_AFTER_END, TITLE_TOO_SHORT, URL_SCHEME_NOT_WEB,
};

// Re-export persisted document and its repository trait
pub use advertisement_document::{AdvertisementDocument, AdvertisementRepository};

#[cfg(test)]
pub use advertisement_document::MockAdvertisementRepository;
