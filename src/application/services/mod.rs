//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AdvertisementService**: Advertisement CRUD and pagination

pub mod advertisement_service;

// Re-export advertisement service types
pub use advertisement_service::{
    reject_invalid, AdvertisementError, AdvertisementService, AdvertisementServiceImpl,
};
