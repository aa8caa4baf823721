//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{AdvertisementRequest, PageQuery, PageQueryError};
pub use response::{AdvertisementResponse, PageResponse};
