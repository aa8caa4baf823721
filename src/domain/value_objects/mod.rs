//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **MediaType**: Kind of media an advertisement points at
//! - **PageRequest / Page**: Pagination window and the store's answer to it
//! - **Sort**: Optional ordering applied by the store

mod media_type;
mod page;

pub use media_type::*;
pub use page::*;
