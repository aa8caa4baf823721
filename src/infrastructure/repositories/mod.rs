//! Repository Implementations
//!
//! Concrete implementations of the `AdvertisementRepository` trait defined
//! in the domain layer.
//!
//! ## Available Repositories
//!
//! - **PgAdvertisementRepository** - PostgreSQL-backed document table
//! - **InMemoryAdvertisementRepository** - process-local store for the
//!   `memory` backend and tests
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::PgAdvertisementRepository;
//!
//! fn setup_repository(pool: PgPool) -> Arc<dyn AdvertisementRepository> {
//!     Arc::new(PgAdvertisementRepository::new(pool))
//! }
//! ```

pub mod advertisement_repository;
pub mod memory_repository;

pub use advertisement_repository::PgAdvertisementRepository;
pub use memory_repository::InMemoryAdvertisementRepository;
