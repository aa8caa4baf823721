//! # Domain Layer
//!
//! The domain layer contains the advertisement model and its rules.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: The `Advertisement` value object, its persisted document
//!   and the repository trait
//! - **value_objects**: Media type and pagination types
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - An `Advertisement` can only be obtained through validation
//! - Repository traits define data access contracts

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
