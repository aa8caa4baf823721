//! # Advertisement Service Library
//!
//! This crate provides a CRUD service for advertisements with:
//! - RESTful HTTP API endpoints
//! - PostgreSQL for persistent storage, or a process-local store
//! - Prometheus metrics and health probes
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The validated `Advertisement`, its stored document and the store trait
//! - **Application Layer**: The advertisement service and DTOs
//! - **Infrastructure Layer**: Database, store and metrics implementations
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! advertisement_service/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, and the store trait
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database, stores, and metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Error types
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
