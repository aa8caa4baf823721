//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database connection pool and migrations (PostgreSQL)
//! - Advertisement document repositories
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
