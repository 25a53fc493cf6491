//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresMissionRepository` - Single-statement mission insert

mod mission_repository;

pub use mission_repository::PostgresMissionRepository;
