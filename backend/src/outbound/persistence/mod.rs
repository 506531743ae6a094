//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations translate between Diesel rows and domain
//! types and hold no business logic. Row structs (`models.rs`) and the
//! table definition (`schema.rs`) stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use nearby_users::outbound::persistence::{DbPool, DieselPersonRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/people")).await?;
//! let repo = DieselPersonRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_person_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_person_repository::DieselPersonRepository;
pub use migrations::{MigrationError, apply_migrations, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
