//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed people store using Diesel
//! - **memory**: in-process people store for development and tests
//! - **randomuser**: reqwest client for the random-person source
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
pub mod randomuser;
