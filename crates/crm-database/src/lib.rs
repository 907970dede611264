//! # crm-database
//!
//! PostgreSQL connection management and the customer store: a sqlx-backed
//! repository for production and an in-memory one for development and
//! tests. Both sit behind the [`CustomerStore`] trait.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{CustomerStore, InMemoryCustomerRepository, PgCustomerRepository};
