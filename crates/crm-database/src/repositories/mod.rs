//! Customer repository implementations.

pub mod customer;
pub mod memory;
pub mod store;

pub use customer::PgCustomerRepository;
pub use memory::InMemoryCustomerRepository;
pub use store::CustomerStore;
