//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.

pub mod customer_repository;

pub use customer_repository::PgCustomerRepository;
