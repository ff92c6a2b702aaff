//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CustomerService**: Cliente CRUD operations, delegating to the
//!   repository layer

pub mod customer_service;

// Re-export customer service types
pub use customer_service::{CustomerService, CustomerServiceImpl};
