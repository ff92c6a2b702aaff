//! # Domain Entities
//!
//! The Cliente entity is the sole business object managed by this service.
//! It maps directly to the `clientes` database table.
//!
//! ## Repository Traits
//!
//! The entity has an associated repository trait defining data access
//! operations. The trait is implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod customer;

// Re-export Cliente entity and related types
pub use customer::{Customer, CustomerPage, CustomerRepository};
