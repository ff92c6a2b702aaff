//! # Clientes API Library
//!
//! This crate provides a REST backend for managing clientes with:
//! - CRUD HTTP API endpoints
//! - PostgreSQL for persistent storage
//! - Photo uploads stored on local disk
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The Cliente entity and its repository trait
//! - **Application Layer**: The cliente service and request DTOs
//! - **Infrastructure Layer**: Database and photo-store implementations
//! - **Presentation Layer**: HTTP handlers and routes
//!
//! ## Module Structure
//!
//! ```text
//! clientes_api/
//! +-- config/        Configuration management
//! +-- domain/        Domain entity and repository trait
//! +-- application/   Application service and DTOs
//! +-- infrastructure/ Database and photo-store implementations
//! +-- presentation/  HTTP routes and handlers
//! +-- shared/        Common utilities (errors, validation formatting)
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
