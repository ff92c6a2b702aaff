//! Cliente entity and repository trait.
//!
//! Maps to the `clientes` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a cliente record.
///
/// Maps to the `clientes` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - nombre: VARCHAR(120) NOT NULL
/// - apellido: VARCHAR(120) NOT NULL
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - create_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - foto: VARCHAR(255) NULL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Primary key; `None` until the store assigns one on insert
    pub id: Option<i64>,

    /// Given name
    pub nombre: String,

    /// Family name
    pub apellido: String,

    /// Email address (unique)
    pub email: String,

    /// Creation timestamp
    #[serde(rename = "createAt")]
    pub create_at: DateTime<Utc>,

    /// Filename of the photo stored in the upload directory, if any
    pub foto: Option<String>,
}

impl Customer {
    /// Check whether the record references a photo file on disk.
    pub fn has_photo(&self) -> bool {
        self.foto.as_deref().is_some_and(|f| !f.is_empty())
    }

    /// Full display name, `nombre apellido`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

/// One page of cliente records.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerPage {
    /// Records on this page
    pub content: Vec<Customer>,

    /// Zero-based page index
    pub number: u32,

    /// Requested page size
    pub size: u32,

    /// Total records across all pages
    #[serde(rename = "totalElements")]
    pub total_elements: i64,

    /// Total page count for the requested size
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl CustomerPage {
    /// Build a page, deriving the page count from the total and size.
    pub fn new(content: Vec<Customer>, number: u32, size: u32, total_elements: i64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            ((total_elements.max(0) as u64).div_ceil(u64::from(size))) as u32
        };

        Self {
            content,
            number,
            size,
            total_elements,
            total_pages,
        }
    }
}

/// Repository trait for cliente data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Fetch every cliente record.
    async fn find_all(&self) -> Result<Vec<Customer>, AppError>;

    /// Fetch one page of cliente records, ordered by id.
    async fn find_page(&self, page: u32, size: u32) -> Result<CustomerPage, AppError>;

    /// Find a cliente by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Persist a cliente: insert when `id` is `None`, otherwise update the
    /// existing row. Returns the stored record with its assigned id.
    async fn save(&self, customer: Customer) -> Result<Customer, AppError>;

    /// Delete a cliente by primary key.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
