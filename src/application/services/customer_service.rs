//! Cliente Service
//!
//! Pass-through facade over the cliente repository. Read operations run as
//! single read-only statements; `save` and `delete` run inside the
//! repository's read-write transaction.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Customer, CustomerPage, CustomerRepository};
use crate::shared::error::AppError;

/// Cliente service trait
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Fetch every cliente record.
    async fn find_all(&self) -> Result<Vec<Customer>, AppError>;

    /// Fetch one page of cliente records.
    async fn find_page(&self, page: u32, size: u32) -> Result<Option<CustomerPage>, AppError>;

    /// Find a cliente by id. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Persist a cliente (insert when it has no id, else update).
    async fn save(&self, customer: Customer) -> Result<Customer, AppError>;

    /// Delete a cliente by id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// CustomerService implementation backed by a repository.
pub struct CustomerServiceImpl<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> CustomerServiceImpl<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> CustomerService for CustomerServiceImpl<R>
where
    R: CustomerRepository + 'static,
{
    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        self.repo.find_all().await
    }

    async fn find_page(&self, _page: u32, _size: u32) -> Result<Option<CustomerPage>, AppError> {
        // Pagination was never wired up at the service level; callers always
        // get an empty result even though the repository supports it.
        Ok(None)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        self.repo.find_by_id(id).await
    }

    async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        self.repo.save(customer).await
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete_by_id(id).await
    }
}
