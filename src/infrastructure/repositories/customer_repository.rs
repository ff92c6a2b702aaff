//! Cliente Repository Implementation
//!
//! PostgreSQL implementation of the CustomerRepository trait.
//! Maps between the database schema and the domain Customer entity.
//!
//! Read operations run as single statements; `save` and `delete_by_id`
//! run inside an explicit read-write transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Customer, CustomerPage, CustomerRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `clientes` table schema.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    nombre: String,
    apellido: String,
    email: String,
    create_at: DateTime<Utc>,
    foto: Option<String>,
}

impl CustomerRow {
    /// Convert database row to domain Customer entity.
    fn into_customer(self) -> Customer {
        Customer {
            id: Some(self.id),
            nombre: self.nombre,
            apellido: self.apellido,
            email: self.email,
            create_at: self.create_at,
            foto: self.foto,
        }
    }
}

/// PostgreSQL cliente repository implementation.
///
/// Provides CRUD operations for clientes against a PostgreSQL database.
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    /// Create a new PgCustomerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    /// Fetch every cliente record, ordered by id.
    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, nombre, apellido, email, create_at, foto
            FROM clientes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_customer()).collect())
    }

    /// Fetch one page of cliente records.
    async fn find_page(&self, page: u32, size: u32) -> Result<CustomerPage, AppError> {
        let offset = i64::from(page) * i64::from(size);

        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, nombre, apellido, email, create_at, foto
            FROM clientes
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clientes")
            .fetch_one(&self.pool)
            .await?;

        let content = rows.into_iter().map(|r| r.into_customer()).collect();
        Ok(CustomerPage::new(content, page, size, total))
    }

    /// Find a cliente by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, nombre, apellido, email, create_at, foto
            FROM clientes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_customer()))
    }

    /// Insert when the entity carries no id, otherwise update the row.
    async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = match customer.id {
            None => {
                sqlx::query_as::<_, CustomerRow>(
                    r#"
                    INSERT INTO clientes (nombre, apellido, email, create_at, foto)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id, nombre, apellido, email, create_at, foto
                    "#,
                )
                .bind(&customer.nombre)
                .bind(&customer.apellido)
                .bind(&customer.email)
                .bind(customer.create_at)
                .bind(&customer.foto)
                .fetch_one(&mut *tx)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, CustomerRow>(
                    r#"
                    UPDATE clientes
                    SET nombre = $2,
                        apellido = $3,
                        email = $4,
                        create_at = $5,
                        foto = $6
                    WHERE id = $1
                    RETURNING id, nombre, apellido, email, create_at, foto
                    "#,
                )
                .bind(id)
                .bind(&customer.nombre)
                .bind(&customer.apellido)
                .bind(&customer.email)
                .bind(customer.create_at)
                .bind(&customer.foto)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Cliente con id {} no encontrado", id))
                })?
            }
        };

        tx.commit().await?;

        Ok(row.into_customer())
    }

    /// Delete a cliente by primary key.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Cliente con id {} no encontrado",
                id
            )));
        }

        tx.commit().await?;

        Ok(())
    }
}
