//! PostgreSQL customer repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crm_core::error::{AppError, ErrorKind};
use crm_core::result::AppResult;
use crm_core::traits::Repository;
use crm_core::types::pagination::{PageRequest, PageResponse};
use crm_entity::customer::{Customer, CustomerDraft, MichelinStatus};

use super::store::CustomerStore;

const COLUMNS: &str =
    "id, name, phone, email, allergies, visit_count, notes, michelin_status";

/// Repository for customer rows in PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    /// Create a new customer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a failed write. Integrity rejections keep the engine's message so the
/// API layer can tell which constraint fired.
fn map_write_error(err: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.kind() {
            sqlx::error::ErrorKind::UniqueViolation
            | sqlx::error::ErrorKind::ForeignKeyViolation
            | sqlx::error::ErrorKind::NotNullViolation
            | sqlx::error::ErrorKind::CheckViolation => {
                return AppError::constraint_violation(db_err.message());
            }
            _ => {}
        }
    }
    AppError::with_source(ErrorKind::Database, context, err)
}

/// `LIMIT`/`OFFSET` value for PostgreSQL, which takes a signed 64-bit
/// integer. Out-of-range values clamp to `i64::MAX` and yield an empty page.
fn sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Build an `ILIKE` pattern that matches `query` literally anywhere.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl Repository<Customer, CustomerDraft, i64> for PgCustomerRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>(&format!("SELECT {COLUMNS} FROM customer WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find customer by id", e)
            })
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Customer>> {
        let total = self.count().await?;

        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {COLUMNS} FROM customer ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(sql_bound(page.limit()))
        .bind(sql_bound(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list customers", e))?;

        Ok(PageResponse::new(customers, page, total))
    }

    async fn create(&self, draft: &CustomerDraft) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(&format!(
            "INSERT INTO customer (name, phone, email, allergies, visit_count, notes, michelin_status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COLUMNS}"
        ))
        .bind(&draft.name)
        .bind(&draft.phone)
        .bind(&draft.email)
        .bind(&draft.allergies)
        .bind(draft.visit_count)
        .bind(&draft.notes)
        .bind(draft.michelin_status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create customer"))
    }

    async fn update(&self, id: i64, draft: &CustomerDraft) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>(&format!(
            "UPDATE customer SET name = $2, phone = $3, email = $4, allergies = $5, \
             visit_count = $6, notes = $7, michelin_status = $8 \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.phone)
        .bind(&draft.email)
        .bind(&draft.allergies)
        .bind(draft.visit_count)
        .bind(&draft.notes)
        .bind(draft.michelin_status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update customer"))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Failed to delete customer"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count customers", e)
            })?;

        Ok(total as u64)
    }
}

#[async_trait]
impl CustomerStore for PgCustomerRepository {
    async fn search(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<Customer>> {
        let pattern = like_pattern(query);
        let filter = "name ILIKE $1 OR email ILIKE $1 OR phone ILIKE $1";

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM customer WHERE {filter}"))
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count search results", e)
                })?;

        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {COLUMNS} FROM customer WHERE {filter} ORDER BY id LIMIT $2 OFFSET $3"
        ))
        .bind(&pattern)
        .bind(sql_bound(page.limit()))
        .bind(sql_bound(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search customers", e))?;

        Ok(PageResponse::new(customers, page, total as u64))
    }

    async fn record_visits(&self, id: i64, count: i32) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>(&format!(
            "UPDATE customer SET visit_count = visit_count + $2 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(count)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to record customer visits"))
    }

    async fn set_michelin_status(
        &self,
        id: i64,
        status: MichelinStatus,
    ) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>(&format!(
            "UPDATE customer SET michelin_status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update michelin status"))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    fn provider_name(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ada"), "%ada%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn test_huge_page_never_binds_a_negative_offset() {
        let page = PageRequest::new(u64::MAX, 25);
        assert_eq!(page.offset(), u64::MAX);
        assert_eq!(sql_bound(page.offset()), i64::MAX);
        assert_eq!(sql_bound(page.limit()), 25);
        assert_eq!(sql_bound(0), 0);
    }

    #[test]
    fn test_non_database_errors_are_not_constraint_violations() {
        let err = map_write_error(sqlx::Error::RowNotFound, "Failed to create customer");
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Failed to create customer");
        assert!(err.source.is_some());
    }
}
