//! The customer store contract shared by every backend.

use async_trait::async_trait;

use crm_core::result::AppResult;
use crm_core::traits::Repository;
use crm_core::types::pagination::{PageRequest, PageResponse};
use crm_entity::customer::{Customer, CustomerDraft, MichelinStatus};

/// Customer-specific queries on top of the generic CRUD contract.
///
/// Uniqueness of `email` and `phone` is enforced here, not by the entity.
/// A duplicate write fails with `ErrorKind::ConstraintViolation` whose
/// message is the engine's own text naming the violated constraint.
#[async_trait]
pub trait CustomerStore: Repository<Customer, CustomerDraft, i64> {
    /// Case-insensitive substring search over name, email and phone.
    async fn search(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<Customer>>;

    /// Add `count` to the visit counter. Returns `None` for an unknown id.
    async fn record_visits(&self, id: i64, count: i32) -> AppResult<Option<Customer>>;

    /// Overwrite the Michelin status. Returns `None` for an unknown id.
    async fn set_michelin_status(
        &self,
        id: i64,
        status: MichelinStatus,
    ) -> AppResult<Option<Customer>>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> AppResult<()>;

    /// Short backend name for diagnostics.
    fn provider_name(&self) -> &'static str;
}
