//! Generic repository trait for record storage.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::{PageRequest, PageResponse};

/// Generic CRUD repository trait.
///
/// `Draft` is the writable part of an entity: everything except the
/// storage-assigned identity. Entity-specific queries live on extension
/// traits in the database crate.
///
/// Implementations report a lookup miss as `Ok(None)` / `Ok(false)` and
/// a rejected write as an `ErrorKind::ConstraintViolation` error carrying
/// the storage engine's own message text.
#[async_trait]
pub trait Repository<Entity, Draft, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Draft: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Find all entities with pagination.
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Entity>>;

    /// Insert a new entity and return it with its assigned identity.
    async fn create(&self, draft: &Draft) -> AppResult<Entity>;

    /// Replace the writable fields of an existing entity.
    /// Returns `None` when no entity has the given id.
    async fn update(&self, id: Id, draft: &Draft) -> AppResult<Option<Entity>>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: Id) -> AppResult<bool>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
