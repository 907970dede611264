//! Process-local customer repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crm_core::error::AppError;
use crm_core::result::AppResult;
use crm_core::traits::Repository;
use crm_core::types::pagination::{PageRequest, PageResponse};
use crm_entity::customer::{Customer, CustomerDraft, MichelinStatus};

use super::store::CustomerStore;

/// Customer repository backed by an ordered map.
///
/// Enforces the same `email` / `phone` uniqueness as the PostgreSQL schema
/// and reports violations with the same message text.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    inner: RwLock<Table>,
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Customer>,
    last_id: i64,
}

impl Table {
    /// Reject `draft` if another row already holds its email or phone.
    fn check_unique(&self, draft: &CustomerDraft, own_id: Option<i64>) -> AppResult<()> {
        let taken = |value: &str, field: fn(&Customer) -> &str| {
            self.rows
                .values()
                .any(|c| Some(c.id) != own_id && field(c) == value)
        };

        if taken(&draft.email, |c| c.email.as_str()) {
            return Err(duplicate_key("customer_email_key"));
        }
        if taken(&draft.phone, |c| c.phone.as_str()) {
            return Err(duplicate_key("customer_phone_key"));
        }
        Ok(())
    }
}

fn duplicate_key(constraint: &str) -> AppError {
    AppError::constraint_violation(format!(
        "duplicate key value violates unique constraint \"{constraint}\""
    ))
}

fn page_of<'a>(
    matches: impl Iterator<Item = &'a Customer>,
    page: &PageRequest,
) -> PageResponse<Customer> {
    let matches: Vec<&Customer> = matches.collect();
    let total = matches.len() as u64;
    let items = matches
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .cloned()
        .collect();
    PageResponse::new(items, page, total)
}

impl InMemoryCustomerRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Customer, CustomerDraft, i64> for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Customer>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Customer>> {
        let table = self.inner.read().await;
        Ok(page_of(table.rows.values(), page))
    }

    async fn create(&self, draft: &CustomerDraft) -> AppResult<Customer> {
        let mut table = self.inner.write().await;
        table.check_unique(draft, None)?;

        table.last_id += 1;
        let customer = Customer::from_draft(table.last_id, draft);
        table.rows.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update(&self, id: i64, draft: &CustomerDraft) -> AppResult<Option<Customer>> {
        let mut table = self.inner.write().await;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        table.check_unique(draft, Some(id))?;

        let customer = Customer::from_draft(id, draft);
        table.rows.insert(id, customer.clone());
        Ok(Some(customer))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.inner.read().await.rows.len() as u64)
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerRepository {
    async fn search(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<Customer>> {
        let needle = query.to_lowercase();
        let table = self.inner.read().await;
        let matches = table.rows.values().filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
                || c.phone.to_lowercase().contains(&needle)
        });
        Ok(page_of(matches, page))
    }

    async fn record_visits(&self, id: i64, count: i32) -> AppResult<Option<Customer>> {
        let mut table = self.inner.write().await;
        let Some(customer) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        customer.visit_count = customer
            .visit_count
            .checked_add(count)
            .ok_or_else(|| AppError::database("integer out of range"))?;
        Ok(Some(customer.clone()))
    }

    async fn set_michelin_status(
        &self,
        id: i64,
        status: MichelinStatus,
    ) -> AppResult<Option<Customer>> {
        let mut table = self.inner.write().await;
        Ok(table.rows.get_mut(&id).map(|customer| {
            customer.michelin_status = status;
            customer.clone()
        }))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}
