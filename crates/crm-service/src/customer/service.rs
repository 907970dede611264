//! Customer registration, edits, visits and inspector tracking.

use std::sync::Arc;

use tracing::info;

use crm_core::error::AppError;
use crm_core::types::pagination::{PageRequest, PageResponse};
use crm_database::CustomerStore;
use crm_entity::customer::{Customer, CustomerDraft, MichelinStatus};

/// Applies customer business rules on top of a [`CustomerStore`].
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl std::fmt::Debug for CustomerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerService")
            .field("store", &self.store.provider_name())
            .finish()
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Customer {id} not found"))
}

impl CustomerService {
    /// Creates a new customer service.
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Registers a new customer.
    pub async fn create(&self, draft: CustomerDraft) -> Result<Customer, AppError> {
        let customer = self.store.create(&draft).await?;
        info!(customer_id = customer.id, "Customer registered");
        Ok(customer)
    }

    /// Fetches one customer.
    pub async fn get(&self, id: i64) -> Result<Customer, AppError> {
        self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Lists customers, optionally filtered by a search term.
    ///
    /// A blank `query` lists everything.
    pub async fn list(
        &self,
        query: Option<&str>,
        page: &PageRequest,
    ) -> Result<PageResponse<Customer>, AppError> {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => self.store.search(q, page).await,
            None => self.store.find_all(page).await,
        }
    }

    /// Replaces every writable field of a customer.
    pub async fn update(&self, id: i64, draft: CustomerDraft) -> Result<Customer, AppError> {
        let customer = self
            .store
            .update(id, &draft)
            .await?
            .ok_or_else(|| not_found(id))?;
        info!(customer_id = id, "Customer updated");
        Ok(customer)
    }

    /// Removes a customer permanently.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }
        info!(customer_id = id, "Customer deleted");
        Ok(())
    }

    /// Adds `count` visits to a customer's tally.
    pub async fn record_visits(&self, id: i64, count: i32) -> Result<Customer, AppError> {
        if count < 1 {
            return Err(AppError::invalid_argument(format!(
                "Visit count must be at least 1, got {count}"
            )));
        }
        self.store
            .record_visits(id, count)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Moves a customer to a new inspector-suspicion status.
    pub async fn change_michelin_status(
        &self,
        id: i64,
        status: MichelinStatus,
    ) -> Result<Customer, AppError> {
        let customer = self
            .store
            .set_michelin_status(id, status)
            .await?
            .ok_or_else(|| not_found(id))?;
        info!(customer_id = id, status = %status, "Michelin status changed");
        Ok(customer)
    }

    /// Total number of stored customers.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.store.count().await
    }
}
