//! Response DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crm_core::types::pagination::PageResponse;
use crm_entity::customer::Customer;

/// One page of customers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPage {
    /// Customers on this page, ordered by id.
    pub items: Vec<Customer>,
    /// Current page (1-based).
    pub page: u64,
    /// Items per page.
    pub page_size: u64,
    /// Total matching customers.
    pub total_items: u64,
    /// Total pages.
    pub total_pages: u64,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Whether a previous page exists.
    pub has_previous: bool,
}

impl From<PageResponse<Customer>> for CustomerPage {
    fn from(page: PageResponse<Customer>) -> Self {
        Self {
            items: page.items,
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            has_next: page.has_next,
            has_previous: page.has_previous,
        }
    }
}

/// `UP` or `DOWN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    /// Reachable.
    Up,
    /// Unreachable.
    Down,
}

/// Health of one dependency.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealth {
    /// Component status.
    pub status: HealthStatus,
}

/// Aggregate health probe body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall status; `DOWN` if any component is down.
    pub status: HealthStatus,
    /// Per-component detail.
    pub components: BTreeMap<String, ComponentHealth>,
}

/// Application identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppInfo {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Short description.
    pub description: String,
}

/// Info probe body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InfoResponse {
    /// Application identity.
    pub app: AppInfo,
}

/// Development console summary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleSummary {
    /// Store backend name.
    pub provider: String,
    /// Stored customers.
    pub customer_count: u64,
    /// Whether the access gate is disabled.
    pub permit_all: bool,
}
