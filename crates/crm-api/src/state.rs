//! Shared application state threaded through all handlers.

use std::sync::Arc;

use crm_auth::{AccessPolicy, BasicCredential};
use crm_core::config::AppConfig;
use crm_core::result::AppResult;
use crm_database::CustomerStore;
use crm_service::CustomerService;

use crate::error::{ConstraintClassifier, MessageSniffingClassifier};

/// Application state available to every handler and middleware.
///
/// Everything is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Customer business logic.
    pub customer_service: Arc<CustomerService>,
    /// Backing store, for probes and the console.
    pub store: Arc<dyn CustomerStore>,
    /// Path rules consulted by the access gate.
    pub policy: Arc<AccessPolicy>,
    /// The provisioned Basic account.
    pub credential: Arc<BasicCredential>,
    /// Decides which unique field a constraint violation concerns.
    pub classifier: Arc<dyn ConstraintClassifier>,
}

impl AppState {
    /// Wire services, credential and policy over `store`.
    ///
    /// Hashes the configured password, so this is the last point where the
    /// plaintext is needed.
    pub fn new(config: AppConfig, store: Arc<dyn CustomerStore>) -> AppResult<Self> {
        let credential = BasicCredential::from_config(&config.security)?;
        let policy = AccessPolicy::from_mode(config.security.mode);
        let customer_service = CustomerService::new(Arc::clone(&store));

        Ok(Self {
            config: Arc::new(config),
            customer_service: Arc::new(customer_service),
            store,
            policy: Arc::new(policy),
            credential: Arc::new(credential),
            classifier: Arc::new(MessageSniffingClassifier),
        })
    }

    /// Replace the constraint classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn ConstraintClassifier>) -> Self {
        self.classifier = classifier;
        self
    }
}
