//! Access policy and credential configuration.

use serde::{Deserialize, Serialize};

/// Which access rule set guards the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecurityMode {
    /// Probes, docs and console are open; everything else needs Basic credentials.
    #[default]
    Standard,
    /// Every path is open. Only for test execution; must be selected explicitly.
    PermitAll,
}

/// Security configuration: the single provisioned account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Rule set selection.
    #[serde(default)]
    pub mode: SecurityMode,
    /// Account username.
    #[serde(default = "default_username")]
    pub username: String,
    /// Account password in plain text; hashed once at startup.
    #[serde(default = "default_password")]
    pub password: String,
    /// Realm advertised in `WWW-Authenticate`.
    #[serde(default = "default_realm")]
    pub realm: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            mode: SecurityMode::default(),
            username: default_username(),
            password: default_password(),
            realm: default_realm(),
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "admin".to_string()
}

fn default_realm() -> String {
    "restaurant-crm".to_string()
}
