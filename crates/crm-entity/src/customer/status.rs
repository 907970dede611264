//! Michelin inspector suspicion status.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// How strongly staff suspect a customer of being a Michelin inspector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "michelin_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MichelinStatus {
    /// Ordinary guest.
    #[default]
    Regular,
    /// Behaviour worth keeping an eye on.
    Suspicious,
    /// Confirmed inspector.
    Inspector,
}

impl MichelinStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "REGULAR",
            Self::Suspicious => "SUSPICIOUS",
            Self::Inspector => "INSPECTOR",
        }
    }
}

impl fmt::Display for MichelinStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
