//! `Authorization: Basic` header parsing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Credentials carried by a Basic `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// Username
    pub username: String,
    /// Password (plaintext from header)
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// Why a request carried no usable Basic credentials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasicAuthError {
    /// No Authorization header present
    #[error("Missing Authorization header")]
    MissingHeader,

    /// A different scheme such as `Bearer`
    #[error("Not Basic authentication")]
    NotBasicAuth,

    /// Payload is not valid base64 or not UTF-8
    #[error("Invalid base64 encoding")]
    InvalidEncoding,

    /// Decoded payload has no `:` separator
    #[error("Invalid credentials format")]
    InvalidFormat,
}

impl BasicCredentials {
    /// Parse the raw value of an `Authorization` header.
    ///
    /// The scheme name is matched case-insensitively. The password is
    /// everything after the first `:`, so it may itself contain colons.
    pub fn from_header(header: Option<&str>) -> Result<Self, BasicAuthError> {
        let header = header.ok_or(BasicAuthError::MissingHeader)?.trim();

        let (scheme, encoded) = header
            .split_once(' ')
            .ok_or(BasicAuthError::NotBasicAuth)?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(BasicAuthError::NotBasicAuth);
        }

        let decoded = BASE64
            .decode(encoded.trim())
            .map_err(|_| BasicAuthError::InvalidEncoding)?;
        let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::InvalidEncoding)?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or(BasicAuthError::InvalidFormat)?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Encode as an `Authorization` header value.
    pub fn to_header(&self) -> String {
        let token = BASE64.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}
