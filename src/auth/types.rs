//! Credential and reply types for the auth API calls. Credentials are built
//! at submission time and dropped once the request completes; passwords stay
//! behind `SecretString` until serialization.

use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug)]
pub struct LoginCredentials {
    pub username: String,
    pub password: SecretString,
}

#[derive(Debug)]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

/// Successful login body.
#[derive(Debug, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
}

/// Normalized non-success reply. `detail` is absent when the body was empty
/// or carried no usable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    pub status: u16,
    pub detail: Option<String>,
}

impl Denial {
    /// Message to surface: the server detail verbatim when present and
    /// non-empty, otherwise the action-specific fallback.
    #[must_use]
    pub fn message<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.detail
            .as_deref()
            .map(str::trim)
            .filter(|detail| !detail.is_empty())
            .unwrap_or(fallback)
    }
}

#[derive(Debug)]
pub enum LoginReply {
    Granted { access_token: String },
    Denied(Denial),
}

#[derive(Debug)]
pub enum RegisterReply {
    Completed,
    Denied(Denial),
}
