//! HTTP client for the authentication service. One request per invocation,
//! no retries, no timeout; non-success statuses are normalized into `Denied`
//! replies so callers only see transport problems as errors.

use crate::auth::error::AuthError;
use crate::auth::types::{
    Denial, LoginCredentials, LoginReply, RegisterCredentials, RegisterReply, TokenGrant,
};
use crate::auth::APP_USER_AGENT;
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use tracing::{debug, instrument};
use url::Url;

pub struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
    /// Build a client against the service base URL.
    ///
    /// # Errors
    /// Returns `AuthError::Config` when the base URL is not a valid absolute
    /// URL, or when the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, AuthError> {
        Url::parse(base_url)
            .map_err(|err| AuthError::Config(format!("invalid base URL {base_url}: {err}")))?;

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|err| AuthError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Submit login credentials.
    ///
    /// # Errors
    /// `AuthError::Network` when no response was received,
    /// `AuthError::Response` when a success status carries no usable token
    /// grant body.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginReply, AuthError> {
        let url = self.endpoint("/auth/login");
        let payload = json!({
            "username": credentials.username,
            "password": credentials.password.expose_secret(),
        });

        debug!("login URL: {}", url);

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(AuthError::Network)?;

        if response.status().is_success() {
            let grant: TokenGrant = response
                .json()
                .await
                .map_err(|err| AuthError::Response(format!("no access_token in body: {err}")))?;
            Ok(LoginReply::Granted {
                access_token: grant.access_token,
            })
        } else {
            Ok(LoginReply::Denied(denial(response).await))
        }
    }

    /// Submit registration details. The success body is not consumed beyond
    /// the status, a 200 or 201 both complete the registration.
    ///
    /// # Errors
    /// `AuthError::Network` when no response was received.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn register(
        &self,
        credentials: &RegisterCredentials,
    ) -> Result<RegisterReply, AuthError> {
        let url = self.endpoint("/auth/register");
        let payload = json!({
            "username": credentials.username,
            "email": credentials.email,
            "password": credentials.password.expose_secret(),
        });

        debug!("register URL: {}", url);

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(AuthError::Network)?;

        if response.status().is_success() {
            Ok(RegisterReply::Completed)
        } else {
            Ok(RegisterReply::Denied(denial(response).await))
        }
    }
}

/// Normalize a non-success response. The body may be empty or not JSON at
/// all, in which case there is no detail to surface.
async fn denial(response: Response) -> Denial {
    let status = response.status().as_u16();
    let detail = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("detail")
                .and_then(Value::as_str)
                .map(ToOwned::to_owned)
        });

    Denial { status, detail }
}
