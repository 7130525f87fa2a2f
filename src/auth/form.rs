//! Submission orchestration. One controller per form; it packages the field
//! values, drives the auth call, and on success persists the session and
//! picks the destination. Failures are surfaced through the presenter and
//! leave no state behind.

use crate::auth::client::AuthClient;
use crate::auth::error::AuthError;
use crate::auth::presenter::Presenter;
use crate::auth::router::{self, Destination};
use crate::auth::session::SessionStore;
use crate::auth::token;
use crate::auth::types::{LoginCredentials, LoginReply, RegisterCredentials, RegisterReply};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};

pub const LOGIN_FALLBACK_MESSAGE: &str = "Error de autenticación";
pub const REGISTER_FALLBACK_MESSAGE: &str = "Error al registrar";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registro exitoso. Inicia sesión.";
pub const NETWORK_FAILURE_MESSAGE: &str = "No se pudo contactar al servidor. Intenta de nuevo.";
pub const MALFORMED_SESSION_MESSAGE: &str =
    "La sesión recibida no es válida. Intenta iniciar sesión de nuevo.";

/// Orchestrates one form. Collaborators are injected so the controller is
/// constructible without any real page around it.
pub struct FormController<'a> {
    client: AuthClient,
    store: &'a dyn SessionStore,
    presenter: &'a dyn Presenter,
    in_flight: AtomicBool,
}

impl<'a> FormController<'a> {
    #[must_use]
    pub fn new(
        client: AuthClient,
        store: &'a dyn SessionStore,
        presenter: &'a dyn Presenter,
    ) -> Self {
        Self {
            client,
            store,
            presenter,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Submit login credentials. Returns the destination to navigate to, or
    /// `None` when the failure was presented and the form returned to idle.
    ///
    /// # Errors
    /// `AuthError::SubmissionInFlight` when another submission is pending on
    /// this form; `AuthError::Session` when persisting the token fails;
    /// `AuthError::Response` when a success reply carries no usable grant.
    pub async fn submit_login(
        &self,
        credentials: LoginCredentials,
    ) -> Result<Option<Destination>, AuthError> {
        let _guard = self.begin()?;

        match self.client.login(&credentials).await {
            Ok(LoginReply::Granted { access_token }) => match token::decode_role(&access_token) {
                Ok(role) => {
                    // Decode precedes persistence: only well-formed tokens
                    // ever reach the store.
                    self.store.save(&access_token)?;
                    let destination = router::route_after_login(&role);
                    info!(%role, page = destination.page(), "login accepted");
                    Ok(Some(destination))
                }
                Err(AuthError::MalformedToken(reason)) => {
                    warn!(%reason, "login granted an unusable session token");
                    self.presenter.present(MALFORMED_SESSION_MESSAGE);
                    Ok(None)
                }
                Err(other) => Err(other),
            },
            Ok(LoginReply::Denied(denial)) => {
                info!(status = denial.status, "login rejected");
                self.presenter
                    .present(denial.message(LOGIN_FALLBACK_MESSAGE));
                Ok(None)
            }
            Err(AuthError::Network(err)) => {
                error!(%err, "login request never completed");
                self.presenter.present(NETWORK_FAILURE_MESSAGE);
                Ok(None)
            }
            Err(other) => Err(other),
        }
    }

    /// Submit registration details. A completed registration always routes
    /// back to the login page with a success confirmation.
    ///
    /// # Errors
    /// `AuthError::SubmissionInFlight` when another submission is pending on
    /// this form.
    pub async fn submit_register(
        &self,
        credentials: RegisterCredentials,
    ) -> Result<Option<Destination>, AuthError> {
        let _guard = self.begin()?;

        match self.client.register(&credentials).await {
            Ok(RegisterReply::Completed) => {
                info!("registration completed");
                self.presenter.present(REGISTER_SUCCESS_MESSAGE);
                Ok(Some(router::route_after_register()))
            }
            Ok(RegisterReply::Denied(denial)) => {
                info!(status = denial.status, "registration rejected");
                self.presenter
                    .present(denial.message(REGISTER_FALLBACK_MESSAGE));
                Ok(None)
            }
            Err(AuthError::Network(err)) => {
                error!(%err, "registration request never completed");
                self.presenter.present(NETWORK_FAILURE_MESSAGE);
                Ok(None)
            }
            Err(other) => Err(other),
        }
    }

    /// Enter the submitting state; rejects re-entrant submissions until the
    /// in-flight request resolves.
    fn begin(&self) -> Result<InFlightGuard<'_>, AuthError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AuthError::SubmissionInFlight);
        }
        Ok(InFlightGuard(&self.in_flight))
    }
}

/// Clears the submitting state on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
