//! Error taxonomy for the authentication flow. Rejected credentials are not
//! errors, they are the `Denied` branch of a normalized reply; everything
//! here is a failure of the flow itself.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The request never completed, no response was received.
    #[error("unable to reach the authentication service: {0}")]
    Network(#[source] reqwest::Error),

    /// The service accepted the request but the body was not what the
    /// contract promises.
    #[error("unexpected response from the authentication service: {0}")]
    Response(String),

    /// The session token violates the three-segment compact format or its
    /// claims segment is unusable.
    #[error("malformed session token: {0}")]
    MalformedToken(String),

    /// A submission arrived while another one was pending on the same form.
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("session store: {0}")]
    Session(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
