//! Authentication bootstrap for the Raza front end: credential submission,
//! session token handling, role-based routing and failure surfacing.

pub mod client;
pub mod error;
pub mod form;
pub mod presenter;
pub mod router;
pub mod session;
pub mod token;
pub mod types;

pub use client::AuthClient;
pub use error::AuthError;
pub use form::FormController;
pub use router::Destination;

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
