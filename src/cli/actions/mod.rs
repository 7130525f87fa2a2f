pub mod login;
pub mod register;

use secrecy::SecretString;

/// User-initiated submissions the CLI can drive.
#[derive(Debug)]
pub enum Action {
    Login {
        username: String,
        password: SecretString,
    },
    Register {
        username: String,
        email: String,
        password: SecretString,
    },
}
