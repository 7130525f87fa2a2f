use crate::auth::{
    client::AuthClient, form::FormController, presenter::ConsolePresenter,
    session::FileSessionStore, types::RegisterCredentials,
};
use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Result};

/// Handle the register action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let Action::Register {
        username,
        email,
        password,
    } = action
    else {
        return Err(anyhow!("expected a register action"));
    };

    let client = AuthClient::new(&globals.api_url)?;
    let store = FileSessionStore::new(&globals.session_file);
    let presenter = ConsolePresenter;
    let controller = FormController::new(client, &store, &presenter);

    let credentials = RegisterCredentials {
        username,
        email,
        password,
    };

    if let Some(destination) = controller.submit_register(credentials).await? {
        println!("{}", destination.page());
    }

    Ok(())
}
