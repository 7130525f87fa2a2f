use crate::auth::{
    client::AuthClient, form::FormController, presenter::ConsolePresenter,
    session::FileSessionStore, types::LoginCredentials,
};
use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Result};

/// Handle the login action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let Action::Login { username, password } = action else {
        return Err(anyhow!("expected a login action"));
    };

    let client = AuthClient::new(&globals.api_url)?;
    let store = FileSessionStore::new(&globals.session_file);
    let presenter = ConsolePresenter;
    let controller = FormController::new(client, &store, &presenter);

    let credentials = LoginCredentials { username, password };

    if let Some(destination) = controller.submit_login(credentials).await? {
        println!("{}", destination.page());
    }

    Ok(())
}
