use anyhow::Result;
use raza_auth::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    match action {
        Action::Login { .. } => actions::login::handle(action, &globals).await?,
        Action::Register { .. } => actions::register::handle(action, &globals).await?,
    }

    Ok(())
}
