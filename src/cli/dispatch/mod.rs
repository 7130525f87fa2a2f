use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use std::path::PathBuf;

/// Turn parsed arguments into an action plus the shared configuration.
pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let globals = GlobalArgs::new(
        matches
            .get_one::<String>("api-url")
            .map(String::to_string)
            .ok_or_else(|| anyhow!("missing required argument: --api-url"))?,
        matches
            .get_one::<String>("session-file")
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("missing required argument: --session-file"))?,
    );

    let sub_m = |subcommand: &str| -> Result<&clap::ArgMatches> {
        matches
            .subcommand_matches(subcommand)
            .context("arguments not found")
    };

    let field = |sub: &clap::ArgMatches, name: &str| -> Result<String> {
        sub.get_one::<String>(name)
            .map(String::to_string)
            .ok_or_else(|| anyhow!("missing required argument: --{name}"))
    };

    let action = match matches.subcommand_name() {
        Some("login") => {
            let sub = sub_m("login")?;
            Action::Login {
                username: field(sub, "username")?,
                password: SecretString::from(field(sub, "password")?),
            }
        }
        Some("register") => {
            let sub = sub_m("register")?;
            Action::Register {
                username: field(sub, "username")?,
                email: field(sub, "email")?,
                password: SecretString::from(field(sub, "password")?),
            }
        }
        _ => return Err(anyhow!("no subcommand provided")),
    };

    Ok((action, globals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn handler_builds_login_action() -> Result<()> {
        let matches = commands::new().get_matches_from(vec![
            "raza-auth",
            "--api-url",
            "http://auth.raza.test",
            "login",
            "--username",
            "u1",
            "--password",
            "p1",
        ]);

        let (action, globals) = handler(&matches)?;
        assert_eq!(globals.api_url, "http://auth.raza.test");
        assert_eq!(globals.session_file, PathBuf::from(".raza/session"));

        match action {
            Action::Login { username, password } => {
                assert_eq!(username, "u1");
                assert_eq!(password.expose_secret(), "p1");
            }
            Action::Register { .. } => panic!("expected a login action"),
        }
        Ok(())
    }

    #[test]
    fn handler_builds_register_action() -> Result<()> {
        let matches = commands::new().get_matches_from(vec![
            "raza-auth",
            "register",
            "--username",
            "u2",
            "--email",
            "u2@example.com",
            "--password",
            "p2",
        ]);

        let (action, _globals) = handler(&matches)?;
        match action {
            Action::Register {
                username,
                email,
                password,
            } => {
                assert_eq!(username, "u2");
                assert_eq!(email, "u2@example.com");
                assert_eq!(password.expose_secret(), "p2");
            }
            Action::Login { .. } => panic!("expected a register action"),
        }
        Ok(())
    }
}
