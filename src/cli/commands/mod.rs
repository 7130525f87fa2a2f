use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("raza-auth")
        .about("Client-side authentication bootstrap for the Raza front end")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Base URL of the authentication service")
                .default_value("http://localhost:5000")
                .env("RAZA_API_URL")
                .global(true),
        )
        .arg(
            Arg::new("session-file")
                .long("session-file")
                .help("Path where the session token is persisted")
                .default_value(".raza/session")
                .env("RAZA_SESSION_FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("RAZA_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("login")
                .about("Submit login credentials and print the landing page")
                .arg(
                    Arg::new("username")
                        .short('u')
                        .long("username")
                        .help("Account username")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Account password")
                        .env("RAZA_PASSWORD")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("register")
                .about("Submit registration details")
                .arg(
                    Arg::new("username")
                        .short('u')
                        .long("username")
                        .help("Account username")
                        .required(true),
                )
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Account email address")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Account password")
                        .env("RAZA_PASSWORD")
                        .required(true),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "raza-auth");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Client-side authentication bootstrap for the Raza front end"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_login_arguments() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "raza-auth",
            "--api-url",
            "http://auth.raza.test",
            "--session-file",
            "/tmp/raza-session",
            "login",
            "--username",
            "u1",
            "--password",
            "p1",
        ]);

        assert_eq!(
            matches.get_one::<String>("api-url").map(String::as_str),
            Some("http://auth.raza.test")
        );
        assert_eq!(
            matches
                .get_one::<String>("session-file")
                .map(String::as_str),
            Some("/tmp/raza-session")
        );

        let sub = matches.subcommand_matches("login").unwrap();
        assert_eq!(
            sub.get_one::<String>("username").map(String::as_str),
            Some("u1")
        );
        assert_eq!(
            sub.get_one::<String>("password").map(String::as_str),
            Some("p1")
        );
    }

    #[test]
    fn test_register_arguments() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "raza-auth",
            "register",
            "--username",
            "u2",
            "--email",
            "u2@example.com",
            "--password",
            "p2",
        ]);

        assert_eq!(
            matches.get_one::<String>("api-url").map(String::as_str),
            Some("http://localhost:5000")
        );

        let sub = matches.subcommand_matches("register").unwrap();
        assert_eq!(
            sub.get_one::<String>("username").map(String::as_str),
            Some("u2")
        );
        assert_eq!(
            sub.get_one::<String>("email").map(String::as_str),
            Some("u2@example.com")
        );
    }

    #[test]
    fn test_api_url_from_environment() {
        temp_env::with_var("RAZA_API_URL", Some("http://env.raza.test"), || {
            let matches = new().get_matches_from(vec![
                "raza-auth",
                "login",
                "--username",
                "u1",
                "--password",
                "p1",
            ]);
            assert_eq!(
                matches.get_one::<String>("api-url").map(String::as_str),
                Some("http://env.raza.test")
            );
        });
    }
}
