use std::env;
use std::error::Error;

use clap::{Parser, Subcommand};
use colored::Colorize;

use dwapi::cli::auth::{AuthProfile, AuthSubCommand};
use dwapi::cli::base::Matcher;
use dwapi::cli::dataset::DatasetSubCommand;
use dwapi::cli::file::FileSubCommand;
use dwapi::cli::project::ProjectSubCommand;
use dwapi::cli::query::QuerySubCommand;
use dwapi::cli::stream::StreamSubCommand;
use dwapi::cli::user::UserSubCommand;
use dwapi::cli::webhook::WebhookSubCommand;
use dwapi::client::Client;
use dwapi::config::ClientConfig;

static HEADER: &str = r#"
--- data.world Command Line Interface (DWCLI) ---
"#;

/// Environment variable that bypasses the keyring entirely.
static TOKEN_VAR: &str = "DW_AUTH_TOKEN";

#[derive(Parser, Debug)]
#[command(about = "CLI to interact with data.world", version)]
struct Cli {
    /// Profile name holding the stored credentials to use
    #[arg(short, long, default_value = "default")]
    profile: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Handle authentication of the data.world CLI
    #[command(subcommand)]
    Auth(AuthSubCommand),

    /// Handle datasets
    #[command(subcommand)]
    Dataset(DatasetSubCommand),

    /// Handle projects
    #[command(subcommand)]
    Project(ProjectSubCommand),

    /// Handle files within a dataset
    #[command(subcommand)]
    File(FileSubCommand),

    /// Create and run queries
    #[command(subcommand)]
    Query(QuerySubCommand),

    /// Handle append-only streams
    #[command(subcommand)]
    Stream(StreamSubCommand),

    /// User profiles and their resources
    #[command(subcommand)]
    User(UserSubCommand),

    /// Handle webhook subscriptions
    #[command(subcommand)]
    Webhook(WebhookSubCommand),
}

fn main() {
    let cli = Cli::parse();

    // Auth commands only touch the keyring, so they run without
    // credentials and without a usable client.
    if let Command::Auth(cmd) = cli.cmd {
        let client = Client::new("unused").expect("Failed to create client");
        cmd.process(&client);
        return;
    }

    let client = match build_client(&cli.profile) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("\n{} {}\n", "Error:".red().bold(), e);
            eprintln!(
                "Store a token with {} or set the {} environment variable.",
                "dwcli auth set --token <TOKEN>".bold(),
                TOKEN_VAR.bold()
            );
            std::process::exit(exitcode::CONFIG);
        }
    };

    if atty::is(atty::Stream::Stdout) {
        println!("{}", HEADER.bold());
    }

    match cli.cmd {
        Command::Auth(command) => command.process(&client),
        Command::Dataset(command) => command.process(&client),
        Command::Project(command) => command.process(&client),
        Command::File(command) => command.process(&client),
        Command::Query(command) => command.process(&client),
        Command::Stream(command) => command.process(&client),
        Command::User(command) => command.process(&client),
        Command::Webhook(command) => command.process(&client),
    }
}

/// Builds the API client from the environment or the named profile.
///
/// `DW_AUTH_TOKEN` wins over the keyring so scripts and CI can run
/// without one. A host stored in the profile fills in only when the
/// environment names none.
fn build_client(profile: &str) -> Result<Client, Box<dyn Error>> {
    if let Some(token) = env::var(TOKEN_VAR).ok().filter(|token| !token.is_empty()) {
        return Ok(Client::new(&token)?);
    }

    let auth = AuthProfile::get_from_keyring(profile)?;
    let mut config = ClientConfig::from_env();
    if config.api_host.is_none() {
        config.api_host = auth.get_host().map(String::from);
    }

    Ok(Client::with_config(auth.get_token(), config)?)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_a_dataset_retrieve_command() {
        // Arrange / Act
        let cli = Cli::try_parse_from([
            "dwcli",
            "dataset",
            "retrieve",
            "jonloyens",
            "my-awesome-dataset",
        ])
        .unwrap();

        // Assert
        assert_eq!(cli.profile, "default");
        match cli.cmd {
            Command::Dataset(DatasetSubCommand::Retrieve {
                owner,
                datasetid,
                version,
            }) => {
                assert_eq!(owner, "jonloyens");
                assert_eq!(datasetid, "my-awesome-dataset");
                assert_eq!(version, None);
            }
            other => panic!("parsed into the wrong command: {:?}", other),
        }
    }

    #[test]
    fn test_parses_a_webhook_subscribe_command() {
        // Arrange / Act
        let cli = Cli::try_parse_from([
            "dwcli",
            "--profile",
            "work",
            "webhook",
            "subscribe",
            "--events",
            "ALL",
            "dataset",
            "jonloyens",
            "my-awesome-dataset",
        ])
        .unwrap();

        // Assert
        assert_eq!(cli.profile, "work");
        assert!(matches!(
            cli.cmd,
            Command::Webhook(WebhookSubCommand::Subscribe { .. })
        ));
    }

    #[test]
    fn test_rejects_an_unknown_subcommand() {
        let parsed = Cli::try_parse_from(["dwcli", "frobnicate"]);

        assert!(parsed.is_err());
    }
}
