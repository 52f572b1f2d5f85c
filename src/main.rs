use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use loginflow::config::Config;
use loginflow::host::{self, HostEvent, Services};
use loginflow::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "loginflow", version, about = "Drive the login and home screens against in-memory services")]
struct Cli {
    /// Config file (default: ~/.config/loginflow/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit the login form once
    Login {
        #[arg(long)]
        id: String,
        #[arg(long)]
        password: String,
    },
    /// Open the home screen without logging in
    Home,
    /// Log in with the configured account, then open home and log out
    Flow,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    init_tracing(&config.logging);

    let services = Services::in_memory(&config.demo);
    let events = match cli.command.unwrap_or(Command::Flow) {
        Command::Login { id, password } => host::run_login(&services, &id, &password).await,
        Command::Home => host::run_home(&services).await,
        Command::Flow => {
            let account = &config.demo.account;
            host::run_flow(&services, &account.id, &account.password).await
        }
    };

    print_events(&events);
    Ok(())
}

fn print_events(events: &[HostEvent]) {
    for event in events {
        println!("{event}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn login_requires_credentials() {
        assert!(Cli::try_parse_from(["loginflow", "login", "--id", "koher"]).is_err());
    }

    #[test]
    fn command_defaults_to_none() {
        let cli = Cli::try_parse_from(["loginflow"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }
}
