use std::fs::OpenOptions;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod constants;
mod domain;
mod flow;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    client::{BridgeGateway, WalletGateway},
    state::{App, AppConfig, ConfigOverrides, platform::AppPaths},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter.
const LOG_ENV: &str = "GALAXY_SWAP_LOG";
const DEFAULT_LOG_FILTER: &str = "galaxy_swap=info";

const LOGO: &str = r#"
  ____       _                    ____
 / ___| __ _| | __ ___  ___   _  / ___|_      ____ _ _ __
| |  _ / _` | |/ _` \ \/ / | | | \___ \ \ /\ / / _` | '_ \
| |_| | (_| | | (_| |>  <| |_| |  ___) \ V  V / (_| | |_) |
 \____|\__,_|_|\__,_/_/\_\\__, | |____/ \_/\_/ \__,_| .__/
                          |___/                     |_|
"#;

/// galaxy-swap - Terminal frontend for the Galaxy Early Investors ICP swap
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wallet bridge URL
    #[arg(long = "bridge", value_name = "URL")]
    bridge: Option<String>,

    /// Start without a wallet, as if none were installed
    #[arg(long)]
    no_wallet: bool,

    /// Invite code sent with the swap
    #[arg(long = "invite", value_name = "CODE")]
    invite: Option<String>,

    /// Initial spend amount in whole ICP
    #[arg(long = "amount", value_name = "ICP")]
    amount: Option<u64>,

    /// Swap backend canister id
    #[arg(long = "backend", value_name = "ID")]
    backend: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
    /// Print the config file path and the effective configuration
    Config,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bridge_url: self.bridge.clone(),
            no_wallet: self.no_wallet,
            invite_code: self.invite.clone(),
            spend_amount: self.amount,
            backend: self.backend.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        return handle_cli_command(command, &cli);
    }

    init_logging()?;
    let config = load_config(&cli)?;

    let gateway = connect_gateway(&config);
    let mut app = App::new(&config, gateway)?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

fn handle_cli_command(command: &Commands, cli: &Cli) -> Result<()> {
    match command {
        Commands::Version => {
            println!("{LOGO}");
            println!("galaxy-swap v{VERSION}");
            println!("Terminal frontend for the Galaxy Early Investors ICP swap");
        }
        Commands::Config => {
            println!("{}", AppConfig::config_path()?.display());
            println!("{}", serde_json::to_string_pretty(&load_config(cli)?)?);
        }
    }
    Ok(())
}

/// Config file layered with the command line. A broken file stops startup.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    Ok(AppConfig::try_load()?.with_overrides(&cli.overrides()))
}

/// Sends tracing output to the log file; the terminal belongs to the UI.
fn init_logging() -> Result<()> {
    let path = AppPaths::new().log_file()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("cannot open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}

/// Builds the wallet bridge client. `None` stands for "no wallet installed".
fn connect_gateway(config: &AppConfig) -> Option<Arc<dyn WalletGateway>> {
    let url = config.bridge_url.as_deref()?;
    match BridgeGateway::new(url, config.http_config()) {
        Ok(gateway) => {
            tracing::info!("using wallet bridge at {}", gateway.base_url());
            Some(Arc::new(gateway))
        }
        Err(err) => {
            tracing::warn!("wallet bridge unusable: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "galaxy-swap",
            "--bridge",
            "http://localhost:9000",
            "--invite",
            "FRIENDS",
            "--amount",
            "42",
            "--backend",
            "ryjl3-tyaaa-aaaaa-aaaba-cai",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.bridge_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(overrides.invite_code.as_deref(), Some("FRIENDS"));
        assert_eq!(overrides.spend_amount, Some(42));
        assert!(!overrides.no_wallet);
        assert!(cli.command.is_none());
    }

    #[rstest]
    #[case("version")]
    #[case("config")]
    fn test_cli_subcommands(#[case] name: &str) {
        let cli = Cli::parse_from(["galaxy-swap", name]);
        assert!(cli.command.is_some());
    }

    #[test]
    fn test_no_wallet_skips_gateway() {
        let config = AppConfig::default().with_overrides(&ConfigOverrides {
            no_wallet: true,
            ..ConfigOverrides::default()
        });
        assert!(connect_gateway(&config).is_none());
    }

    #[test]
    fn test_default_bridge_builds_gateway() {
        assert!(connect_gateway(&AppConfig::default()).is_some());
    }
}
