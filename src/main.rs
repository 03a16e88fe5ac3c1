//! ccctl - Main entry point

use clap::Parser;
use log::{debug, error, info};

use ccctl::cc::{run_populate_command, run_users_command};
use ccctl::{CcClient, CcError, Cli, Command, Config, TokenResolver};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ccctl v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the selected command, returning `false` when it completed with failures
async fn run(cli: &Cli) -> ccctl::Result<bool> {
    let host = cli.host.as_deref().ok_or_else(|| {
        CcError::Config("no API host given; use --host or set CC_HOST".to_string())
    })?;
    debug!(
        "CLI args: host={}, output={}, skip_ssl_validation={}",
        host, cli.output, cli.skip_ssl_validation
    );

    let token = TokenResolver::new(host).resolve(cli.token.as_deref())?;

    let config = Config::new(host).skip_verify_ssl(cli.skip_ssl_validation);
    let client = CcClient::new(config)?;

    match &cli.command {
        Command::Users(args) => {
            run_users_command(&client, cli, args, &token).await?;
            Ok(true)
        }
        Command::Populate(args) => run_populate_command(&client, cli, args, &token).await,
    }
}
