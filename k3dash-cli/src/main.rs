use clap::Parser;
use k3dash_cli::commands::{DeployArgs, handle_deploy};
use std::process::ExitCode;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = DeployArgs::parse();

    // setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match handle_deploy(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
