//! evap-cli - Command line client for the evaporation calculation service.

use clap::Parser;
use evap_cmd::ServiceArgs;

#[derive(Parser)]
#[command(
    name = "evap-cli",
    version,
    about = "Penman evaporation and reservoir storage planning client"
)]
struct Cli {
    #[command(flatten)]
    service: ServiceArgs,

    #[command(subcommand)]
    command: evap_cmd::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    evap_cmd::run(cli.service.config(), cli.command).await
}
