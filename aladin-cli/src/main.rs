//! ALADIN CLI - discover published forecast runs and build image URLs.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aladin-cli",
    version,
    about = "ALADIN forecast image toolkit"
)]
struct Cli {
    #[command(flatten)]
    server: aladin_cmd::ServerArgs,

    #[command(subcommand)]
    command: aladin_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    aladin_cmd::run(cli.command, cli.server).await
}
