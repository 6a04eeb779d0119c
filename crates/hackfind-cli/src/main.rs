use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod find;
mod resolve;

#[derive(Debug, Parser)]
#[command(name = "hackfind")]
#[command(about = "Find nearby hackathons for a coordinate")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a full session for one coordinate and print found events.
    Find(find::FindArgs),
    /// Reverse-geocode a coordinate and print its place label.
    Resolve(resolve::ResolveArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = hackfind_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Find(args) => find::run(args, &config).await,
        Commands::Resolve(args) => resolve::run(args, &config).await,
    }
}
