use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod collect;

#[derive(Debug, Parser)]
#[command(name = "metrocollect")]
#[command(about = "Metro trade-center product snapshot collector")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect products for every target-city store and dump the snapshot
    Collect,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = metrocollect_core::load_app_config()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        // `collect` is the only command and the default when none is given.
        Some(Commands::Collect) | None => {
            tracing::info!("collecting product data");
            let data = collect::run(&config).await;

            tracing::info!(stores = data.len(), "dumping collected products data");
            collect::dump(&config.output_path, &data).await?;
        }
    }

    Ok(())
}
