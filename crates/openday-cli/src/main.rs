use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod forms;

#[derive(Parser)]
#[command(name = "openday", version, about = "Open Day site backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
    /// Fill in the vibe survey from the terminal and submit it.
    Survey {
        /// Base URL of a running server.
        #[arg(long, env = "OPENDAY_URL", default_value = "http://localhost:3000")]
        endpoint: String,
    },
    /// Register for Open Day from the terminal.
    Register {
        /// Base URL of a running server.
        #[arg(long, env = "OPENDAY_URL", default_value = "http://localhost:3000")]
        endpoint: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    tracing::info!("openday v{}", env!("CARGO_PKG_VERSION"));

    match Cli::parse().command {
        Command::Serve => {
            openday_server::start_server().await;
            Ok(())
        }
        Command::Survey { endpoint } => forms::run_survey(&endpoint).await,
        Command::Register { endpoint } => forms::run_registration(&endpoint).await,
    }
}
