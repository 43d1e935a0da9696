//! cbot CLI: run the Discord chat bot. Config from env and optional CLI args.

use anyhow::Result;
use clap::{Parser, Subcommand};
use discord_bot::{run_bot, BotConfig};

#[derive(Parser)]
#[command(name = "cbot")]
#[command(about = "Discord AI chat bot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Discord bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
    }
}
