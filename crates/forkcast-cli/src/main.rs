mod search;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "forkcast")]
#[command(about = "Restaurant discovery command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find restaurant picks around an address.
    Search(search::SearchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search(args)) => search::run_search(args).await,
        None => {
            println!("usage: forkcast search --address <ADDRESS>");
            Ok(ExitCode::SUCCESS)
        }
    }
}
