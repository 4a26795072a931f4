mod cli;
mod commands;

use airwise_assistant::Assistant;
use airwise_core::Config;
use airwise_feed::Session;
use clap::Parser;
use cli::{Cli, Commands};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let session = || Arc::new(Session::synthetic());

    match cli.command {
        Commands::Status => commands::status::run(&session()),
        Commands::Forecast => commands::forecast::run(&session()),
        Commands::BestHours { count } => commands::forecast::run_best_hours(&session(), count),
        Commands::History => commands::history::run(&session()),
        Commands::Classify { aqi } => commands::classify::run(aqi),
        Commands::Ask { text } => {
            let assistant = Assistant::new(session(), config.assistant);
            commands::chat::run_ask(&assistant, &text.join(" ")).await
        }
        Commands::Chat => {
            let assistant = Assistant::new(session(), config.assistant);
            commands::chat::run_chat(&assistant).await
        }
        Commands::Version => commands::version::run(),
    }
}
