//! recap - Meeting video transcription and notes extraction
//!
//! Entry point for the recap CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recap::cli::{Cli, Commands};
use recap::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            recap::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            // Execute command
            match command {
                Commands::Run {
                    video,
                    title,
                    translate,
                    out_dir,
                } => {
                    recap::cli::commands::run_pipeline(&settings, &video, title, translate, out_dir)
                        .await?;
                }
                Commands::Extract { video, output } => {
                    recap::cli::commands::extract_audio(&settings, &video, output).await?;
                }
                Commands::Transcribe {
                    audio,
                    output,
                    format,
                } => {
                    recap::cli::commands::transcribe_audio(&settings, &audio, output, &format)
                        .await?;
                }
                Commands::Summarize {
                    transcript,
                    output,
                    translate,
                } => {
                    recap::cli::commands::summarize_transcript(
                        &settings,
                        &transcript,
                        output,
                        translate,
                    )
                    .await?;
                }
                Commands::Doctor { json } => {
                    recap::cli::commands::run_doctor(&settings, json).await?;
                }
                Commands::Config(config_cmd) => {
                    recap::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
