//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// recap - Turn recorded meeting videos into transcripts and meeting notes
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: extract, transcribe, summarize
    Run {
        /// Path to the meeting video file
        video: PathBuf,

        /// Optional title for the meeting
        #[arg(short, long)]
        title: Option<String>,

        /// Also translate the notes into this language (e.g. "German")
        #[arg(long, value_name = "LANG")]
        translate: Option<String>,

        /// Directory for pipeline outputs (defaults to output.dir from config)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Extract the audio track from a video file
    Extract {
        /// Path to the video file
        video: PathBuf,

        /// Output audio path (defaults to the video path with a .wav extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Transcribe an audio file
    Transcribe {
        /// Path to the audio file (WAV)
        audio: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (txt, json, srt)
        #[arg(short, long, default_value = "txt")]
        format: String,
    },

    /// Summarize a transcript file into meeting notes
    Summarize {
        /// Path to the transcript text file
        transcript: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Translate the notes into this language (e.g. "German")
        #[arg(long, value_name = "LANG")]
        translate: Option<String>,
    },

    /// Run diagnostic checks for the local setup
    Doctor {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
