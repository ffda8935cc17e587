//! CLI for the MDM media reference decoder.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mdm_core::config;

use commands::{run_decode, run_target};

/// Top-level CLI for the MDM media reference decoder.
#[derive(Debug, Parser)]
#[command(name = "mdm")]
#[command(about = "MDM: media reference decoder and transfer dispatcher", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decode a file id and print its fields.
    Decode {
        /// The opaque file id string.
        file_id: String,
    },

    /// Show where a download of this file id would be saved.
    Target {
        /// The opaque file id string.
        file_id: String,

        /// Destination path; trailing slash means directory only.
        #[arg(long)]
        file_name: Option<String>,

        /// MIME type reported for the media, used for extension guessing.
        #[arg(long)]
        mime: Option<String>,

        /// Unix timestamp (seconds) the media was sent.
        #[arg(long)]
        date: Option<i64>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Decode { file_id } => run_decode(&file_id).await?,
            CliCommand::Target {
                file_id,
                file_name,
                mime,
                date,
            } => run_target(&cfg, &file_id, file_name.as_deref(), mime, date).await?,
        }

        Ok(())
    }
}
