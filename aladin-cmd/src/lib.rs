//! Command implementations for the ALADIN CLI.
//!
//! Provides subcommands for discovering the published forecast runs on the
//! image server and for building individual image URLs.

use aladin_core::config::ViewerConfig;
use clap::{Args, Subcommand};

pub mod runs;
pub mod url;

/// Options shared by all subcommands.
#[derive(Args, Clone, Debug, Default)]
pub struct ServerArgs {
    /// JSON config file; flags below override its fields
    #[arg(short = 'c', long, global = true)]
    pub config: Option<String>,

    /// Image server directory (default: ARSO ALADIN field directory)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl ServerArgs {
    /// Resolve the effective configuration.
    pub fn load_config(&self) -> anyhow::Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path, e))?;
                ViewerConfig::from_json(&json)?
            }
            None => ViewerConfig::default(),
        };
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Discover the recently published forecast runs, newest first
    Runs {
        /// Reference date (YYYY-MM-DD, default: today in UTC)
        #[arg(short = 'd', long)]
        date: Option<String>,

        /// Maximum number of runs to collect
        #[arg(short = 'n', long)]
        max_runs: Option<usize>,

        /// Print the runs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the image URL for one frame
    Url {
        /// Run date (YYYYMMDD)
        #[arg(short = 'd', long)]
        date: String,

        /// Run time (0000 or 1200)
        #[arg(short = 't', long, default_value = "0000")]
        time: String,

        /// Lead time in hours (3..72, multiple of 3)
        #[arg(short = 'o', long, default_value_t = 3)]
        offset: u32,

        /// Altitude layer code
        #[arg(short = 'a', long, default_value = "tcc-rr", conflicts_with = "hotspot")]
        altitude: String,

        /// Hotspot region for the 10 m wind layer
        #[arg(long)]
        hotspot: Option<String>,
    },
}

pub async fn run(command: Command, server: ServerArgs) -> anyhow::Result<()> {
    let config = server.load_config()?;
    match command {
        Command::Runs {
            date,
            max_runs,
            json,
        } => runs::run_discovery(&config, date.as_deref(), max_runs, json).await,
        Command::Url {
            date,
            time,
            offset,
            altitude,
            hotspot,
        } => {
            let url = url::frame_url(&config, &date, &time, offset, &altitude, hotspot.as_deref())?;
            println!("{}", url);
            Ok(())
        }
    }
}
