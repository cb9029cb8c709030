use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "barber-booking")]
#[command(about = "Appointment book for a small barbershop")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog source (URL or JSON file), overrides the config file
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Directory holding the persisted bookings, overrides the config file
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the services on offer
    Services,

    /// Book an appointment
    Book {
        #[arg(long)]
        name: String,

        /// Service id, as shown by `services`
        #[arg(long)]
        service: String,

        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Time as HH:MM
        #[arg(long)]
        time: String,
    },

    /// Show all bookings with the running total
    List,

    /// Delete one booking by id
    Remove { id: String },

    /// Delete every booking
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the sum of all booking prices
    Total,

    /// Write the bookings as CSV
    Export {
        /// Destination file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(catalog) = &self.catalog {
            tracing::debug!("Catalog source overridden to: {}", catalog);
            config.catalog.source = catalog.clone();
        }
        if let Some(data_dir) = &self.data_dir {
            tracing::debug!("Data directory overridden to: {}", data_dir);
            config.storage.data_dir = data_dir.clone();
        }
    }

    pub fn needs_catalog(&self) -> bool {
        matches!(self.command, Command::Services | Command::Book { .. })
    }
}
