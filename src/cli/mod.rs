use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smarthome-landing")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (defaults to the user config directory)
    #[arg(short, long, global = true, env = "SMARTHOME_LANDING_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the landing page over HTTP
    Serve {
        /// Address to listen on (e.g., 0.0.0.0:8080)
        #[arg(long)]
        addr: Option<String>,

        /// SQLite database file, or :memory:
        #[arg(long, env = "SMARTHOME_LANDING_DB")]
        db: Option<PathBuf>,
    },

    /// Render the landing page to a file or stdout
    Render {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render with the navigation menu expanded
        #[arg(long)]
        menu_open: bool,

        /// Read content from this database instead of the built-in copy
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Print the WhatsApp and email contact links
    Links,

    /// Create the database schema and seed default content
    Init {
        /// SQLite database file
        #[arg(long, env = "SMARTHOME_LANDING_DB")]
        db: Option<PathBuf>,
    },

    /// Show version information
    Version,
}
