//! CLI configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

/// Makercart CLI configuration
#[derive(Debug, Parser)]
#[command(name = "makercart", about = "Inspect and edit the locally stored cart", long_about = None)]
pub struct CliConfig {
    /// Cart storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding the stored cart
    #[arg(long, env = "MAKERCART_STORAGE_DIR", default_value = ".makercart")]
    pub storage_dir: PathBuf,

    /// ISO 4217 code prices are shown in
    #[arg(long, env = "MAKERCART_CURRENCY", default_value = "GBP")]
    pub currency: String,
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Cart operations.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a service to the cart, or add to its quantity
    Add {
        /// Service identifier
        #[arg(long)]
        service_id: String,

        /// Maker identifier
        #[arg(long)]
        maker_id: String,

        /// Service display name
        #[arg(long)]
        service_name: String,

        /// Maker display name
        #[arg(long)]
        maker_name: String,

        /// Unit price
        #[arg(long)]
        price: Decimal,

        /// Number of units
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Remove a service from the cart
    Remove {
        /// Service identifier
        #[arg(long)]
        service_id: String,

        /// Maker identifier
        #[arg(long)]
        maker_id: String,
    },

    /// Set the quantity of a service; zero or below removes it
    Update {
        /// Service identifier
        #[arg(long)]
        service_id: String,

        /// Maker identifier
        #[arg(long)]
        maker_id: String,

        /// New quantity
        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Empty the cart
    Clear,

    /// Print the cart
    Show,
}
