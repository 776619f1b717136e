use clap::{Parser, Subcommand};
use std::path::PathBuf;
use voucher_service::application::dto::OutputFormat;

/// Create vouchers and apply them to purchase amounts
#[derive(Parser, Debug)]
#[command(name = "voucher-service")]
#[command(version)]
#[command(about = "Create discount vouchers and apply them to purchase amounts", long_about = None)]
pub struct Args {
    /// Path to the JSON voucher store (defaults to config store_path, then vouchers.json)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// Path to a config file (defaults to voucher-service.config.yml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new voucher with a percentage discount
    Create {
        /// Voucher code, used exactly as given
        code: String,
        /// Discount in percent, 0 to 100
        #[arg(allow_negative_numbers = true)]
        discount: i64,
    },
    /// Apply a voucher to a purchase amount
    Apply {
        /// Voucher code
        code: String,
        /// Purchase amount
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
