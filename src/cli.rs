use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "off-cli",
    version,
    about = "Query Open Food Facts product data from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Country subdomain for localized data (e.g., world, us, fr)
    #[arg(long, global = true)]
    pub country: Option<String>,

    /// Request timeout in milliseconds (default: 10000)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for products by name
    Search {
        /// Search term (e.g., "yogurt", "granola bar")
        query: String,

        /// Max number of results to print (default: 10)
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Look up a single product by barcode
    Product {
        /// EAN-13/UPC barcode digits
        barcode: String,
    },
}
