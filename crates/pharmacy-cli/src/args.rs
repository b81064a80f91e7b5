use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use pharmacy_core::StorageKey;

#[derive(Parser, Debug)]
#[command(name = "pharmacy")]
#[command(about = "Manage a local pharmacy inventory: medicines, suppliers and sales", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database file (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true, hide = true)]
    pub today: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the sample dataset into any empty collection
    Seed,

    /// List a collection
    #[command(alias = "ls")]
    List {
        /// medicines, suppliers or sales
        kind: StorageKey,

        /// Case-insensitive search term
        #[arg(short, long)]
        search: Option<String>,

        /// Fields to search (defaults to every field)
        #[arg(short, long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Field to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show inventory and sales statistics
    Stats,

    /// List sales between two dates, inclusive
    SalesRange {
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Validate and add a medicine
    AddMedicine(MedicineArgs),

    /// Validate and add a supplier
    AddSupplier(SupplierArgs),

    /// Sell a medicine, taking stock and price from the inventory
    Sell {
        /// Medicine code (e.g. ASP-001)
        code: String,
        quantity: i64,
        customer: String,
    },

    /// Delete records by their 1-based position in `list`
    #[command(alias = "rm")]
    Delete {
        kind: StorageKey,
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Delete a whole collection
    Clear {
        kind: StorageKey,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export a collection as pretty-printed JSON
    ExportJson {
        kind: StorageKey,

        /// Output directory (defaults to the configured export dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Export a collection as CSV
    ExportCsv {
        kind: StorageKey,

        /// Output directory (defaults to the configured export dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// File name
        #[arg(long)]
        filename: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct MedicineArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub code: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,
    #[arg(long, default_value_t = 0)]
    pub min_stock: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,
    #[arg(long)]
    pub expiry: NaiveDate,
    /// Only validate, do not save
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct SupplierArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub contact_person: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub address: String,
    /// Only validate, do not save
    #[arg(long)]
    pub dry_run: bool,
}
