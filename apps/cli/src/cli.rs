//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use catalog_core::{SortKey, MAX_PRICE};

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Manage a product catalog through its REST backend")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config dir's catalog.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding config and CATALOG_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// More log output (-v debug, -vv everything)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List products with optional filters and sorting
    List(ListArgs),

    /// Show one product
    Show {
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add a new product
    Add(AddArgs),

    /// Edit an existing product; omitted fields keep their current value
    Edit(EditArgs),

    /// Delete a product
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Sort order: none, name, or price
    #[arg(long, default_value_t = SortKey::None)]
    pub sort: SortKey,

    /// Only show products with stock above zero
    #[arg(long)]
    pub in_stock: bool,

    /// Lowest price shown (inclusive)
    #[arg(long, default_value_t = 0.0)]
    pub min_price: f64,

    /// Highest price shown (inclusive)
    #[arg(long, default_value_t = MAX_PRICE)]
    pub max_price: f64,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Numbers are taken as text so unparseable input reaches validation.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "0")]
    pub price: String,

    #[arg(long, default_value = "0")]
    pub stock: String,

    /// Featured image URL
    #[arg(long, default_value = "")]
    pub image: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub price: Option<String>,

    #[arg(long)]
    pub stock: Option<String>,

    /// Featured image URL
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
