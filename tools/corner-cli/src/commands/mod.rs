//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Print products matching a search query and exit.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print the product list and exit.
    #[arg(short, long)]
    pub list: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents.
    Show,
    /// Add a product from the catalog by name.
    Add {
        /// Product name (case-insensitive).
        name: String,

        /// Units to add.
        #[arg(short, long, default_value = "1")]
        quantity: i64,
    },
    /// Adjust a line's quantity by a signed delta.
    Qty {
        /// Line index as shown by `corner cart show`.
        index: usize,

        /// Signed change, e.g. 2 or -1.
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove a line.
    Remove {
        /// Line index as shown by `corner cart show`.
        index: usize,
    },
    /// Remove every line.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Skip the final confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the profile directory holding the persisted cart.
    Path,
}
