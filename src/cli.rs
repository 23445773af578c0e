//! Command-line interface definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "atlascope",
    about = "Country catalog explorer with favorites sync",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List countries, optionally filtered.
    List {
        /// Case-insensitive substring match on the country name.
        #[arg(long, default_value = "")]
        query: String,
        /// Exact region, e.g. "Europe".
        #[arg(long, default_value = "")]
        region: String,
        /// Exact language name, e.g. "French".
        #[arg(long, default_value = "")]
        language: String,
    },
    /// Show one country by its alpha-3 code.
    Show { code: String },
    /// List every language across the catalog.
    Languages,
    /// Create an account and start a session.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and persist the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session and favorites.
    Logout,
    /// Print the logged-in user.
    Whoami,
    /// Manage favorite countries.
    #[command(subcommand)]
    Fav(FavCommand),
    /// Watch session storage and keep favorites in sync.
    Watch,
}

#[derive(Debug, Subcommand)]
pub enum FavCommand {
    /// List favorite countries.
    List,
    /// Add a country by its alpha-3 code.
    Add { code: String },
    /// Remove a country by its alpha-3 code.
    Remove { code: String },
}
