use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geoselect
#[derive(Debug, Parser)]
#[command(
    name = "geoselect",
    version,
    about = "Pick a country, state and city from lookup tables and remember the choice"
)]
pub struct CliArgs {
    /// Directory or http(s) URL holding countries.json, states.json and cities.json
    /// (default: the sample data bundled with geoselect-core)
    #[arg(short = 'd', long = "data", global = true)]
    pub data: Option<String>,

    /// File that persists the selection between runs (default: ./selection.json)
    #[arg(short = 's', long = "store", global = true)]
    pub store: Option<PathBuf>,

    /// Page query string or URL used for restore, e.g. "country=US&state=CA"
    #[arg(short = 'q', long = "query", global = true)]
    pub query: Option<String>,

    /// Increase log output (-v, -vv); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the lookup data, restore the previous selection and print it
    Show,

    /// Change the selection; values may be codes or names (case/accents ignored)
    Select {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },

    /// Forget the saved selection
    Clear,

    /// Re-fetch all lookup data and restore again
    Reload,

    /// List all countries
    Countries,

    /// List the states of a country
    States {
        /// Country code or name
        country: String,
    },

    /// List the cities of a state
    Cities {
        /// State code
        state: String,
    },

    /// Show how many entries each lookup table holds
    Stats,
}
