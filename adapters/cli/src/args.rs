use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments of the habitat predictor.
///
/// Every location flag is optional; whatever is not supplied up front is
/// asked for interactively.
#[derive(Debug, Parser)]
#[command(name = "shark-habitat")]
#[command(about = "Predict shark habitat suitability and six-month migration heading")]
pub(crate) struct Args {
    /// Seed for the simulated environment. A fresh seed is drawn when omitted.
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// TOML file overriding the simulation configuration.
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// TOML file with `[[species]]` entries merged over the built-in catalog.
    #[arg(long, value_name = "PATH")]
    pub(crate) species_file: Option<PathBuf>,

    /// Species to analyse, by exact name or by its number in the menu.
    #[arg(long)]
    pub(crate) species: Option<String>,

    /// Current latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) latitude: Option<f64>,

    /// Current longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) longitude: Option<f64>,

    /// Current depth layer index (0 is the shallowest).
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) depth: Option<i64>,

    /// Print the numbered species menu with descriptions and exit.
    #[arg(long)]
    pub(crate) list_species: bool,

    /// Print the report as JSON. Prompts are written to stderr instead.
    #[arg(long)]
    pub(crate) json: bool,
}
