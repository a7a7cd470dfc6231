//! Loading of the optional configuration and species files.

use std::{collections::HashSet, fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use shark_habitat_core::{SimulationConfig, SpeciesCatalog, SpeciesProfile};
use tracing::info;

/// Loads the simulation configuration, falling back to the defaults when no path is given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<SimulationConfig> {
    let Some(path) = path else {
        info!("using default simulation configuration");
        return Ok(SimulationConfig::default());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration at {}", path.display()))?;
    let config = parse_config(&contents)
        .with_context(|| format!("invalid configuration in {}", path.display()))?;
    info!(path = %path.display(), "loaded simulation configuration");
    Ok(config)
}

fn parse_config(contents: &str) -> Result<SimulationConfig> {
    let config: SimulationConfig =
        toml::from_str(contents).context("failed to parse configuration toml contents")?;
    let _ = config.validate()?;
    Ok(config)
}

/// Loads additional species profiles from a `[[species]]` TOML file.
pub(crate) fn load_species(path: &Path) -> Result<SpeciesCatalog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read species file at {}", path.display()))?;
    let catalog = parse_species(&contents)
        .with_context(|| format!("invalid species file {}", path.display()))?;
    info!(path = %path.display(), species = catalog.len(), "loaded species profiles");
    Ok(catalog)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpeciesFile {
    #[serde(default)]
    species: Vec<SpeciesEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpeciesEntry {
    name: String,
    #[serde(default)]
    description: String,
    depth_preference: Vec<f64>,
    coastal: f64,
    plankton: f64,
    eddy: f64,
}

fn parse_species(contents: &str) -> Result<SpeciesCatalog> {
    let file: SpeciesFile =
        toml::from_str(contents).context("failed to parse species toml contents")?;

    let mut seen = HashSet::new();
    let mut profiles = Vec::with_capacity(file.species.len());
    for entry in file.species {
        if !seen.insert(entry.name.clone()) {
            bail!("species file contains duplicate entry for `{}`", entry.name);
        }
        let name = entry.name.clone();
        let profile = SpeciesProfile::new(
            entry.name,
            entry.description,
            entry.depth_preference,
            entry.coastal,
            entry.plankton,
            entry.eddy,
        )
        .with_context(|| format!("invalid profile for `{name}`"))?;
        profiles.push(profile);
    }

    Ok(SpeciesCatalog::from_profiles(profiles))
}
