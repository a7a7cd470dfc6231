#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs the shark habitat prediction.

mod args;
mod prompt;
mod report;
mod settings;

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shark_habitat_core::{
    validate_latitude, validate_longitude, Command, DepthLayer, Event, GeoPoint, SimulationConfig,
    SpeciesCatalog,
};
use shark_habitat_system_environment::EnvironmentGeneration;
use shark_habitat_system_migration::{aggregate, GridMapping};
use shark_habitat_system_suitability::score;
use shark_habitat_world::{self as world, query, World};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{args::Args, prompt::Console, report::HabitatReport};

/// Entry point for the shark habitat command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = settings::load_config(args.config.as_deref())?;
    let mut catalog = SpeciesCatalog::builtin();
    if let Some(path) = args.species_file.as_deref() {
        catalog.merge(settings::load_species(path)?);
    }

    if args.list_species {
        let mut stdout = io::stdout().lock();
        report::write_catalog(&mut stdout, &catalog)?;
        return Ok(());
    }

    if args.json {
        let mut console = Console::new(io::stdin().lock(), io::stderr().lock());
        let report = run(&args, config, catalog, &mut console)?;
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
    } else {
        let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
        let report = run(&args, config, catalog, &mut console)?;
        writeln!(console.output(), "{report}")?;
    }
    Ok(())
}

/// Runs one prediction: generate the environment, gather the inputs, score, and aggregate.
fn run<R: BufRead, W: Write>(
    args: &Args,
    config: SimulationConfig,
    catalog: SpeciesCatalog,
    console: &mut Console<R, W>,
) -> Result<HabitatReport> {
    let mut world = World::new(config, catalog).context("invalid simulation configuration")?;
    let dimensions = query::dimensions(&world);
    let span_degrees = query::config(&world).grid.span_degrees;
    let step_degrees = query::config(&world).migration.step_degrees;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, %dimensions, "generating environment");
    let generation = EnvironmentGeneration::new(dimensions, &query::config(&world).environment)?;
    let environment = generation.generate(&mut ChaCha8Rng::seed_from_u64(seed));

    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::InstallEnvironment { environment },
        &mut events,
    );
    ensure_applied(&events)?;

    report::write_banner(console.output(), span_degrees)?;

    let name = match args.species.as_deref() {
        Some(value) => prompt::species_from_flag(query::catalog(&world), value)
            .context("invalid --species")?
            .name()
            .to_owned(),
        None => console.choose_species(query::catalog(&world))?.name().to_owned(),
    };
    world::apply(&mut world, Command::SelectSpecies { name }, &mut events);
    ensure_applied(&events)?;

    let latitude = match args.latitude {
        Some(value) => validate_latitude(value).context("invalid --latitude")?,
        None => console.latitude()?,
    };
    let longitude = match args.longitude {
        Some(value) => validate_longitude(value).context("invalid --longitude")?,
        None => console.longitude()?,
    };
    let layer = match args.depth {
        Some(value) => {
            DepthLayer::checked(value, dimensions.depth_layers()).context("invalid --depth")?
        }
        None => console.depth(dimensions.depth_layers())?,
    };
    let position = GeoPoint::new(latitude, longitude)?;
    world::apply(&mut world, Command::PlaceShark { position, layer }, &mut events);
    ensure_applied(&events)?;

    let session = query::session(&world).context("prediction session is incomplete")?;
    writeln!(
        console.output(),
        "\nAnalyzing conditions for the {} at: ({:.4}°, {:.4}°)...",
        session.profile.name(),
        position.latitude(),
        position.longitude()
    )?;

    let scores = score(session.profile, session.environment);
    let vector = aggregate(&scores, &query::config(&world).migration);
    let mapping = GridMapping::new(position, dimensions, span_degrees);
    let report = HabitatReport::new(seed, &session, &vector, &mapping, step_degrees);

    info!(
        species = session.profile.name(),
        direction = %report.direction(),
        average = vector.sector_average(),
        destination_latitude = report.destination().latitude(),
        destination_longitude = report.destination().longitude(),
        "migration predicted"
    );
    Ok(report)
}

fn ensure_applied(events: &[Event]) -> Result<()> {
    match events.last() {
        Some(Event::EnvironmentRejected { reason }) => bail!("environment rejected: {reason}"),
        Some(Event::SpeciesRejected { name, reason }) => {
            bail!("species `{name}` rejected: {reason}")
        }
        Some(Event::PlacementRejected { reason }) => bail!("placement rejected: {reason}"),
        _ => Ok(()),
    }
}
