#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state for the shark habitat model.

use shark_habitat_core::{
    Command, ConfigError, DepthLayer, EnvironmentError, EnvironmentGrid, Event, GeoPoint,
    GridDimensions, LocationError, SelectionError, SimulationConfig, SpeciesCatalog,
};
use tracing::{debug, warn};

/// Where the tracked shark currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Global coordinates of the shark.
    pub position: GeoPoint,
    /// Depth layer the shark occupies.
    pub layer: DepthLayer,
}

/// Represents the authoritative state of a single prediction run.
#[derive(Debug)]
pub struct World {
    config: SimulationConfig,
    dimensions: GridDimensions,
    catalog: SpeciesCatalog,
    environment: Option<EnvironmentGrid>,
    species: Option<String>,
    placement: Option<Placement>,
}

impl World {
    /// Creates a world for the provided configuration and species catalog.
    pub fn new(config: SimulationConfig, catalog: SpeciesCatalog) -> Result<Self, ConfigError> {
        let dimensions = config.validate()?;
        Ok(Self {
            config,
            dimensions,
            catalog,
            environment: None,
            species: None,
            placement: None,
        })
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::InstallEnvironment { environment } => {
            let actual = environment.dimensions();
            let rejection = if world.environment.is_some() {
                Some(EnvironmentError::AlreadyInstalled)
            } else if actual != world.dimensions {
                Some(EnvironmentError::ShapeMismatch {
                    expected: world.dimensions,
                    actual,
                })
            } else {
                None
            };

            if let Some(reason) = rejection {
                warn!(%reason, "environment rejected");
                out_events.push(Event::EnvironmentRejected { reason });
                return;
            }

            debug!(dimensions = %actual, "environment installed");
            world.environment = Some(environment);
            out_events.push(Event::EnvironmentInstalled { dimensions: actual });
        }
        Command::SelectSpecies { name } => {
            let expected = world.dimensions.depth_layers();
            let rejection = match world.catalog.get(&name) {
                None => Some(SelectionError::UnknownSpecies),
                Some(profile) if profile.depth_preference().len() != expected => {
                    Some(SelectionError::DepthPreferenceMismatch {
                        expected,
                        actual: profile.depth_preference().len(),
                    })
                }
                Some(_) => None,
            };

            if let Some(reason) = rejection {
                warn!(species = %name, %reason, "species rejected");
                out_events.push(Event::SpeciesRejected { name, reason });
                return;
            }

            debug!(species = %name, "species selected");
            world.species = Some(name.clone());
            out_events.push(Event::SpeciesSelected { name });
        }
        Command::PlaceShark { position, layer } => {
            let layers = world.dimensions.depth_layers();
            if layer.index() >= layers {
                let reason = LocationError::DepthOutOfRange {
                    index: i64::try_from(layer.index()).unwrap_or(i64::MAX),
                    layers,
                };
                warn!(%reason, "placement rejected");
                out_events.push(Event::PlacementRejected { reason });
                return;
            }

            debug!(
                latitude = position.latitude(),
                longitude = position.longitude(),
                layer = layer.index(),
                "shark placed"
            );
            world.placement = Some(Placement { position, layer });
            out_events.push(Event::SharkPlaced { position, layer });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{Placement, World};
    use shark_habitat_core::{
        CellIndex, EnvironmentGrid, EnvironmentSample, GridDimensions, SimulationConfig,
        SpeciesCatalog, SpeciesProfile,
    };

    /// Provides read-only access to the validated configuration.
    #[must_use]
    pub fn config(world: &World) -> &SimulationConfig {
        &world.config
    }

    /// Shape of the simulated grid.
    #[must_use]
    pub fn dimensions(world: &World) -> GridDimensions {
        world.dimensions
    }

    /// Provides read-only access to the species catalog.
    #[must_use]
    pub fn catalog(world: &World) -> &SpeciesCatalog {
        &world.catalog
    }

    /// Installed environment, if any.
    #[must_use]
    pub fn environment(world: &World) -> Option<&EnvironmentGrid> {
        world.environment.as_ref()
    }

    /// Profile of the selected species, if any.
    #[must_use]
    pub fn selected_profile(world: &World) -> Option<&SpeciesProfile> {
        world
            .species
            .as_deref()
            .and_then(|name| world.catalog.get(name))
    }

    /// Current placement of the shark, if any.
    #[must_use]
    pub fn placement(world: &World) -> Option<Placement> {
        world.placement
    }

    /// Grid cell representing the shark's current location: the horizontal
    /// centre of the grid at the placed depth layer.
    #[must_use]
    pub fn current_cell(world: &World) -> Option<CellIndex> {
        let (row, column) = world.dimensions.center();
        world
            .placement
            .map(|placement| CellIndex::new(row, column, placement.layer))
    }

    /// Environmental readings at the shark's current location.
    #[must_use]
    pub fn current_sample(world: &World) -> Option<EnvironmentSample> {
        let cell = current_cell(world)?;
        environment(world)?.sample(cell)
    }

    /// Everything a prediction needs, available once the session is complete.
    #[must_use]
    pub fn session(world: &World) -> Option<SessionView<'_>> {
        Some(SessionView {
            profile: selected_profile(world)?,
            environment: environment(world)?,
            placement: placement(world)?,
            current_cell: current_cell(world)?,
        })
    }

    /// Read-only snapshot of a fully prepared session.
    #[derive(Clone, Copy, Debug)]
    pub struct SessionView<'a> {
        /// Profile of the selected species.
        pub profile: &'a SpeciesProfile,
        /// Installed environment.
        pub environment: &'a EnvironmentGrid,
        /// Shark placement.
        pub placement: Placement,
        /// Grid cell representing the shark's current location.
        pub current_cell: CellIndex,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shark_habitat_core::{CellIndex, EnvironmentSample, SpeciesProfile};

    fn world() -> World {
        World::new(SimulationConfig::default(), SpeciesCatalog::builtin()).expect("valid world")
    }

    fn uniform_environment(dimensions: GridDimensions, value: f64) -> EnvironmentGrid {
        EnvironmentGrid::from_fn(dimensions, |_| EnvironmentSample {
            coastal: value,
            plankton: value,
            eddy: value,
        })
    }

    fn position() -> GeoPoint {
        GeoPoint::new(10.0, -60.0).expect("valid position")
    }

    #[test]
    fn rejects_invalid_configuration() {
        let mut config = SimulationConfig::default();
        config.grid.size = 0;
        assert_eq!(
            World::new(config, SpeciesCatalog::builtin()).err(),
            Some(ConfigError::EmptyGrid)
        );
    }

    #[test]
    fn installs_environment_once() {
        let mut world = world();
        let dimensions = query::dimensions(&world);
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::InstallEnvironment {
                environment: uniform_environment(dimensions, 0.5),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::InstallEnvironment {
                environment: uniform_environment(dimensions, 0.9),
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                Event::EnvironmentInstalled { dimensions },
                Event::EnvironmentRejected {
                    reason: EnvironmentError::AlreadyInstalled
                },
            ]
        );
        assert_eq!(
            query::environment(&world),
            Some(&uniform_environment(dimensions, 0.5))
        );
    }

    #[test]
    fn rejects_environment_with_wrong_shape() {
        let mut world = world();
        let actual = GridDimensions::new(10, 3).expect("valid dimensions");
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::InstallEnvironment {
                environment: uniform_environment(actual, 0.5),
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![Event::EnvironmentRejected {
                reason: EnvironmentError::ShapeMismatch {
                    expected: query::dimensions(&world),
                    actual,
                }
            }]
        );
        assert!(query::environment(&world).is_none());
    }

    #[test]
    fn selects_known_species_and_rejects_unknown() {
        let mut world = world();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::SelectSpecies {
                name: String::from("Loch Ness shark"),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::SelectSpecies {
                name: String::from("Tiger shark"),
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                Event::SpeciesRejected {
                    name: String::from("Loch Ness shark"),
                    reason: SelectionError::UnknownSpecies,
                },
                Event::SpeciesSelected {
                    name: String::from("Tiger shark"),
                },
            ]
        );
        assert_eq!(
            query::selected_profile(&world).map(SpeciesProfile::name),
            Some("Tiger shark")
        );
    }

    #[test]
    fn rejects_species_with_wrong_layer_count() {
        let shallow_only = SpeciesProfile::new("Flat shark", "", vec![1.0], 0.5, 0.5, 0.5)
            .expect("valid profile");
        let mut world = World::new(
            SimulationConfig::default(),
            SpeciesCatalog::from_profiles([shallow_only]),
        )
        .expect("valid world");
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::SelectSpecies {
                name: String::from("Flat shark"),
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![Event::SpeciesRejected {
                name: String::from("Flat shark"),
                reason: SelectionError::DepthPreferenceMismatch {
                    expected: 3,
                    actual: 1
                },
            }]
        );
        assert!(query::selected_profile(&world).is_none());
    }

    #[test]
    fn placement_sets_current_cell_at_grid_centre() {
        let mut world = world();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::PlaceShark {
                position: position(),
                layer: DepthLayer::new(3),
            },
            &mut events,
        );
        assert!(query::placement(&world).is_none());

        apply(
            &mut world,
            Command::PlaceShark {
                position: position(),
                layer: DepthLayer::MID,
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                Event::PlacementRejected {
                    reason: LocationError::DepthOutOfRange {
                        index: 3,
                        layers: 3
                    },
                },
                Event::SharkPlaced {
                    position: position(),
                    layer: DepthLayer::MID,
                },
            ]
        );
        assert_eq!(
            query::current_cell(&world),
            Some(CellIndex::new(9, 9, DepthLayer::MID))
        );
    }

    #[test]
    fn session_is_available_once_every_piece_is_set() {
        let mut world = world();
        let dimensions = query::dimensions(&world);
        let mut events = Vec::new();
        assert!(query::session(&world).is_none());

        apply(
            &mut world,
            Command::InstallEnvironment {
                environment: uniform_environment(dimensions, 0.25),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::SelectSpecies {
                name: String::from("Bull shark"),
            },
            &mut events,
        );
        assert!(query::session(&world).is_none());

        apply(
            &mut world,
            Command::PlaceShark {
                position: position(),
                layer: DepthLayer::SHALLOW,
            },
            &mut events,
        );

        let session = query::session(&world).expect("complete session");
        assert_eq!(session.profile.name(), "Bull shark");
        assert_eq!(session.current_cell, CellIndex::new(9, 9, DepthLayer::SHALLOW));
        assert_eq!(
            query::current_sample(&world),
            Some(EnvironmentSample {
                coastal: 0.25,
                plankton: 0.25,
                eddy: 0.25,
            })
        );
    }
}
