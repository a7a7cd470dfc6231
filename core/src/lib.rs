#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the shark habitat model.
//!
//! This crate defines the vocabulary that connects the adapter, the
//! authoritative session world, and the pure systems. Adapters submit
//! [`Command`] values describing the desired session changes, the world
//! executes those commands via its `apply` entry point and broadcasts
//! [`Event`] values describing the outcome. Systems never mutate the world:
//! they read immutable grids ([`EnvironmentGrid`], [`ScoreGrid`]) and return
//! fresh values.

use std::{fmt, ops::Range};

use serde::Serialize;
use thiserror::Error;

mod config;
mod species;

pub use config::{ConfigError, EnvironmentTuning, GridSettings, MigrationTuning, SimulationConfig};
pub use species::{ProfileError, SpeciesCatalog, SpeciesProfile};

const DEPTH_LABELS: [&str; 3] = [
    "Shallow (0-20m)",
    "Mid-Water (20-150m)",
    "Deep/Twilight (>150m)",
];

/// Northern latitude limit in degrees.
pub const MAX_LATITUDE: f64 = 90.0;
/// Eastern longitude limit in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Commands that express all permissible session mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Installs the simulated ocean volume the session will be evaluated against.
    InstallEnvironment {
        /// Freshly generated environment grid.
        environment: EnvironmentGrid,
    },
    /// Selects the species whose preferences drive the suitability scoring.
    SelectSpecies {
        /// Catalog name of the species.
        name: String,
    },
    /// Places the tracked shark at a global position and depth layer.
    PlaceShark {
        /// Global coordinates of the shark.
        position: GeoPoint,
        /// Depth layer the shark currently occupies.
        layer: DepthLayer,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that an environment grid was installed.
    EnvironmentInstalled {
        /// Shape of the installed grid.
        dimensions: GridDimensions,
    },
    /// Reports that an environment grid was refused.
    EnvironmentRejected {
        /// Specific reason the installation failed.
        reason: EnvironmentError,
    },
    /// Confirms that a species was selected.
    SpeciesSelected {
        /// Catalog name of the selected species.
        name: String,
    },
    /// Reports that a species selection was refused.
    SpeciesRejected {
        /// Name provided in the selection request.
        name: String,
        /// Specific reason the selection failed.
        reason: SelectionError,
    },
    /// Confirms that the shark was placed.
    SharkPlaced {
        /// Global coordinates of the shark.
        position: GeoPoint,
        /// Depth layer the shark occupies.
        layer: DepthLayer,
    },
    /// Reports that a placement request was refused.
    PlacementRejected {
        /// Specific reason the placement failed.
        reason: LocationError,
    },
}

/// Reasons an environment installation can be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    /// The grid shape differs from the configured one.
    #[error("environment grid is {actual} but the simulation is configured for {expected}")]
    ShapeMismatch {
        /// Shape demanded by the simulation configuration.
        expected: GridDimensions,
        /// Shape of the grid that was offered.
        actual: GridDimensions,
    },
    /// An environment is already installed; it stays immutable for the rest of the run.
    #[error("an environment is already installed")]
    AlreadyInstalled,
}

/// Reasons a species selection can be refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The catalog does not contain the requested species.
    #[error("species is not present in the catalog")]
    UnknownSpecies,
    /// The species profile does not describe every configured depth layer.
    #[error("species describes {actual} depth layers but the grid has {expected}")]
    DepthPreferenceMismatch {
        /// Depth layers configured for the grid.
        expected: usize,
        /// Depth preferences carried by the profile.
        actual: usize,
    },
}

/// Reasons a user supplied location can be refused.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LocationError {
    /// Latitude fell outside [-90, 90].
    #[error("Latitude must be between -90.0 and 90.0.")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside [-180, 180].
    #[error("Longitude must be between -180.0 and 180.0.")]
    LongitudeOutOfRange(f64),
    /// Depth layer index fell outside the configured layers.
    #[error("Depth must be {}.", depth_choices(.layers))]
    DepthOutOfRange {
        /// Index that was requested.
        index: i64,
        /// Number of configured depth layers.
        layers: usize,
    },
}

fn depth_choices(layers: &usize) -> String {
    let indices: Vec<String> = (0..*layers).map(|index| index.to_string()).collect();
    match indices.as_slice() {
        [] => String::from("a configured layer"),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [head @ .., last] => format!("{}, or {last}", head.join(", ")),
    }
}

/// Shape of the simulated ocean volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GridDimensions {
    size: usize,
    depth_layers: usize,
}

impl GridDimensions {
    /// Creates grid dimensions, rejecting empty axes.
    pub fn new(size: usize, depth_layers: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if depth_layers == 0 {
            return Err(ConfigError::NoDepthLayers);
        }
        Ok(Self { size, depth_layers })
    }

    /// Number of cells along each horizontal axis.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of vertical depth layers.
    #[must_use]
    pub const fn depth_layers(&self) -> usize {
        self.depth_layers
    }

    /// Total number of cells in the volume.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size * self.depth_layers
    }

    /// Horizontal cell representing the shark's current location.
    #[must_use]
    pub const fn center(&self) -> (usize, usize) {
        let center = (self.size - 1) / 2;
        (center, center)
    }

    /// Reports whether the cell lies inside the volume.
    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        cell.row < self.size && cell.column < self.size && cell.layer.index() < self.depth_layers
    }

    /// Iterates every cell in row-major order with the depth axis varying fastest.
    pub fn cells(self) -> impl Iterator<Item = CellIndex> {
        let Self { size, depth_layers } = self;
        (0..size).flat_map(move |row| {
            (0..size).flat_map(move |column| {
                (0..depth_layers).map(move |layer| CellIndex::new(row, column, DepthLayer::new(layer)))
            })
        })
    }

    fn offset(&self, cell: CellIndex) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some((cell.row * self.size + cell.column) * self.depth_layers + cell.layer.index())
    }

    fn column_range(&self, row: usize, column: usize) -> Option<Range<usize>> {
        if row >= self.size || column >= self.size {
            return None;
        }
        let start = (row * self.size + column) * self.depth_layers;
        Some(start..start + self.depth_layers)
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}x{1}", self.size, self.depth_layers)
    }
}

/// Discrete vertical band of the water column. Layer 0 is the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DepthLayer(usize);

impl DepthLayer {
    /// Surface band.
    pub const SHALLOW: Self = Self(0);
    /// Mid-water band.
    pub const MID: Self = Self(1);
    /// Deep or twilight band.
    pub const DEEP: Self = Self(2);

    /// Creates a layer from its zero-based index without range checks.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Validates a user supplied index against the configured number of layers.
    pub fn checked(index: i64, layers: usize) -> Result<Self, LocationError> {
        match usize::try_from(index) {
            Ok(value) if value < layers => Ok(Self(value)),
            _ => Err(LocationError::DepthOutOfRange { index, layers }),
        }
    }

    /// Zero-based index of the layer.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Human readable description of the band.
    #[must_use]
    pub fn label(&self) -> String {
        DEPTH_LABELS
            .get(self.0)
            .map_or_else(|| format!("Layer {}", self.0), |label| (*label).to_owned())
    }
}

/// Location of a single cell of the ocean volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CellIndex {
    row: usize,
    column: usize,
    layer: DepthLayer,
}

impl CellIndex {
    /// Creates a new cell index.
    #[must_use]
    pub const fn new(row: usize, column: usize, layer: DepthLayer) -> Self {
        Self { row, column, layer }
    }

    /// Zero-based row. Row 0 is the northern, most coastal edge.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column. Columns grow eastward.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Depth layer of the cell.
    #[must_use]
    pub const fn layer(&self) -> DepthLayer {
        self.layer
    }
}

/// Environmental readings held by a single cell, each in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct EnvironmentSample {
    /// Proximity to the coast.
    pub coastal: f64,
    /// Phytoplankton abundance.
    pub plankton: f64,
    /// Eddy strength.
    pub eddy: f64,
}

/// Simulated ocean volume holding one [`EnvironmentSample`] per cell.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentGrid {
    dimensions: GridDimensions,
    samples: Vec<EnvironmentSample>,
}

impl EnvironmentGrid {
    /// Builds a grid by evaluating `sample` for every cell in [`GridDimensions::cells`] order.
    pub fn from_fn<F>(dimensions: GridDimensions, sample: F) -> Self
    where
        F: FnMut(CellIndex) -> EnvironmentSample,
    {
        let samples = dimensions.cells().map(sample).collect();
        Self {
            dimensions,
            samples,
        }
    }

    /// Shape of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Readings held by a cell, or `None` when the cell lies outside the grid.
    #[must_use]
    pub fn sample(&self, cell: CellIndex) -> Option<EnvironmentSample> {
        self.dimensions
            .offset(cell)
            .and_then(|offset| self.samples.get(offset).copied())
    }

    /// Iterates every cell together with its readings.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, EnvironmentSample)> + '_ {
        self.dimensions.cells().zip(self.samples.iter().copied())
    }
}

/// Habitat suitability score for every cell of an [`EnvironmentGrid`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreGrid {
    dimensions: GridDimensions,
    scores: Vec<f64>,
}

impl ScoreGrid {
    /// Builds a grid by evaluating `score` for every cell in [`GridDimensions::cells`] order.
    pub fn from_fn<F>(dimensions: GridDimensions, score: F) -> Self
    where
        F: FnMut(CellIndex) -> f64,
    {
        let scores = dimensions.cells().map(score).collect();
        Self { dimensions, scores }
    }

    /// Scores every cell of an environment from its own reading, in storage order.
    pub fn from_environment<F>(environment: &EnvironmentGrid, mut score: F) -> Self
    where
        F: FnMut(CellIndex, EnvironmentSample) -> f64,
    {
        let scores = environment
            .iter()
            .map(|(cell, sample)| score(cell, sample))
            .collect();
        Self {
            dimensions: environment.dimensions(),
            scores,
        }
    }

    /// Shape of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Score held by a cell, or `None` when the cell lies outside the grid.
    #[must_use]
    pub fn get(&self, cell: CellIndex) -> Option<f64> {
        self.dimensions
            .offset(cell)
            .and_then(|offset| self.scores.get(offset).copied())
    }

    /// Scores of every depth layer at one horizontal position, surface first.
    #[must_use]
    pub fn water_column(&self, row: usize, column: usize) -> Option<&[f64]> {
        self.dimensions
            .column_range(row, column)
            .and_then(|range| self.scores.get(range))
    }

    /// Iterates every cell together with its score.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, f64)> + '_ {
        self.dimensions.cells().zip(self.scores.iter().copied())
    }
}

/// One of the four fixed halvings of the horizontal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Sector {
    /// First half of the rows, every column.
    North,
    /// Second half of the rows, every column.
    South,
    /// Second half of the columns, every row.
    East,
    /// First half of the columns, every row.
    West,
}

impl Sector {
    /// Evaluation order. Ties resolve to the earliest sector in this list.
    pub const ALL: [Sector; 4] = [Sector::North, Sector::South, Sector::East, Sector::West];

    /// Display name of the sector.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Sector::North => "North",
            Sector::South => "South",
            Sector::East => "East",
            Sector::West => "West",
        }
    }

    /// Rows covered by the sector on a grid of the provided size.
    #[must_use]
    pub const fn rows(self, size: usize) -> Range<usize> {
        let half = size / 2;
        match self {
            Sector::North => 0..half,
            Sector::South => half..size,
            Sector::East | Sector::West => 0..size,
        }
    }

    /// Columns covered by the sector on a grid of the provided size.
    #[must_use]
    pub const fn columns(self, size: usize) -> Range<usize> {
        let half = size / 2;
        match self {
            Sector::East => half..size,
            Sector::West => 0..half,
            Sector::North | Sector::South => 0..size,
        }
    }

    /// Displacement applied when migrating toward the sector.
    #[must_use]
    pub fn displacement(self, step_degrees: f64) -> GeoOffset {
        match self {
            Sector::North => GeoOffset::new(step_degrees, 0.0),
            Sector::South => GeoOffset::new(-step_degrees, 0.0),
            Sector::East => GeoOffset::new(0.0, step_degrees),
            Sector::West => GeoOffset::new(0.0, -step_degrees),
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Checks that a latitude lies within [-90, 90].
pub fn validate_latitude(latitude: f64) -> Result<f64, LocationError> {
    if (-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(LocationError::LatitudeOutOfRange(latitude))
    }
}

/// Checks that a longitude lies within [-180, 180].
pub fn validate_longitude(longitude: f64) -> Result<f64, LocationError> {
    if (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        Ok(longitude)
    } else {
        Err(LocationError::LongitudeOutOfRange(longitude))
    }
}

/// Folds a longitude back into [-180, 180] after crossing the antimeridian.
#[must_use]
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return longitude;
    }
    (longitude + MAX_LONGITUDE).rem_euclid(2.0 * MAX_LONGITUDE) - MAX_LONGITUDE
}

/// Global position expressed in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a validated position.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        Ok(Self {
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
        })
    }

    /// Latitude in degrees, positive northward.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive eastward.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Applies a displacement. Longitude wraps across the antimeridian; latitude
    /// is a plain sum and may leave [-90, 90] for starts near the poles.
    #[must_use]
    pub fn offset(self, offset: GeoOffset) -> Self {
        Self {
            latitude: self.latitude + offset.latitude,
            longitude: wrap_longitude(self.longitude + offset.longitude),
        }
    }
}

/// Displacement between two positions, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeoOffset {
    latitude: f64,
    longitude: f64,
}

impl GeoOffset {
    /// Creates a displacement.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude change in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude change in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Coarse description of where the current cell sits relative to the shore.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum HabitatZone {
    /// The shoreline row itself.
    CoastalShelf,
    /// Near-shore rows still under strong coastal influence.
    TransitionZone,
    /// Near-shore rows with weak coastal influence.
    OpenOcean,
    /// Everything further offshore.
    OffshoreOpenOcean,
}

impl HabitatZone {
    /// Classifies a row of a grid of the provided size using its coastal reading.
    #[must_use]
    pub fn classify(row: usize, size: usize, coastal: f64) -> Self {
        if row == 0 {
            HabitatZone::CoastalShelf
        } else if row < size / 4 {
            if coastal > 0.4 {
                HabitatZone::TransitionZone
            } else {
                HabitatZone::OpenOcean
            }
        } else {
            HabitatZone::OffshoreOpenOcean
        }
    }

    /// Display label of the zone.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            HabitatZone::CoastalShelf => "Conceptual Coastal Shelf",
            HabitatZone::TransitionZone => "Conceptual Transition Zone",
            HabitatZone::OpenOcean => "Open Ocean",
            HabitatZone::OffshoreOpenOcean => "Conceptual Open Ocean",
        }
    }
}

/// Outcome of directional aggregation over a [`ScoreGrid`].
#[derive(Clone, Debug, PartialEq)]
pub struct MigrationVector {
    sector: Sector,
    sector_average: f64,
    peak_cell: CellIndex,
    displacement: GeoOffset,
    current_scores: Vec<f64>,
}

impl MigrationVector {
    /// Bundles the aggregation results.
    #[must_use]
    pub fn new(
        sector: Sector,
        sector_average: f64,
        peak_cell: CellIndex,
        displacement: GeoOffset,
        current_scores: Vec<f64>,
    ) -> Self {
        Self {
            sector,
            sector_average,
            peak_cell,
            displacement,
            current_scores,
        }
    }

    /// Winning sector.
    #[must_use]
    pub const fn sector(&self) -> Sector {
        self.sector
    }

    /// Average best-over-depth score of the winning sector.
    #[must_use]
    pub const fn sector_average(&self) -> f64 {
        self.sector_average
    }

    /// Highest scoring cell inside the winning sector.
    #[must_use]
    pub const fn peak_cell(&self) -> CellIndex {
        self.peak_cell
    }

    /// Depth layer recommended for the migration.
    #[must_use]
    pub const fn optimal_layer(&self) -> DepthLayer {
        self.peak_cell.layer()
    }

    /// Displacement toward the winning sector.
    #[must_use]
    pub const fn displacement(&self) -> GeoOffset {
        self.displacement
    }

    /// Per-layer scores at the grid centre, surface first.
    #[must_use]
    pub fn current_scores(&self) -> &[f64] {
        &self.current_scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(size: usize, layers: usize) -> GridDimensions {
        GridDimensions::new(size, layers).expect("valid dimensions")
    }

    #[test]
    fn dimensions_reject_empty_axes() {
        assert_eq!(GridDimensions::new(0, 3), Err(ConfigError::EmptyGrid));
        assert_eq!(GridDimensions::new(4, 0), Err(ConfigError::NoDepthLayers));
    }

    #[test]
    fn default_grid_center_is_cell_nine_nine() {
        assert_eq!(dims(20, 3).center(), (9, 9));
        assert_eq!(dims(1, 1).center(), (0, 0));
    }

    #[test]
    fn cells_iterate_depth_fastest() {
        let cells: Vec<CellIndex> = dims(2, 2).cells().collect();
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0], CellIndex::new(0, 0, DepthLayer::new(0)));
        assert_eq!(cells[1], CellIndex::new(0, 0, DepthLayer::new(1)));
        assert_eq!(cells[2], CellIndex::new(0, 1, DepthLayer::new(0)));
        assert_eq!(cells[7], CellIndex::new(1, 1, DepthLayer::new(1)));
    }

    #[test]
    fn water_column_is_contiguous_per_position() {
        let dimensions = dims(3, 3);
        let grid = ScoreGrid::from_fn(dimensions, |cell| {
            (cell.row() * 100 + cell.column() * 10 + cell.layer().index()) as f64
        });
        assert_eq!(grid.water_column(2, 1), Some(&[210.0, 211.0, 212.0][..]));
        assert_eq!(grid.water_column(3, 0), None);
        assert_eq!(grid.get(CellIndex::new(1, 2, DepthLayer::DEEP)), Some(122.0));
        assert_eq!(grid.get(CellIndex::new(1, 2, DepthLayer::new(3))), None);
    }

    #[test]
    fn environment_scores_line_up_with_their_cells() {
        let environment = EnvironmentGrid::from_fn(dims(2, 2), |cell| EnvironmentSample {
            coastal: cell.row() as f64,
            plankton: cell.column() as f64,
            eddy: cell.layer().index() as f64,
        });
        let grid = ScoreGrid::from_environment(&environment, |_, sample| {
            sample.coastal * 100.0 + sample.plankton * 10.0 + sample.eddy
        });
        assert_eq!(grid.dimensions(), environment.dimensions());
        assert_eq!(grid.water_column(1, 0), Some(&[100.0, 101.0][..]));
        assert_eq!(grid.get(CellIndex::new(0, 1, DepthLayer::new(1))), Some(11.0));
    }

    #[test]
    fn sectors_halve_the_grid_along_independent_axes() {
        let size = 20;
        for sector in Sector::ALL {
            let cells = sector.rows(size).len() * sector.columns(size).len();
            assert_eq!(cells, size * size / 2, "{sector} should cover half the grid");
        }
        assert_eq!(Sector::North.rows(size), 0..10);
        assert_eq!(Sector::South.rows(size), 10..20);
        assert_eq!(Sector::East.columns(size), 10..20);
        assert_eq!(Sector::West.columns(size), 0..10);
    }

    #[test]
    fn displacement_moves_along_exactly_one_axis() {
        assert_eq!(Sector::North.displacement(15.0), GeoOffset::new(15.0, 0.0));
        assert_eq!(Sector::South.displacement(15.0), GeoOffset::new(-15.0, 0.0));
        assert_eq!(Sector::East.displacement(15.0), GeoOffset::new(0.0, 15.0));
        assert_eq!(Sector::West.displacement(15.0), GeoOffset::new(0.0, -15.0));
    }

    #[test]
    fn eastward_offset_wraps_across_antimeridian() {
        let start = GeoPoint::new(0.0, 175.0).expect("valid point");
        let destination = start.offset(Sector::East.displacement(15.0));
        assert_eq!(destination.longitude(), -170.0);

        let start = GeoPoint::new(0.0, -172.5).expect("valid point");
        let destination = start.offset(Sector::West.displacement(15.0));
        assert_eq!(destination.longitude(), 172.5);
    }

    #[test]
    fn boundary_longitude_is_kept() {
        let start = GeoPoint::new(0.0, 165.0).expect("valid point");
        assert_eq!(start.offset(Sector::East.displacement(15.0)).longitude(), 180.0);
    }

    #[test]
    fn latitude_moves_the_full_step_near_the_poles() {
        let north = GeoPoint::new(80.0, 0.0).expect("valid point");
        let destination = north.offset(Sector::North.displacement(15.0));
        assert_eq!(destination.latitude(), 95.0);
        assert_eq!(destination.latitude() - north.latitude(), 15.0);

        let south = GeoPoint::new(-80.0, 10.0).expect("valid point");
        let destination = south.offset(Sector::South.displacement(15.0));
        assert_eq!(destination.latitude(), -95.0);
        assert_eq!(destination.longitude(), 10.0);
    }

    #[test]
    fn location_validation_matches_prompt_ranges() {
        assert!(GeoPoint::new(90.0, -180.0).is_ok());
        assert_eq!(
            GeoPoint::new(90.5, 0.0),
            Err(LocationError::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            GeoPoint::new(0.0, 180.5),
            Err(LocationError::LongitudeOutOfRange(180.5))
        );
        assert!(validate_latitude(f64::NAN).is_err());
    }

    #[test]
    fn depth_checks_reject_negative_and_excess_indices() {
        assert_eq!(DepthLayer::checked(2, 3), Ok(DepthLayer::DEEP));
        assert!(DepthLayer::checked(3, 3).is_err());
        let error = DepthLayer::checked(-1, 3).expect_err("negative depth");
        assert_eq!(error.to_string(), "Depth must be 0, 1, or 2.");
        let error = DepthLayer::checked(5, 2).expect_err("excess depth");
        assert_eq!(error.to_string(), "Depth must be 0 or 1.");
    }

    #[test]
    fn depth_labels_cover_the_canonical_bands() {
        assert_eq!(DepthLayer::SHALLOW.label(), "Shallow (0-20m)");
        assert_eq!(DepthLayer::DEEP.label(), "Deep/Twilight (>150m)");
        assert_eq!(DepthLayer::new(4).label(), "Layer 4");
    }

    #[test]
    fn habitat_zone_follows_row_and_coastal_reading() {
        assert_eq!(HabitatZone::classify(0, 20, 1.0), HabitatZone::CoastalShelf);
        assert_eq!(HabitatZone::classify(3, 20, 0.85), HabitatZone::TransitionZone);
        assert_eq!(HabitatZone::classify(3, 20, 0.3), HabitatZone::OpenOcean);
        assert_eq!(HabitatZone::classify(9, 20, 0.55), HabitatZone::OffshoreOpenOcean);
    }
}
