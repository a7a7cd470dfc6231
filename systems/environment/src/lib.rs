#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Synthetic ocean environment generation.
//!
//! Produces the three environmental fields the suitability scorer consumes:
//! coastal proximity falls off linearly with distance from the shoreline row,
//! plankton abundance is a per-position normal draw shifted per depth layer,
//! and eddy strength is a per-cell normal draw plus a radial warm-eddy bump.
//! Every reading is clamped to [0, 1].

use rand::Rng;
use rand_distr::{Distribution, Normal};
use shark_habitat_core::{
    CellIndex, ConfigError, DepthLayer, EnvironmentGrid, EnvironmentSample, EnvironmentTuning,
    GridDimensions,
};

/// Generator for [`EnvironmentGrid`] values of a fixed shape.
#[derive(Clone, Debug)]
pub struct EnvironmentGeneration {
    dimensions: GridDimensions,
    plankton: Normal<f64>,
    eddy: Normal<f64>,
    plankton_layer_offsets: Vec<f64>,
    eddy_center_row: f64,
    eddy_center_column: f64,
    eddy_radius: f64,
    eddy_amplitude: f64,
}

impl EnvironmentGeneration {
    /// Creates a generator for grids of the provided shape.
    pub fn new(dimensions: GridDimensions, tuning: &EnvironmentTuning) -> Result<Self, ConfigError> {
        tuning.validate(dimensions.depth_layers())?;
        let plankton = Normal::new(tuning.plankton_mean, tuning.plankton_deviation).map_err(|_| {
            ConfigError::InvalidDeviation {
                name: "plankton_deviation",
                value: tuning.plankton_deviation,
            }
        })?;
        let eddy = Normal::new(tuning.eddy_mean, tuning.eddy_deviation).map_err(|_| {
            ConfigError::InvalidDeviation {
                name: "eddy_deviation",
                value: tuning.eddy_deviation,
            }
        })?;

        Ok(Self {
            dimensions,
            plankton,
            eddy,
            plankton_layer_offsets: tuning.plankton_layer_offsets.clone(),
            eddy_center_row: tuning.eddy_center_row,
            eddy_center_column: tuning.eddy_center_column,
            eddy_radius: tuning.eddy_radius,
            eddy_amplitude: tuning.eddy_amplitude,
        })
    }

    /// Shape of the grids produced by this generator.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Generates a fresh grid. The result is fully determined by the state of `rng`.
    ///
    /// All plankton base values are drawn first in row-major order, followed by
    /// every eddy base value with the depth axis varying fastest.
    pub fn generate<R>(&self, rng: &mut R) -> EnvironmentGrid
    where
        R: Rng + ?Sized,
    {
        let size = self.dimensions.size();
        let layers = self.dimensions.depth_layers();
        let plankton_base: Vec<f64> = (0..size * size)
            .map(|_| self.plankton.sample(rng))
            .collect();
        let eddy_base: Vec<f64> = (0..self.dimensions.cell_count())
            .map(|_| self.eddy.sample(rng))
            .collect();

        EnvironmentGrid::from_fn(self.dimensions, |cell| {
            let position = cell.row() * size + cell.column();
            let index = position * layers + cell.layer().index();
            EnvironmentSample {
                coastal: coastal_proximity(cell.row(), size),
                plankton: clamp_unit(plankton_base[position] + self.layer_offset(cell.layer())),
                eddy: clamp_unit(eddy_base[index] + self.eddy_bump(cell)),
            }
        })
    }

    fn layer_offset(&self, layer: DepthLayer) -> f64 {
        self.plankton_layer_offsets
            .get(layer.index())
            .copied()
            .unwrap_or(0.0)
    }

    fn eddy_bump(&self, cell: CellIndex) -> f64 {
        let row_delta = cell.row() as f64 - self.eddy_center_row;
        let column_delta = cell.column() as f64 - self.eddy_center_column;
        let distance = row_delta.hypot(column_delta);
        ((self.eddy_radius - distance) / self.eddy_radius).max(0.0) * self.eddy_amplitude
    }
}

/// Coastal influence of a row: 1.0 on the shoreline row, decreasing linearly offshore.
#[must_use]
pub fn coastal_proximity(row: usize, size: usize) -> f64 {
    1.0 - row as f64 / size as f64
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
