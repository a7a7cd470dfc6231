//! Simulation configuration shared by the generator, scorer, and mapping code.

use serde::Deserialize;
use thiserror::Error;

use crate::GridDimensions;

/// Aggregated tuning knobs controlling every adjustable aspect of a run.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Shape and geographic extent of the local grid.
    pub grid: GridSettings,
    /// Distribution parameters of the synthetic environmental fields.
    pub environment: EnvironmentTuning,
    /// Migration projection parameters.
    pub migration: MigrationTuning,
}

impl SimulationConfig {
    /// Validates every section and returns the grid shape on success.
    pub fn validate(&self) -> Result<GridDimensions, ConfigError> {
        let dimensions = self.grid.dimensions()?;
        self.environment.validate(dimensions.depth_layers())?;
        self.migration.validate()?;
        Ok(dimensions)
    }
}

/// Shape of the local grid and the geographic window it represents.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSettings {
    /// Cells along each horizontal axis.
    pub size: usize,
    /// Number of vertical depth bands.
    pub depth_layers: usize,
    /// Width and height of the window in degrees, centred on the shark.
    pub span_degrees: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: 20,
            depth_layers: 3,
            span_degrees: 2.0,
        }
    }
}

impl GridSettings {
    /// Validates the settings and returns the grid shape.
    pub fn dimensions(&self) -> Result<GridDimensions, ConfigError> {
        if !self.span_degrees.is_finite() || self.span_degrees <= 0.0 {
            return Err(ConfigError::InvalidSpan(self.span_degrees));
        }
        GridDimensions::new(self.size, self.depth_layers)
    }
}

/// Parameters of the synthetic plankton and eddy fields.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentTuning {
    /// Mean of the per-position plankton base draw.
    pub plankton_mean: f64,
    /// Standard deviation of the plankton base draw.
    pub plankton_deviation: f64,
    /// Additive plankton offset per depth layer, surface first.
    pub plankton_layer_offsets: Vec<f64>,
    /// Mean of the per-cell eddy base draw.
    pub eddy_mean: f64,
    /// Standard deviation of the eddy base draw.
    pub eddy_deviation: f64,
    /// Row coordinate of the warm eddy centre.
    pub eddy_center_row: f64,
    /// Column coordinate of the warm eddy centre.
    pub eddy_center_column: f64,
    /// Distance in cells at which the eddy bump fades to zero.
    pub eddy_radius: f64,
    /// Eddy bump added at the centre itself.
    pub eddy_amplitude: f64,
}

impl Default for EnvironmentTuning {
    fn default() -> Self {
        Self {
            plankton_mean: 0.5,
            plankton_deviation: 0.2,
            plankton_layer_offsets: vec![0.3, 0.0, -0.4],
            eddy_mean: 0.3,
            eddy_deviation: 0.2,
            eddy_center_row: 15.0,
            eddy_center_column: 5.0,
            eddy_radius: 10.0,
            eddy_amplitude: 0.7,
        }
    }
}

impl EnvironmentTuning {
    /// Validates the tuning against the configured number of depth layers.
    pub fn validate(&self, depth_layers: usize) -> Result<(), ConfigError> {
        let finite = [
            ("plankton_mean", self.plankton_mean),
            ("eddy_mean", self.eddy_mean),
            ("eddy_center_row", self.eddy_center_row),
            ("eddy_center_column", self.eddy_center_column),
            ("eddy_amplitude", self.eddy_amplitude),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if let Some(value) = self
            .plankton_layer_offsets
            .iter()
            .copied()
            .find(|value| !value.is_finite())
        {
            return Err(ConfigError::NonFinite {
                name: "plankton_layer_offsets",
                value,
            });
        }

        for (name, value) in [
            ("plankton_deviation", self.plankton_deviation),
            ("eddy_deviation", self.eddy_deviation),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDeviation { name, value });
            }
        }

        if self.plankton_layer_offsets.len() != depth_layers {
            return Err(ConfigError::LayerOffsetCount {
                expected: depth_layers,
                actual: self.plankton_layer_offsets.len(),
            });
        }

        if !self.eddy_radius.is_finite() || self.eddy_radius <= 0.0 {
            return Err(ConfigError::InvalidEddyRadius(self.eddy_radius));
        }

        Ok(())
    }
}

/// Parameters of the six-month migration projection.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrationTuning {
    /// Degrees travelled toward the winning sector.
    pub step_degrees: f64,
}

impl Default for MigrationTuning {
    fn default() -> Self {
        Self { step_degrees: 15.0 }
    }
}

impl MigrationTuning {
    /// Validates the migration step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_degrees.is_finite() || self.step_degrees <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step_degrees));
        }
        Ok(())
    }
}

/// Reasons a configuration can be refused.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The horizontal grid has no cells.
    #[error("grid size must be at least one cell")]
    EmptyGrid,
    /// The grid has no depth layers.
    #[error("grid must contain at least one depth layer")]
    NoDepthLayers,
    /// The geographic span is not a positive number of degrees.
    #[error("grid span must be a positive number of degrees, got {0}")]
    InvalidSpan(f64),
    /// The plankton offsets do not cover every depth layer.
    #[error("expected {expected} plankton layer offsets, got {actual}")]
    LayerOffsetCount {
        /// Configured depth layers.
        expected: usize,
        /// Offsets supplied.
        actual: usize,
    },
    /// A parameter is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A standard deviation is negative or not finite.
    #[error("{name} must be a non-negative finite deviation, got {value}")]
    InvalidDeviation {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The eddy radius is not positive.
    #[error("eddy radius must be positive, got {0}")]
    InvalidEddyRadius(f64),
    /// The migration step is not positive.
    #[error("migration step must be a positive number of degrees, got {0}")]
    InvalidStep(f64),
}
