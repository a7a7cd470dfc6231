//! Rendering of the habitat analysis and migration prediction.

use std::{fmt, io::Write};

use serde::Serialize;
use shark_habitat_core::{
    DepthLayer, EnvironmentSample, GeoPoint, HabitatZone, MigrationVector, Sector, SpeciesCatalog,
};
use shark_habitat_system_migration::GridMapping;
use shark_habitat_world::query::SessionView;

/// Everything the predictor tells the user about one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct HabitatReport {
    seed: u64,
    species: String,
    max_suitability: f64,
    position: GeoPoint,
    depth: DepthLayer,
    depth_label: String,
    current_score: f64,
    percent_of_max: f64,
    readings: EnvironmentSample,
    habitat_zone: HabitatZone,
    direction: Sector,
    sector_average: f64,
    destination: GeoPoint,
    peak_habitat_cell: GeoPoint,
    recommended_depth: DepthLayer,
    recommended_depth_label: String,
    step_degrees: f64,
}

impl HabitatReport {
    /// Assembles the report from a prepared session and its migration vector.
    pub(crate) fn new(
        seed: u64,
        session: &SessionView<'_>,
        vector: &MigrationVector,
        mapping: &GridMapping,
        step_degrees: f64,
    ) -> Self {
        let profile = session.profile;
        let layer = session.placement.layer;
        let cell = session.current_cell;
        let readings = session.environment.sample(cell).unwrap_or_default();
        let size = session.environment.dimensions().size();

        let max_suitability = profile.max_suitability();
        let current_score = vector
            .current_scores()
            .get(layer.index())
            .copied()
            .unwrap_or_default();
        let percent_of_max = if max_suitability > 0.0 {
            current_score / max_suitability * 100.0
        } else {
            0.0
        };

        let peak = vector.peak_cell();
        let recommended_depth = vector.optimal_layer();

        Self {
            seed,
            species: profile.name().to_owned(),
            max_suitability,
            position: session.placement.position,
            depth: layer,
            depth_label: layer.label(),
            current_score,
            percent_of_max,
            readings,
            habitat_zone: HabitatZone::classify(cell.row(), size, readings.coastal),
            direction: vector.sector(),
            sector_average: vector.sector_average(),
            destination: session.placement.position.offset(vector.displacement()),
            peak_habitat_cell: mapping.to_geo(peak.row(), peak.column()),
            recommended_depth,
            recommended_depth_label: recommended_depth.label(),
            step_degrees,
        }
    }

    /// Predicted destination after the migration step.
    pub(crate) fn destination(&self) -> GeoPoint {
        self.destination
    }

    /// Heading of the predicted migration.
    pub(crate) fn direction(&self) -> Sector {
        self.direction
    }
}

impl fmt::Display for HabitatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\n--- Habitat Suitability Analysis & 6-MONTH MIGRATION PREDICTION ---"
        )?;
        writeln!(f, "\n==========================================")?;
        writeln!(f, "[{} - Migratory Potential]", self.species.to_uppercase())?;
        writeln!(f, "THEORETICAL MAXIMUM SUITABILITY: {:.2}", self.max_suitability)?;
        writeln!(f, "Simulation Seed: {}", self.seed)?;
        writeln!(f, "==========================================")?;

        writeln!(f, "  --- CURRENT POSITION SUITABILITY ---")?;
        writeln!(
            f,
            "  Coordinates: ({:.4}°, {:.4}°)",
            self.position.latitude(),
            self.position.longitude()
        )?;
        writeln!(
            f,
            "  Current Depth: {} ({})",
            self.depth_label,
            self.depth.index()
        )?;
        writeln!(f, "  Habitat Zone: {}", self.habitat_zone.label())?;
        writeln!(
            f,
            "  Current Suitability Score: {:.2} ({:.1}% of Max)",
            self.current_score, self.percent_of_max
        )?;
        writeln!(f, "  - Key Environmental Factors (Local Simulation):")?;
        writeln!(f, "    - Coastal Proximity: {:.2}", self.readings.coastal)?;
        writeln!(
            f,
            "    - Phytoplankton (PACE/MODIS): {:.2}",
            self.readings.plankton
        )?;
        writeln!(f, "    - Eddy Influence (SWOT): {:.2}", self.readings.eddy)?;

        writeln!(f, "  --- PREDICTED 6-MONTH MIGRATION ---")?;
        writeln!(
            f,
            "  Optimal Direction: {} (Sector Avg HSI: {:.2})",
            self.direction.name().to_uppercase(),
            self.sector_average
        )?;
        writeln!(
            f,
            "  Predicted Destination Coordinates: ({:.4}°, {:.4}°)",
            self.destination.latitude(),
            self.destination.longitude()
        )?;
        writeln!(
            f,
            "  Peak Habitat Cell (Local Simulation): ({:.4}°, {:.4}°)",
            self.peak_habitat_cell.latitude(),
            self.peak_habitat_cell.longitude()
        )?;
        writeln!(
            f,
            "  Recommended Starting Depth for Migration: {}",
            self.recommended_depth_label
        )?;
        write!(
            f,
            "  Est. Migratory Distance: ~{} degrees Lat/Lon change.",
            self.step_degrees
        )
    }
}

/// Writes the start-up banner describing the simulated window.
pub(crate) fn write_banner<W: Write>(out: &mut W, span_degrees: f64) -> std::io::Result<()> {
    writeln!(
        out,
        "--- 3D Predictive Habitat Model Initialized (Global Coordinates) ---"
    )?;
    writeln!(
        out,
        "Local simulation covers a {span_degrees:.1}°x{span_degrees:.1}° area to assess migratory potential."
    )
}

/// Writes the numbered species menu including each species' description.
pub(crate) fn write_catalog<W: Write>(out: &mut W, catalog: &SpeciesCatalog) -> std::io::Result<()> {
    writeln!(out, "Available sharks for prediction:")?;
    for (position, profile) in catalog.iter().enumerate() {
        writeln!(out, "  [{}] {}", position + 1, profile.name())?;
        if !profile.description().is_empty() {
            writeln!(out, "      {}", profile.description())?;
        }
    }
    Ok(())
}
