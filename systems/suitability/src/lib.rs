#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Habitat suitability index (HSI) scoring.

use shark_habitat_core::{DepthLayer, EnvironmentGrid, EnvironmentSample, ScoreGrid, SpeciesProfile};

/// Scores every cell of the environment for the provided species.
///
/// Each score is a plain weighted sum: the species' innate affinity for the
/// cell's depth layer at full weight, plus the coastal, plankton, and eddy
/// weights multiplied by the matching readings.
#[must_use]
pub fn score(profile: &SpeciesProfile, environment: &EnvironmentGrid) -> ScoreGrid {
    ScoreGrid::from_environment(environment, |cell, sample| {
        cell_score(profile, cell.layer(), sample)
    })
}

/// Suitability of a single cell.
#[must_use]
pub fn cell_score(profile: &SpeciesProfile, layer: DepthLayer, sample: EnvironmentSample) -> f64 {
    profile.layer_preference(layer)
        + profile.coastal() * sample.coastal
        + profile.plankton() * sample.plankton
        + profile.eddy() * sample.eddy
}

#[cfg(test)]
mod tests {
    use super::*;
    use shark_habitat_core::{CellIndex, GridDimensions};

    fn profile() -> SpeciesProfile {
        SpeciesProfile::new("Test shark", "", vec![1.0, 0.5, 0.0], 0.8, 0.4, 0.2)
            .expect("valid profile")
    }

    #[test]
    fn depth_affinity_contributes_without_environment() {
        let empty = EnvironmentSample::default();
        assert_eq!(cell_score(&profile(), DepthLayer::SHALLOW, empty), 1.0);
        assert_eq!(cell_score(&profile(), DepthLayer::MID, empty), 0.5);
        assert_eq!(cell_score(&profile(), DepthLayer::DEEP, empty), 0.0);
    }

    #[test]
    fn weights_scale_each_reading() {
        let sample = EnvironmentSample {
            coastal: 0.5,
            plankton: 1.0,
            eddy: 0.25,
        };
        let expected = 0.5 + 0.8 * 0.5 + 0.4 * 1.0 + 0.2 * 0.25;
        assert_eq!(cell_score(&profile(), DepthLayer::MID, sample), expected);
    }

    #[test]
    fn saturated_cells_reach_the_theoretical_maximum() {
        let dimensions = GridDimensions::new(2, 3).expect("valid dimensions");
        let environment = EnvironmentGrid::from_fn(dimensions, |_| EnvironmentSample {
            coastal: 1.0,
            plankton: 1.0,
            eddy: 1.0,
        });
        let scores = score(&profile(), &environment);
        let best = scores
            .get(CellIndex::new(1, 1, DepthLayer::SHALLOW))
            .expect("in bounds");
        assert_eq!(best, profile().max_suitability());
    }

    #[test]
    fn every_cell_is_scored_from_its_own_reading() {
        let dimensions = GridDimensions::new(3, 2).expect("valid dimensions");
        let environment = EnvironmentGrid::from_fn(dimensions, |cell| {
            let position = (cell.row() * 3 + cell.column()) as f64;
            EnvironmentSample {
                coastal: position / 10.0,
                plankton: cell.layer().index() as f64 / 2.0,
                eddy: 1.0 - position / 10.0,
            }
        });
        let scores = score(&profile(), &environment);

        assert_eq!(scores.dimensions(), dimensions);
        assert_eq!(scores.iter().count(), dimensions.cell_count());
        for (cell, sample) in environment.iter() {
            assert_eq!(
                scores.get(cell),
                Some(cell_score(&profile(), cell.layer(), sample)),
                "mismatch at {cell:?}"
            );
        }
    }
}
