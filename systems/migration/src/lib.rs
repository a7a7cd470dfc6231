#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Directional aggregation of suitability scores into a migration heading.
//!
//! The score volume is first collapsed along the depth axis, keeping the best
//! layer of every water column, since the shark can dive to whichever layer
//! suits it. The collapsed plane is then averaged over the four [`Sector`]
//! halvings and the best sector supplies the heading, the fixed displacement,
//! and the layer of its single best cell.

use shark_habitat_core::{
    CellIndex, DepthLayer, MigrationTuning, MigrationVector, ScoreGrid, Sector,
};

mod mapping;

pub use mapping::GridMapping;

/// Average best-over-depth score of one sector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorAverage {
    /// Sector the average was taken over.
    pub sector: Sector,
    /// Mean of the best-over-depth scores, or `None` when the sector holds no cells.
    pub average: Option<f64>,
    /// Number of horizontal positions the sector covers.
    pub positions: usize,
}

/// Reduces a score grid to the most promising migration heading.
#[must_use]
pub fn aggregate(scores: &ScoreGrid, tuning: &MigrationTuning) -> MigrationVector {
    let dimensions = scores.dimensions();
    let (center_row, center_column) = dimensions.center();

    // South and East cover the upper half of each axis and are never empty.
    let (sector, sector_average) = sector_averages(scores)
        .into_iter()
        .filter_map(|summary| summary.average.map(|average| (summary.sector, average)))
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .unwrap_or((Sector::South, 0.0));

    let peak = peak_cell(scores, sector)
        .unwrap_or_else(|| CellIndex::new(center_row, center_column, DepthLayer::SHALLOW));
    let current_scores = scores
        .water_column(center_row, center_column)
        .map(<[f64]>::to_vec)
        .unwrap_or_default();

    MigrationVector::new(
        sector,
        sector_average,
        peak,
        sector.displacement(tuning.step_degrees),
        current_scores,
    )
}

/// Averages of every sector in [`Sector::ALL`] order.
#[must_use]
pub fn sector_averages(scores: &ScoreGrid) -> Vec<SectorAverage> {
    let size = scores.dimensions().size();
    let best = best_over_depth(scores);

    Sector::ALL
        .iter()
        .map(|&sector| {
            let mut total = 0.0;
            let mut positions = 0;
            for row in sector.rows(size) {
                for column in sector.columns(size) {
                    total += best[row * size + column];
                    positions += 1;
                }
            }
            let average = (positions > 0).then(|| total / positions as f64);
            SectorAverage {
                sector,
                average,
                positions,
            }
        })
        .collect()
}

/// Collapses the depth axis, keeping the best score of every water column in row-major order.
#[must_use]
pub fn best_over_depth(scores: &ScoreGrid) -> Vec<f64> {
    let size = scores.dimensions().size();
    let mut best = Vec::with_capacity(size * size);
    for row in 0..size {
        for column in 0..size {
            let column_best = scores
                .water_column(row, column)
                .map_or(f64::NEG_INFINITY, |layers| {
                    layers.iter().copied().fold(f64::NEG_INFINITY, f64::max)
                });
            best.push(column_best);
        }
    }
    best
}

/// Highest scoring cell inside a sector. Ties keep the first cell in row, column, layer order.
#[must_use]
pub fn peak_cell(scores: &ScoreGrid, sector: Sector) -> Option<CellIndex> {
    let size = scores.dimensions().size();
    let mut peak: Option<(CellIndex, f64)> = None;

    for row in sector.rows(size) {
        for column in sector.columns(size) {
            let Some(layers) = scores.water_column(row, column) else {
                continue;
            };
            for (layer, value) in layers.iter().copied().enumerate() {
                if peak.map_or(true, |(_, best)| value > best) {
                    peak = Some((CellIndex::new(row, column, DepthLayer::new(layer)), value));
                }
            }
        }
    }

    peak.map(|(cell, _)| cell)
}
