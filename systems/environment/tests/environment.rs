use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shark_habitat_core::{
    CellIndex, DepthLayer, EnvironmentGrid, GridDimensions, SimulationConfig,
};
use shark_habitat_system_environment::EnvironmentGeneration;

fn generate(seed: u64) -> EnvironmentGrid {
    let config = SimulationConfig::default();
    let dimensions = config.validate().expect("default config is valid");
    let generation =
        EnvironmentGeneration::new(dimensions, &config.environment).expect("valid tuning");
    generation.generate(&mut ChaCha8Rng::seed_from_u64(seed))
}

fn cell(row: usize, column: usize, layer: usize) -> CellIndex {
    CellIndex::new(row, column, DepthLayer::new(layer))
}

#[test]
fn same_seed_replays_identically() {
    assert_eq!(generate(0x5eed), generate(0x5eed));
    assert_ne!(generate(1), generate(2));
}

#[test]
fn every_reading_lies_in_unit_interval() {
    let grid = generate(7);
    assert_eq!(grid.iter().count(), grid.dimensions().cell_count());
    for (index, sample) in grid.iter() {
        for value in [sample.coastal, sample.plankton, sample.eddy] {
            assert!(
                (0.0..=1.0).contains(&value),
                "reading {value} out of range at {index:?}"
            );
        }
    }
}

#[test]
fn coastal_field_is_depth_invariant_and_non_increasing_offshore() {
    let grid = generate(11);
    let dimensions = grid.dimensions();
    let size = dimensions.size();

    for row in 0..size {
        for column in 0..size {
            let surface = grid.sample(cell(row, column, 0)).expect("in bounds").coastal;
            for layer in 1..dimensions.depth_layers() {
                let reading = grid.sample(cell(row, column, layer)).expect("in bounds").coastal;
                assert_eq!(reading, surface);
            }
            if row + 1 < size {
                let next = grid.sample(cell(row + 1, column, 0)).expect("in bounds").coastal;
                assert!(next <= surface, "coastal rose between rows {row} and {}", row + 1);
            }
        }
    }

    assert_eq!(grid.sample(cell(0, 3, 2)).expect("in bounds").coastal, 1.0);
}

#[test]
fn plankton_thins_with_depth() {
    let grid = generate(13);
    let size = grid.dimensions().size();

    for row in 0..size {
        for column in 0..size {
            let shallow = grid.sample(cell(row, column, 0)).expect("in bounds").plankton;
            let mid = grid.sample(cell(row, column, 1)).expect("in bounds").plankton;
            let deep = grid.sample(cell(row, column, 2)).expect("in bounds").plankton;
            assert!(shallow >= mid && mid >= deep, "ordering broken at ({row}, {column})");
        }
    }
}

#[test]
fn eddy_core_is_stronger_than_the_far_corner_on_average() {
    let mut core_total = 0.0;
    let mut corner_total = 0.0;
    for seed in 0..16 {
        let grid = generate(seed);
        for layer in 0..3 {
            core_total += grid.sample(cell(15, 5, layer)).expect("in bounds").eddy;
            corner_total += grid.sample(cell(0, 19, layer)).expect("in bounds").eddy;
        }
    }
    assert!(core_total > corner_total);
}

#[test]
fn custom_shapes_are_honoured() {
    let mut config = SimulationConfig::default();
    config.grid.size = 6;
    config.grid.depth_layers = 2;
    config.environment.plankton_layer_offsets = vec![0.2, -0.2];
    let dimensions = config.validate().expect("valid custom config");
    assert_eq!(dimensions, GridDimensions::new(6, 2).expect("valid dimensions"));

    let generation =
        EnvironmentGeneration::new(dimensions, &config.environment).expect("valid tuning");
    let grid = generation.generate(&mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(grid.dimensions(), dimensions);
    assert_eq!(grid.iter().count(), 6 * 6 * 2);
    assert!(grid.sample(cell(5, 5, 1)).is_some());
    assert!(grid.sample(cell(6, 0, 0)).is_none());
    assert!(grid.sample(cell(0, 0, 2)).is_none());
}
