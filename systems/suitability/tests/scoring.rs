use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shark_habitat_core::{EnvironmentGrid, SimulationConfig, SpeciesCatalog};
use shark_habitat_system_environment::EnvironmentGeneration;
use shark_habitat_system_suitability::score;

fn environment(seed: u64) -> EnvironmentGrid {
    let config = SimulationConfig::default();
    let dimensions = config.validate().expect("default config is valid");
    EnvironmentGeneration::new(dimensions, &config.environment)
        .expect("valid tuning")
        .generate(&mut ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn scores_stay_within_zero_and_theoretical_maximum() {
    let environment = environment(21);
    for profile in SpeciesCatalog::builtin().iter() {
        let maximum = profile.max_suitability();
        let scores = score(profile, &environment);
        assert_eq!(scores.dimensions(), environment.dimensions());
        for (cell, value) in scores.iter() {
            assert!(
                (0.0..=maximum + 1e-12).contains(&value),
                "{} scored {value} at {cell:?}, maximum {maximum}",
                profile.name()
            );
        }
    }
}

#[test]
fn scoring_is_idempotent() {
    let environment = environment(34);
    let catalog = SpeciesCatalog::builtin();
    let profile = catalog.get("Great white shark").expect("great white present");
    assert_eq!(score(profile, &environment), score(profile, &environment));
}

#[test]
fn coastal_species_prefer_the_shoreline_row() {
    let environment = environment(55);
    let catalog = SpeciesCatalog::builtin();
    let profile = catalog.get("Blacktip reef shark").expect("blacktip present");
    let scores = score(profile, &environment);
    let size = scores.dimensions().size();

    let row_mean = |row: usize| {
        (0..size)
            .filter_map(|column| scores.water_column(row, column))
            .map(|column| column[0])
            .sum::<f64>()
            / size as f64
    };
    assert!(row_mean(0) > row_mean(size - 1));
}
