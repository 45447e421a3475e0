use lifegrid::*;

#[test]
fn unknown_pattern() {
  let catalog = Catalog::builtin();
  let seed: Seed = "weekender".parse().unwrap();
  match initial_grid(&catalog, &seed, 30, Anchor::Center) {
    Err(SeedError::PatternNotFound(name)) => assert_eq!(name, "weekender"),
    other => panic!("unexpected {:?}", other),
  }

  let grid = initial_grid_or_blank(&catalog, &seed, 30, Anchor::Center);
  assert_eq!(grid.size(), 30);
  assert_eq!(grid.alive_count(), 0);

  // a blank grid still runs
  let mut uni = Universe::new(grid, GAME_OF_LIFE, Edges::Bounded);
  uni.simulate(3);
  assert_eq!(uni.grid().alive_count(), 0);
}

#[test]
fn garbage_pattern() {
  let mut catalog = Catalog::new();
  catalog.insert("garbage", Category::Oscillator, "xyz, 123");
  catalog.insert("blank", Category::Oscillator, "");
  for name in &["garbage", "blank"] {
    let seed = Seed::Named(name.to_string());
    assert_eq!(
      initial_grid(&catalog, &seed, 10, Anchor::Center),
      Err(SeedError::Rle(RleError::EmptyPattern)),
    );
  }
}

#[test]
fn legacy_names() {
  let catalog = Catalog::builtin();
  for &(legacy, name) in &[("blinkers", "blinker"), ("rPentomino", "r_pentomino")] {
    let by_legacy = initial_grid(&catalog, &Seed::Named(legacy.to_owned()), 12, Anchor::Center);
    let by_name = initial_grid(&catalog, &Seed::Named(name.to_owned()), 12, Anchor::Center);
    assert!(by_legacy.is_ok(), "{} is not found", legacy);
    assert_eq!(by_legacy, by_name);
  }
}

#[test]
fn random_seed() {
  let catalog = Catalog::builtin();
  let grid = initial_grid(&catalog, &Seed::Random, 64, Anchor::Center).unwrap();
  assert_eq!(grid.size(), 64);
  assert!(grid.alive_count() > 0);
  assert!(grid.alive_count() < 64 * 64);
}

#[test]
fn oversized_pattern_is_clipped() {
  let catalog = Catalog::builtin();
  let seed = Seed::Named("gosper_glider_gun".to_owned());
  let grid = initial_grid(&catalog, &seed, 20, Anchor::Center).unwrap();
  assert_eq!(grid.size(), 20);
  assert!(grid.alive_count() < 36);
}

#[test]
fn default_config_runs() {
  let config = Config::default();
  let catalog = Catalog::builtin();
  let grid = initial_grid(&catalog, &config.seed, config.grid_size, config.anchor).unwrap();
  let mut uni = Universe::new(grid, config.rule, config.edges);
  let ran = uni.run(config.generations, |uni| uni.grid().alive_count() > 0);
  assert_eq!(ran, config.generations);
  assert_eq!(uni.grid().alive_count(), 5);
}
