use lifegrid::*;
use log::{debug, info};
use std::env;

fn main() -> anyhow::Result<()> {
  simple_logger::init_with_level(log::Level::Info)?;

  let mut config = Config::default();
  if let Some(seed) = env::args().nth(1) {
    config.seed = seed.parse()?;
  }
  if let Some(path) = env::args().nth(2) {
    config.snapshot = Some(path.into());
  }
  info!("Starting lifegrid v{} with {} on a {}x{} grid ({})",
    env!("CARGO_PKG_VERSION"), config.seed, config.grid_size, config.grid_size, config.rule);

  let catalog = Catalog::builtin();
  let grid = initial_grid_or_blank(&catalog, &config.seed, config.grid_size, config.anchor);
  let mut uni = Universe::new(grid, config.rule, config.edges);
  info!("Running {} with {:?} edges for up to {} generations", uni.rule(), uni.edges(), config.generations);

  let ran = uni.run(config.generations, |uni| {
    debug!("generation {}: {} alive", uni.generation(), uni.grid().alive_count());
    uni.grid().alive_count() > 0
  });
  info!("Stopped after {} generations with {} alive cells", ran, uni.grid().alive_count());

  println!("{}", rle::write(&PatternMatrix::from(uni.grid())));

  if let Some(path) = &config.snapshot {
    export::save_image(uni.grid(), path, config.cell_size)?;
    info!("Saved {}", path.display());
  }
  Ok(())
}
