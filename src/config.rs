use std::path::PathBuf;
use crate::place::{Anchor, Seed};
use crate::rule::{Rule, GAME_OF_LIFE};
use crate::universe::Edges;

/// Settings for one headless run.
#[derive(Debug, Clone)]
pub struct Config {
  /// Cells along each side of the square grid.
  pub grid_size: usize,
  pub seed: Seed,
  pub anchor: Anchor,
  pub rule: Rule,
  pub edges: Edges,
  /// Upper bound on ticks; the run also ends once nothing is alive.
  pub generations: u64,
  /// Where to save an image of the last generation, if anywhere.
  pub snapshot: Option<PathBuf>,
  pub cell_size: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      grid_size: 120,
      seed: Seed::Named("glider".to_owned()),
      anchor: Anchor::Center,
      rule: GAME_OF_LIFE,
      edges: Edges::Bounded,
      generations: 200,
      snapshot: None,
      cell_size: 8,
    }
  }
}
