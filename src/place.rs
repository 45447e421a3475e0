//! Building the first generation: a catalog pattern dropped at an anchor, or
//! random noise.

use log::{debug, info, warn};
use rand::Rng;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use crate::catalog::Catalog;
use crate::grid::{Grid, PatternMatrix};
use crate::rle::{self, RleError};

/// Where a pattern goes inside the grid.
///
/// Every anchor resolves to a `(row, col)` fraction in `[0, 1]`: 0 puts the
/// pattern flush against the top or left edge, 1 flush against the bottom or
/// right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
  TopLeft,
  Top,
  TopRight,
  Left,
  Center,
  Right,
  BottomLeft,
  Bottom,
  BottomRight,
  Fraction { row: f64, col: f64 },
}

impl Default for Anchor {
  fn default() -> Self {
    Anchor::Center
  }
}

impl Anchor {
  pub fn fraction(&self) -> (f64, f64) {
    match *self {
      Anchor::TopLeft => (0.0, 0.0),
      Anchor::Top => (0.0, 0.5),
      Anchor::TopRight => (0.0, 1.0),
      Anchor::Left => (0.5, 0.0),
      Anchor::Center => (0.5, 0.5),
      Anchor::Right => (0.5, 1.0),
      Anchor::BottomLeft => (1.0, 0.0),
      Anchor::Bottom => (1.0, 0.5),
      Anchor::BottomRight => (1.0, 1.0),
      Anchor::Fraction { row, col } => (row.max(0.0).min(1.0), col.max(0.0).min(1.0)),
    }
  }

  /// Top-left cell of a `rows` x `cols` pattern in a grid of size `grid_size`.
  pub fn offset(&self, rows: usize, cols: usize, grid_size: usize) -> (usize, usize) {
    let (row_frac, col_frac) = self.fraction();
    let axis = |frac: f64, len: usize| (frac * grid_size.saturating_sub(len) as f64).floor() as usize;
    (axis(row_frac, rows), axis(col_frac, cols))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAnchorError(String);

impl fmt::Display for ParseAnchorError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Unknown anchor {:?}", self.0)
  }
}

impl std::error::Error for ParseAnchorError {}

impl FromStr for Anchor {
  type Err = ParseAnchorError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(match s {
      "top_left" => Anchor::TopLeft,
      "top" => Anchor::Top,
      "top_right" => Anchor::TopRight,
      "left" => Anchor::Left,
      "center" => Anchor::Center,
      "right" => Anchor::Right,
      "bottom_left" => Anchor::BottomLeft,
      "bottom" => Anchor::Bottom,
      "bottom_right" => Anchor::BottomRight,
      _ => return Err(ParseAnchorError(s.to_owned())),
    })
  }
}

/// Copy `pattern` into a blank grid at `anchor`.
///
/// Whatever does not fit is clipped.
pub fn place(pattern: &PatternMatrix, grid_size: usize, anchor: Anchor) -> Grid {
  let (top, left) = anchor.offset(pattern.rows(), pattern.cols(), grid_size);
  let rows = pattern.rows().min(grid_size - top);
  let cols = pattern.cols().min(grid_size - left);
  if rows < pattern.rows() || cols < pattern.cols() {
    warn!(
      "{}x{} pattern does not fit in a grid of size {}, clipping to {}x{}",
      pattern.rows(), pattern.cols(), grid_size, rows, cols,
    );
  }

  let mut grid = Grid::new(grid_size);
  for r in 0..rows {
    for c in 0..cols {
      if pattern.get(r, c) {
        grid.set(top + r, left + c, true);
      }
    }
  }

  debug!("placed {}x{} pattern at ({}, {})", pattern.rows(), pattern.cols(), top, left);
  grid
}

/// A grid where every cell is alive with probability 1/2.
pub fn place_random(grid_size: usize) -> Grid {
  place_random_with(grid_size, &mut rand::thread_rng())
}

pub fn place_random_with<R: Rng + ?Sized>(grid_size: usize, rng: &mut R) -> Grid {
  Grid::from_fn(grid_size, |_, _| rng.gen())
}

/// How the first generation is seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
  /// A pattern looked up in the catalog.
  Named(String),
  Random,
}

impl FromStr for Seed {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(match s {
      "random" => Seed::Random,
      name => Seed::Named(name.to_owned()),
    })
  }
}

impl fmt::Display for Seed {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Seed::Named(name) => f.write_str(name),
      Seed::Random => f.write_str("random"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
  PatternNotFound(String),
  Rle(RleError),
}

impl fmt::Display for SeedError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SeedError::PatternNotFound(name) => write!(f, "Pattern {:?} not found", name),
      SeedError::Rle(e) => write!(f, "Bad pattern: {}", e),
    }
  }
}

impl std::error::Error for SeedError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      SeedError::PatternNotFound(_) => None,
      SeedError::Rle(e) => Some(e),
    }
  }
}

impl From<RleError> for SeedError {
  fn from(e: RleError) -> Self {
    SeedError::Rle(e)
  }
}

/// Build the first generation for `seed`.
pub fn initial_grid(
  catalog: &Catalog,
  seed: &Seed,
  grid_size: usize,
  anchor: Anchor,
) -> Result<Grid, SeedError> {
  match seed {
    Seed::Random => {
      info!("seeding a {0}x{0} grid at random", grid_size);
      Ok(place_random(grid_size))
    }
    Seed::Named(name) => {
      let entry = catalog
        .get(name)
        .ok_or_else(|| SeedError::PatternNotFound(name.clone()))?;
      info!("seeding with {} {:?} ({})", entry.category, name, entry.rle);
      let pattern = rle::read(&entry.rle)?;
      Ok(place(&pattern, grid_size, anchor))
    }
  }
}

/// Like [`initial_grid`], but falls back to a blank grid after logging the
/// error.
pub fn initial_grid_or_blank(
  catalog: &Catalog,
  seed: &Seed,
  grid_size: usize,
  anchor: Anchor,
) -> Grid {
  initial_grid(catalog, seed, grid_size, anchor).unwrap_or_else(|e| {
    warn!("{}; starting from a blank grid", e);
    Grid::new(grid_size)
  })
}
