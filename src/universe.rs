use log::trace;
use crate::grid::Grid;
use crate::rule::Rule;

/// What lies beyond the edge of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edges {
  /// Cells outside the grid are permanently dead.
  Bounded,
  /// The grid wraps around on all four edges.
  Toroidal,
}

impl Default for Edges {
  fn default() -> Self {
    Edges::Bounded
  }
}

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
  (-1, -1), (-1, 0), (-1, 1),
  (0, -1), (0, 1),
  (1, -1), (1, 0), (1, 1),
];

/// Compute the next generation of `grid`.
///
/// Every cell of the result only depends on `grid`, never on cells already
/// written to the result.
pub fn step(grid: &Grid, rule: Rule, edges: Edges) -> Grid {
  Grid::from_fn(grid.size(), |row, col| {
    rule.next_state(grid.get(row, col), live_neighbors(grid, row, col, edges))
  })
}

fn live_neighbors(grid: &Grid, row: usize, col: usize, edges: Edges) -> u8 {
  let size = grid.size() as isize;
  NEIGHBOR_OFFSETS
    .iter()
    .filter(|&&(dr, dc)| {
      let r = row as isize + dr;
      let c = col as isize + dc;
      match edges {
        Edges::Bounded => {
          r >= 0 && r < size && c >= 0 && c < size && grid.get(r as usize, c as usize)
        }
        Edges::Toroidal => {
          grid.get(r.rem_euclid(size) as usize, c.rem_euclid(size) as usize)
        }
      }
    })
    .count() as u8
}

/// Owns the current generation and replaces it once per tick.
#[derive(Debug, Clone)]
pub struct Universe {
  grid: Grid,
  rule: Rule,
  edges: Edges,
  generation: u64,
}

impl Universe {
  pub fn new(grid: Grid, rule: Rule, edges: Edges) -> Self {
    Self {
      grid,
      rule,
      edges,
      generation: 0,
    }
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  pub fn into_grid(self) -> Grid {
    self.grid
  }

  pub fn rule(&self) -> Rule {
    self.rule
  }

  pub fn edges(&self) -> Edges {
    self.edges
  }

  /// Number of ticks since the universe was created.
  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn step(&mut self) {
    self.grid = step(&self.grid, self.rule, self.edges);
    self.generation += 1;
    trace!("generation {}: {} alive", self.generation, self.grid.alive_count());
  }

  /// `num_gen` is number of generations.
  pub fn simulate(&mut self, num_gen: u64) {
    for _ in 0..num_gen {
      self.step();
    }
  }

  /// Advance up to `max_gen` generations, asking `keep_going` before every
  /// tick whether to continue.
  ///
  /// Returns the number of generations actually simulated.
  pub fn run(&mut self, max_gen: u64, mut keep_going: impl FnMut(&Self) -> bool) -> u64 {
    let start = self.generation;
    while self.generation - start < max_gen && keep_going(self) {
      self.step();
    }
    self.generation - start
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::export::debug;
  use crate::rule::GAME_OF_LIFE;
  use pretty_assertions::assert_eq;
  use proptest::collection::vec;
  use proptest::prelude::*;

  fn grid_from(rows: &[&str]) -> Grid {
    Grid::from_fn(rows.len(), |r, c| rows[r].as_bytes()[c] == b'#')
  }

  fn life(grid: &Grid) -> Grid {
    step(grid, GAME_OF_LIFE, Edges::Bounded)
  }

  #[test]
  fn block_is_still() {
    let grid = grid_from(&[
      "....",
      ".##.",
      ".##.",
      "....",
    ]);
    assert_eq!(debug(&life(&grid)), debug(&grid));
  }

  #[test]
  fn blinker_oscillates() {
    let grid = grid_from(&[
      ".....",
      ".....",
      ".###.",
      ".....",
      ".....",
    ]);
    let next = life(&grid);
    assert_eq!(debug(&next), "\
.....
..#..
..#..
..#..
.....
");
    assert_eq!(life(&next), grid);
  }

  #[test]
  fn glider_moves() {
    let grid = grid_from(&[
      ".#....",
      "..#...",
      "###...",
      "......",
      "......",
      "......",
    ]);
    let mut uni = Universe::new(grid, GAME_OF_LIFE, Edges::Bounded);
    uni.simulate(4);
    assert_eq!(uni.generation(), 4);
    assert_eq!(debug(uni.grid()), "\
......
..#...
...#..
.###..
......
......
");
  }

  #[test]
  fn bounded_edges_clip() {
    let grid = grid_from(&[
      ".###.",
      ".....",
      ".....",
      ".....",
      ".....",
    ]);
    assert_eq!(debug(&life(&grid)), "\
..#..
..#..
.....
.....
.....
");
  }

  #[test]
  fn toroidal_edges_wrap() {
    let grid = grid_from(&[
      ".###.",
      ".....",
      ".....",
      ".....",
      ".....",
    ]);
    let next = step(&grid, GAME_OF_LIFE, Edges::Toroidal);
    assert_eq!(debug(&next), "\
..#..
..#..
.....
.....
..#..
");
    assert_eq!(step(&next, GAME_OF_LIFE, Edges::Toroidal), grid);
  }

  #[test]
  fn toroidal_glider_returns() {
    let grid = grid_from(&[
      ".#......",
      "..#.....",
      "###.....",
      "........",
      "........",
      "........",
      "........",
      "........",
    ]);
    let mut uni = Universe::new(grid.clone(), GAME_OF_LIFE, Edges::Toroidal);
    uni.simulate(4 * 8);
    assert_eq!(uni.into_grid(), grid);
  }

  #[test]
  fn run_stops_when_asked() {
    let grid = grid_from(&[
      "...",
      ".#.",
      "...",
    ]);
    let mut uni = Universe::new(grid, GAME_OF_LIFE, Edges::Bounded);
    let ran = uni.run(100, |uni| uni.grid().alive_count() > 0);
    assert_eq!(ran, 1);
    assert_eq!(uni.generation(), 1);

    let ran = uni.run(5, |_| true);
    assert_eq!(ran, 5);
    assert_eq!(uni.generation(), 6);
  }

  #[test]
  fn keeps_rule_and_edges() {
    let highlife = "B36/S23".parse::<Rule>().unwrap();
    let mut uni = Universe::new(Grid::new(4), highlife, Edges::Toroidal);
    uni.simulate(2);
    assert_eq!(uni.rule(), highlife);
    assert_eq!(uni.edges(), Edges::Toroidal);
    assert_eq!(uni.generation(), 2);
  }

  #[test]
  fn empty_grid() {
    assert_eq!(life(&Grid::new(0)), Grid::new(0));
    assert_eq!(life(&Grid::new(3)), Grid::new(3));
  }

  proptest! {
    #[test]
    fn center_follows_rule(cells in vec(any::<bool>(), 9)) {
      let grid = Grid::from_fn(3, |r, c| cells[r * 3 + c]);
      let neighbors = cells.iter().filter(|&&c| c).count() as u8 - cells[4] as u8;
      let next = life(&grid);
      prop_assert_eq!(next.get(1, 1), GAME_OF_LIFE.next_state(cells[4], neighbors));
    }

    #[test]
    fn step_is_pure(cells in vec(any::<bool>(), 64)) {
      let grid = Grid::from_fn(8, |r, c| cells[r * 8 + c]);
      let copy = grid.clone();
      let a = life(&grid);
      let b = life(&grid);
      prop_assert_eq!(&grid, &copy);
      prop_assert_eq!(a, b);
    }
  }
}
