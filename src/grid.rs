use rustc_hash::FxHashSet;

/// A rectangular block of cells decoded from a pattern string.
///
/// Rows are stored one after another; every row has exactly `cols` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatrix {
  rows: usize,
  cols: usize,
  cells: Vec<bool>,
}

impl PatternMatrix {
  /// Build a matrix from decoded rows, right-padding each row with dead
  /// cells up to the widest one.
  pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let num_rows = rows.len();
    let mut cells = Vec::with_capacity(num_rows * cols);
    for mut row in rows {
      row.resize(cols, false);
      cells.extend(row);
    }

    Self {
      rows: num_rows,
      cols,
      cells,
    }
  }

  pub fn rows(&self) -> usize {
    self.rows
  }

  pub fn cols(&self) -> usize {
    self.cols
  }

  pub fn is_empty(&self) -> bool {
    self.rows == 0 || self.cols == 0
  }

  pub fn get(&self, row: usize, col: usize) -> bool {
    assert!(row < self.rows && col < self.cols);
    self.cells[row * self.cols + col]
  }

  pub fn row(&self, row: usize) -> &[bool] {
    &self.cells[row * self.cols..(row + 1) * self.cols]
  }

  pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
    (0..self.rows).map(move |r| self.row(r))
  }

  pub fn alive_count(&self) -> usize {
    self.cells.iter().filter(|&&c| c).count()
  }
}

impl From<&Grid> for PatternMatrix {
  fn from(grid: &Grid) -> Self {
    Self {
      rows: grid.size,
      cols: grid.size,
      cells: grid.cells.clone(),
    }
  }
}

/// The square board holding one generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
  size: usize,
  cells: Vec<bool>,
}

impl Grid {
  /// An all-dead `size` x `size` grid.
  pub fn new(size: usize) -> Self {
    Self {
      size,
      cells: vec![false; size * size],
    }
  }

  pub(crate) fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
    let mut cells = Vec::with_capacity(size * size);
    for row in 0..size {
      for col in 0..size {
        cells.push(f(row, col));
      }
    }
    Self { size, cells }
  }

  pub fn size(&self) -> usize {
    self.size
  }

  pub fn get(&self, row: usize, col: usize) -> bool {
    assert!(row < self.size && col < self.size, "({}, {}) is outside a grid of size {}", row, col, self.size);
    self.cells[row * self.size + col]
  }

  pub fn set(&mut self, row: usize, col: usize, alive: bool) {
    assert!(row < self.size && col < self.size, "({}, {}) is outside a grid of size {}", row, col, self.size);
    self.cells[row * self.size + col] = alive;
  }

  pub fn row(&self, row: usize) -> &[bool] {
    &self.cells[row * self.size..(row + 1) * self.size]
  }

  pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
    (0..self.size).map(move |r| self.row(r))
  }

  pub fn alive_count(&self) -> usize {
    self.cells.iter().filter(|&&c| c).count()
  }

  /// Coordinates `(row, col)` of every alive cell.
  pub fn live_cells(&self) -> FxHashSet<(usize, usize)> {
    self.cells
      .iter()
      .enumerate()
      .filter(|(_, &alive)| alive)
      .map(|(i, _)| (i / self.size, i % self.size))
      .collect()
  }
}
