//! The single-line run-length pattern notation.
//!
//! A pattern is a list of rows separated by `$`, optionally terminated by `!`.
//! Inside a row, `o` is an alive cell and `b` a dead one; a decimal number in
//! front of either repeats it. So `b2o$2o!` is
//!
//! ```text
//! .##
//! ##.
//! ```
//!
//! Anything else is skipped, which keeps the reader lenient towards
//! whitespace and notation it does not know yet. Unlike full RLE files there
//! is no header line and `$` never takes a count.

use itertools::Itertools;
use log::debug;
use std::fmt;
use crate::grid::PatternMatrix;

const ALIVE: char = 'o';
const DEAD: char = 'b';
const ROW_DELIMITER: char = '$';
const TERMINATOR: char = '!';

/// Widest row the reader will build.
pub const MAX_PATTERN_WIDTH: usize = 1 << 16;

/// Most cells, dead padding included, the reader will build.
pub const MAX_PATTERN_AREA: usize = 1 << 22;

/// Result type returned by fallible pattern routines.
pub type RleResult<T> = Result<T, RleError>;

/// Error encountered while reading a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RleError {
  /// No row of the pattern emitted a single cell.
  EmptyPattern,
  /// A repeat count does not fit in a machine integer.
  InvalidCount,
  /// A row is wider than [`MAX_PATTERN_WIDTH`], or the padded pattern
  /// holds more than [`MAX_PATTERN_AREA`] cells.
  TooBig,
}

impl fmt::Display for RleError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RleError::EmptyPattern => write!(f, "Pattern contains no cells"),
      RleError::InvalidCount => write!(f, "Invalid count"),
      RleError::TooBig => write!(
        f,
        "Pattern is wider than {} cells or larger than {} cells",
        MAX_PATTERN_WIDTH, MAX_PATTERN_AREA,
      ),
    }
  }
}

impl std::error::Error for RleError {}

/// Read a pattern into a rectangular matrix.
///
/// Rows shorter than the widest one are padded with dead cells.
pub fn read(src: impl AsRef<str>) -> RleResult<PatternMatrix> {
  let mut src = src.as_ref();
  if let Some(end) = src.find(TERMINATOR) {
    src = &src[..end];
  }

  let mut rows = vec![];
  let mut width = 0;
  for segment in src.split(ROW_DELIMITER) {
    let row = read_row(segment)?;
    width = width.max(row.len());
    rows.push(row);
    // checked per row so unpadded rows never pile up past the limit either
    if rows.len().saturating_mul(width) > MAX_PATTERN_AREA {
      return Err(RleError::TooBig);
    }
  }

  let pattern = PatternMatrix::from_rows(rows);
  if pattern.is_empty() {
    return Err(RleError::EmptyPattern);
  }

  debug!("read {}x{} pattern with {} alive cells", pattern.rows(), pattern.cols(), pattern.alive_count());
  Ok(pattern)
}

fn read_row(mut src: &str) -> RleResult<Vec<bool>> {
  let mut row = vec![];
  let mut count = None;

  while let Some(c) = src.chars().next() {
    if c.is_ascii_digit() {
      let num_len = src.find(|c: char| !c.is_ascii_digit()).unwrap_or(src.len());
      count = Some(src[..num_len].parse::<usize>().map_err(|_| RleError::InvalidCount)?);
      src = &src[num_len..];
      continue;
    }

    let alive = match c {
      ALIVE => Some(true),
      DEAD => Some(false),
      _ => None,
    };
    if let Some(alive) = alive {
      let num = count.take().unwrap_or(1);
      if num > MAX_PATTERN_WIDTH - row.len() {
        return Err(RleError::TooBig);
      }
      row.resize(row.len() + num, alive);
    }

    src = &src[c.len_utf8()..];
  }

  Ok(row)
}

/// Write a pattern in the same notation.
///
/// Trailing dead cells of each row are left out, so reading the output back
/// drops all-dead columns on the right.
pub fn write(pattern: &PatternMatrix) -> String {
  let mut output = String::new();

  for (i, row) in pattern.iter_rows().enumerate() {
    if i > 0 {
      RleUnit::NextRow.write(1, &mut output);
    }

    let len = row.iter().rposition(|&c| c).map_or(0, |last| last + 1);
    for (alive, run) in &row[..len].iter().group_by(|&&c| c) {
      let unit = if alive { RleUnit::Alive } else { RleUnit::Dead };
      unit.write(run.count(), &mut output);
    }
  }

  output.push(TERMINATOR);
  output
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RleUnit {
  Dead,
  Alive,
  NextRow,
}

impl RleUnit {
  fn write(&self, num: usize, s: &mut String) {
    let c = match self {
      Self::Dead => DEAD,
      Self::Alive => ALIVE,
      Self::NextRow => ROW_DELIMITER,
    };

    if num != 1 {
      s.push_str(&num.to_string());
    }
    s.push(c);
  }
}
