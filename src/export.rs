use image::error::{ImageError, LimitError, LimitErrorKind};
use image::{GrayImage, ImageResult, Luma};
use std::convert::TryFrom;
use std::path::Path;
use crate::grid::Grid;

const ALIVE_SHADE: u8 = 0xff;
const DEAD_SHADE: u8 = 0x00;

/// Render `grid` as text, `#` for alive and `.` for dead, one line per row.
pub fn debug(grid: &Grid) -> String {
  let mut output = String::with_capacity(grid.size() * (grid.size() + 1));
  for row in grid.iter_rows() {
    output.extend(row.iter().map(|&alive| if alive { '#' } else { '.' }));
    output.push('\n');
  }
  output
}

/// Draw every cell as a `cell_size` x `cell_size` square.
///
/// Fails with a dimension limit error when the side of the image does not
/// fit in a `u32`.
pub fn to_image(grid: &Grid, cell_size: u32) -> ImageResult<GrayImage> {
  let cell_size = cell_size.max(1);
  let side = u32::try_from(grid.size())
    .ok()
    .and_then(|size| size.checked_mul(cell_size))
    .ok_or_else(|| ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError)))?;

  Ok(GrayImage::from_fn(side, side, |x, y| {
    let alive = grid.get((y / cell_size) as usize, (x / cell_size) as usize);
    Luma([if alive { ALIVE_SHADE } else { DEAD_SHADE }])
  }))
}

/// Save a snapshot of `grid`; the format follows the extension of `path`.
pub fn save_image(grid: &Grid, path: impl AsRef<Path>, cell_size: u32) -> ImageResult<()> {
  to_image(grid, cell_size)?.save(path)
}
