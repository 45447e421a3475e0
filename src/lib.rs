//! Conway's Game of Life on a fixed square grid, seeded from a compact
//! run-length pattern notation.

pub mod catalog;
pub mod config;
pub mod export;
pub mod grid;
pub mod place;
pub mod rle;
pub mod rule;
pub mod universe;

pub use catalog::{Catalog, Category};
pub use config::Config;
pub use grid::{Grid, PatternMatrix};
pub use place::{initial_grid, initial_grid_or_blank, place, place_random, Anchor, Seed, SeedError};
pub use rle::{RleError, RleResult};
pub use rule::{Rule, GAME_OF_LIFE};
pub use universe::{step, Edges, Universe};
