use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::BuildHasherDefault;

/// Informal grouping of catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
  StillLife,
  Oscillator,
  Spaceship,
  Methuselah,
  Gun,
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Category::StillLife => "still life",
      Category::Oscillator => "oscillator",
      Category::Spaceship => "spaceship",
      Category::Methuselah => "methuselah",
      Category::Gun => "gun",
    };
    f.write_str(name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
  pub category: Category,
  /// The pattern in the notation read by [`crate::rle::read`].
  pub rle: String,
}

const BUILTIN: &[(&str, Category, &str)] = &[
  ("block", Category::StillLife, "2o$2o!"),
  ("beehive", Category::StillLife, "b2o$o2bo$b2o!"),
  ("loaf", Category::StillLife, "b2o$o2bo$bobo$2bo!"),
  ("boat", Category::StillLife, "2o$obo$bo!"),
  ("blinker", Category::Oscillator, "3o!"),
  ("toad", Category::Oscillator, "b3o$3o!"),
  ("beacon", Category::Oscillator, "2o$o$3bo$2b2o!"),
  (
    "pulsar",
    Category::Oscillator,
    "2b3o3b3o$$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o$$\
     2b3o3b3o$o4bobo4bo$o4bobo4bo$o4bobo4bo$$2b3o3b3o!",
  ),
  ("glider", Category::Spaceship, "bo$2bo$3o!"),
  ("lwss", Category::Spaceship, "bo2bo$o4b$o3bo$4o!"),
  ("r_pentomino", Category::Methuselah, "b2o$2o$bo!"),
  (
    "gosper_glider_gun",
    Category::Gun,
    "24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$\
     2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
  ),
];

/// Older spellings still accepted by [`Catalog::get`].
const ALIASES: &[(&str, &str)] = &[
  ("blinkers", "blinker"),
  ("rPentomino", "r_pentomino"),
];

/// Named patterns, kept in insertion order.
///
/// Built once at startup and handed to whoever needs to resolve a name.
#[derive(Debug, Clone)]
pub struct Catalog {
  patterns: IndexMap<String, Entry, BuildHasherDefault<FxHasher>>,
}

impl Default for Catalog {
  fn default() -> Self {
    Self::builtin()
  }
}

impl Catalog {
  /// An empty catalog.
  pub fn new() -> Self {
    Self {
      patterns: IndexMap::default(),
    }
  }

  /// The well-known patterns shipped with the crate.
  pub fn builtin() -> Self {
    let mut catalog = Self::new();
    for &(name, category, rle) in BUILTIN {
      catalog.insert(name, category, rle);
    }
    catalog
  }

  /// Add a pattern, replacing any previous one with the same name.
  pub fn insert(&mut self, name: impl Into<String>, category: Category, rle: impl Into<String>) {
    self.patterns.insert(name.into(), Entry {
      category,
      rle: rle.into(),
    });
  }

  /// Look up `name`, falling back to its alias target when no entry has
  /// that exact name.
  pub fn get(&self, name: &str) -> Option<&Entry> {
    self.patterns.get(name).or_else(|| {
      ALIASES
        .iter()
        .find(|&&(alias, _)| alias == name)
        .and_then(|&(_, target)| self.patterns.get(target))
    })
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.patterns.keys().map(String::as_str)
  }

  pub fn in_category(&self, category: Category) -> impl Iterator<Item = (&str, &Entry)> {
    self.patterns
      .iter()
      .filter(move |(_, entry)| entry.category == category)
      .map(|(name, entry)| (name.as_str(), entry))
  }

  pub fn len(&self) -> usize {
    self.patterns.len()
  }

  pub fn is_empty(&self) -> bool {
    self.patterns.is_empty()
  }
}
