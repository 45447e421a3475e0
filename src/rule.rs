use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{self, Display};
use std::str::FromStr;

lazy_static! {
  static ref RULE_REGEX: Regex = Regex::new(r"^[Bb]([0-8]*)/[Ss]([0-8]*)$").unwrap();
}

/// An outer totalistic rule on the Moore neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

/// Bit `n` is set when `n` alive neighbors trigger the transition.
pub(crate) type NeighborMask = u16;

pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Default for Rule {
  fn default() -> Self {
    GAME_OF_LIFE
  }
}

impl Rule {
  /// State of a cell in the next generation.
  pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
    debug_assert!(neighbors <= 8);
    let mask = if alive { self.survival } else { self.birth };
    mask >> neighbors & 1 != 0
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRuleError(String);

impl Display for ParseRuleError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Invalid rule {:?}, expected something like \"B3/S23\"", self.0)
  }
}

impl std::error::Error for ParseRuleError {}

impl FromStr for Rule {
  type Err = ParseRuleError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let captures = RULE_REGEX.captures(s.trim()).ok_or_else(|| ParseRuleError(s.to_owned()))?;
    let mask = |i: usize| {
      captures[i]
        .bytes()
        .fold(0 as NeighborMask, |mask, b| mask | 1 << (b - b'0'))
    };
    Ok(Self {
      birth: mask(1),
      survival: mask(2),
    })
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    let mut b = self.birth;
    while b != 0 {
      write!(f, "{}", b.trailing_zeros())?;
      b &= b - 1;
    }
    write!(f, "/S")?;
    let mut s = self.survival;
    while s != 0 {
      write!(f, "{}", s.trailing_zeros())?;
      s &= s - 1;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn display() {
    assert_eq!(GAME_OF_LIFE.to_string(), "B3/S23");
  }

  #[test]
  fn parse() {
    assert_eq!("B3/S23".parse(), Ok(GAME_OF_LIFE));
    assert_eq!("b3/s32".parse(), Ok(GAME_OF_LIFE));

    let highlife: Rule = "B36/S23".parse().unwrap();
    assert_eq!(highlife.to_string(), "B36/S23");
    assert!(highlife.next_state(false, 6));

    let seeds: Rule = "B2/S".parse().unwrap();
    assert!(!seeds.next_state(true, 2));
  }

  #[test]
  fn parse_invalid() {
    assert!("".parse::<Rule>().is_err());
    assert!("B9/S23".parse::<Rule>().is_err());
    assert!("23/3".parse::<Rule>().is_err());
    assert!("B3S23".parse::<Rule>().is_err());
  }

  proptest! {
    #[test]
    fn life_transitions(alive in any::<bool>(), neighbors in 0u8..=8) {
      let expected = match (alive, neighbors) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
      };
      prop_assert_eq!(GAME_OF_LIFE.next_state(alive, neighbors), expected);
    }
  }
}
