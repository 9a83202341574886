//! Key parsing for player input.

use std::fmt;

/// Which exit to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The left exit (`e`, esquerda).
    Left,
    /// The right exit (`d`, direita).
    Right,
}

impl Direction {
    /// The key that selects this direction.
    pub fn key(&self) -> char {
        match self {
            Self::Left => 'e',
            Self::Right => 'd',
        }
    }

    /// Display name used in prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "esquerda",
            Self::Right => "direita",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Take an exit.
    Go(Direction),
    /// Stop exploring.
    Quit,
    /// Any key that is not a known option.
    Invalid(char),
}

impl Choice {
    /// Parse a single key, ignoring case.
    pub fn parse(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'e' => Self::Go(Direction::Left),
            'd' => Self::Go(Direction::Right),
            's' => Self::Quit,
            _ => Self::Invalid(key),
        }
    }
}
