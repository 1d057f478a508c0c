//! Basic types for working with scrabble tiles.
use std::fmt;

/// A lettered tile with its point value.
///
/// Tiles with the same letter are interchangeable; a rack or bag can hold several of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    letter: char,
    points: u32,
}

impl Tile {
    /// Create a new tile. The letter is stored in upper case.
    pub fn new(letter: char, points: u32) -> Tile {
        Tile {
            letter: letter.to_ascii_uppercase(),
            points,
        }
    }

    /// The letter on the tile
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The point value of the tile
    pub fn points(&self) -> u32 {
        self.points
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter)
    }
}

/// Total points of a list of tiles
pub fn points<'a, I: IntoIterator<Item = &'a Tile>>(tiles: I) -> u32 {
    tiles.into_iter().map(Tile::points).sum()
}
