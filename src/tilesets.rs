use crate::{Error, Tile};
use std::collections::HashSet;

/// These languages are supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// English
    EN,
    /// Dutch
    NL,
}

/// letter, count, points
pub type TileInfo = (char, u32, u32);

const EN: &[TileInfo] = &[
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
];

const NL: &[TileInfo] = &[
    ('A', 6, 1),
    ('B', 2, 3),
    ('C', 2, 5),
    ('D', 5, 2),
    ('E', 18, 1),
    ('F', 2, 4),
    ('G', 3, 3),
    ('H', 2, 4),
    ('I', 4, 1),
    ('J', 2, 4),
    ('K', 3, 3),
    ('L', 3, 3),
    ('M', 3, 3),
    ('N', 10, 1),
    ('O', 6, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 5, 2),
    ('S', 5, 2),
    ('T', 5, 2),
    ('U', 3, 4),
    ('V', 2, 4),
    ('W', 2, 5),
    ('X', 1, 8),
    ('Y', 1, 8),
    ('Z', 2, 4),
];

/// A tileset for `scrabble`. It contains the tile distribution for a language:
/// the number of tiles for each letter, and the points of each letter.
/// Blank tiles are not part of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSet {
    tiles: Vec<TileInfo>,
}

impl Default for TileSet {
    fn default() -> Self {
        Self::new(Language::EN)
    }
}

impl TileSet {
    /// Return a new `TileSet` for language.
    pub fn new(language: Language) -> TileSet {
        let tiles = match language {
            Language::EN => EN,
            Language::NL => NL,
        };
        TileSet {
            tiles: tiles.to_vec(),
        }
    }

    /// Create a custom tileset from (letter, count, points) entries.
    /// Letters are converted to upper case.
    /// ## Errors
    /// If a letter is not an ascii letter, or occurs more than once.
    /// ## Examples
    /// ```
    /// # use scrabble_engine::{TileSet, Error};
    /// let tileset = TileSet::from_tiles(&[('a', 10, 1), ('z', 2, 10)])?;
    /// assert_eq!(tileset.total(), 12);
    /// assert_eq!(tileset.points('Z'), 10);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_tiles(tiles: &[TileInfo]) -> Result<TileSet, Error> {
        let mut seen = HashSet::new();
        let mut checked = Vec::with_capacity(tiles.len());
        for &(letter, count, points) in tiles {
            if !letter.is_ascii_alphabetic() {
                return Err(Error::InvalidLetter(letter));
            }
            let letter = letter.to_ascii_uppercase();
            if !seen.insert(letter) {
                return Err(Error::DuplicateLetter(letter));
            }
            checked.push((letter, count, points));
        }
        Ok(TileSet { tiles: checked })
    }

    fn info(&self, letter: char) -> Option<&TileInfo> {
        let letter = letter.to_ascii_uppercase();
        self.tiles.iter().find(|info| info.0 == letter)
    }

    /// Return the points for letter, or 0 if not found
    pub fn points(&self, letter: char) -> u32 {
        self.info(letter).map_or(0, |info| info.2)
    }

    /// Return the number of tiles with this letter in tileset, or 0 if not found
    pub fn count(&self, letter: char) -> u32 {
        self.info(letter).map_or(0, |info| info.1)
    }

    /// Return a tile for letter, if the letter is part of the tileset
    pub fn tile(&self, letter: char) -> Option<Tile> {
        self.info(letter).map(|&(letter, _, points)| Tile::new(letter, points))
    }

    /// Total number of tiles in a full bag
    pub fn total(&self) -> usize {
        self.tiles.iter().map(|info| info.1 as usize).sum()
    }

    /// The (letter, count, points) entries
    pub fn tiles(&self) -> &[TileInfo] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        assert_eq!(TileSet::new(Language::EN).total(), 98);
        assert_eq!(TileSet::new(Language::NL).total(), 100);
    }

    #[test]
    fn test_lookup() {
        let tileset = TileSet::default();
        assert_eq!(tileset.points('q'), 10);
        assert_eq!(tileset.count('E'), 12);
        assert_eq!(tileset.points('!'), 0);
        assert_eq!(tileset.tile('c'), Some(Tile::new('C', 3)));
        assert_eq!(tileset.tile('1'), None);
    }

    #[test]
    fn test_custom_errors() {
        assert_eq!(
            TileSet::from_tiles(&[('a', 1, 1), ('A', 1, 1)]),
            Err(Error::DuplicateLetter('A'))
        );
        assert_eq!(
            TileSet::from_tiles(&[('1', 1, 1)]),
            Err(Error::InvalidLetter('1'))
        );
    }
}
