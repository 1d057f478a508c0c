use crate::tiles::{self, Tile};
use multiset::HashMultiSet;
use std::fmt;
use std::ops::Deref;
use tinyvec::ArrayVec;

/// Maximum number of tiles on a rack.
pub const RACK_SIZE: usize = 7;

/// The tiles held by one player, at most [`RACK_SIZE`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rack(ArrayVec<[Tile; RACK_SIZE]>);

impl Deref for Rack {
    type Target = [Tile];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Rack {
    pub fn new() -> Rack {
        Rack(ArrayVec::new())
    }

    /// Check if the rack holds [`RACK_SIZE`] tiles.
    pub fn is_full(&self) -> bool {
        self.0.len() == RACK_SIZE
    }

    /// Add a tile. Returns the tile back if the rack is full.
    pub fn push(&mut self, tile: Tile) -> Option<Tile> {
        self.0.try_push(tile)
    }

    /// Index of the first tile with `letter`.
    pub fn position(&self, letter: char) -> Option<usize> {
        let letter = letter.to_ascii_uppercase();
        self.0.iter().position(|tile| tile.letter() == letter)
    }

    /// Remove the first tile with `letter`, leaving other tiles with the same letter.
    pub fn take(&mut self, letter: char) -> Option<Tile> {
        self.position(letter).map(|i| self.0.remove(i))
    }

    /// The letters on the rack as a multiset.
    pub fn letters(&self) -> HashMultiSet<char> {
        multiset_of(self.0.iter().map(Tile::letter))
    }

    /// Check that every letter in `letters` is on the rack, counting duplicates.
    ///
    /// ## Examples
    /// ```
    /// # use scrabble_engine::{Rack, Tile};
    /// let mut rack = Rack::new();
    /// for &letter in &['a', 'a', 'b'] {
    ///     rack.push(Tile::new(letter, 1));
    /// }
    /// assert!(rack.holds(&['a', 'b', 'a']));
    /// assert!(!rack.holds(&['b', 'b']));
    /// ```
    pub fn holds(&self, letters: &[char]) -> bool {
        let wanted = multiset_of(letters.iter().map(char::to_ascii_uppercase));
        let held = self.letters();
        wanted
            .distinct_elements()
            .all(|letter| wanted.count_of(letter) <= held.count_of(letter))
    }

    /// Sum of the points of the tiles on the rack
    pub fn points(&self) -> u32 {
        tiles::points(self.0.iter())
    }
}

fn multiset_of<I: IntoIterator<Item = char>>(letters: I) -> HashMultiSet<char> {
    let mut set = HashMultiSet::new();
    for letter in letters {
        set.insert(letter);
    }
    set
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letters: String = self.0.iter().map(Tile::letter).collect();
        write!(f, "[{}]", letters)
    }
}
