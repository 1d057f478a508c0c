use crate::tilesets::TileSet;
use crate::Tile;
use multiset::HashMultiSet;
use rand::Rng;
use std::ops::Deref;

/// The shared supply of tiles that have not been drawn yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileBag(Vec<Tile>);

impl Deref for TileBag {
    type Target = [Tile];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TileBag {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    fn from_tileset(tileset: &TileSet) -> Self {
        let mut bag = Vec::with_capacity(tileset.total());
        for &(letter, count, points) in tileset.tiles() {
            for _ in 0..count {
                bag.push(Tile::new(letter, points));
            }
        }
        Self(bag)
    }

    /// Remove a random tile from the bag. Every tile in the bag is equally likely.
    /// Returns `None` when the bag is empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Tile> {
        if self.0.is_empty() {
            return None;
        }
        let i = rng.gen_range(0..self.0.len());
        let tile = self.0.swap_remove(i);
        tracing::trace!(letter = %tile.letter(), left = self.0.len(), "draw tile");
        Some(tile)
    }

    /// Put tiles back into the bag
    pub fn put_back<I: IntoIterator<Item = Tile>>(&mut self, tiles: I) {
        self.0.extend(tiles);
    }

    /// Remove a specific tile with `letter` from the bag.
    pub(crate) fn take(&mut self, letter: char) -> Option<Tile> {
        let letter = letter.to_ascii_uppercase();
        let i = self.0.iter().position(|tile| tile.letter() == letter)?;
        Some(self.0.swap_remove(i))
    }

    /// Count of the remaining tiles per letter
    pub fn letters(&self) -> HashMultiSet<char> {
        let mut letters = HashMultiSet::new();
        for tile in &self.0 {
            letters.insert(tile.letter());
        }
        letters
    }
}

impl From<&TileSet> for TileBag {
    fn from(tileset: &TileSet) -> Self {
        TileBag::from_tileset(tileset)
    }
}
