use crate::grid::Grid;
use crate::tilesets::{Language, TileSet};
use crate::{Error, Location};

/// Static configuration of a game: the tile distribution, the premium grid,
/// and the square the first move must cover.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    tileset: TileSet,
    grid: Grid,
    start: Location,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Language::EN)
    }
}

impl GameConfig {
    /// Create a configuration with the tile distribution of `language`,
    /// the standard grid and the centre square `h8` as start.
    ///
    /// ## Examples
    ///```
    /// use scrabble_engine::{GameConfig, Language, Location};
    ///
    /// let config = GameConfig::new(Language::NL).with_start(Location::new('g', 7));
    ///```
    /// See also:
    /// - [`with_tileset`](GameConfig::with_tileset)
    /// - [`with_grid`](GameConfig::with_grid)
    /// - [`with_grid_from_strings`](GameConfig::with_grid_from_strings)
    #[must_use]
    pub fn new(language: Language) -> GameConfig {
        GameConfig {
            tileset: TileSet::new(language),
            grid: Grid::default(),
            start: Location::new('h', 8),
        }
    }

    /// Use a custom tile distribution
    #[must_use]
    pub fn with_tileset(mut self, tileset: TileSet) -> GameConfig {
        self.tileset = tileset;
        self
    }

    /// Use a custom premium grid
    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> GameConfig {
        self.grid = grid;
        self
    }

    /// Set the premium grid from its string representation.
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed, see [`Grid::from_strings`].
    pub fn with_grid_from_strings<S: AsRef<str>>(mut self, grid: &[S]) -> Result<GameConfig, Error> {
        self.grid = Grid::from_strings(grid)?;
        Ok(self)
    }

    /// Set the square the first move must cover.
    /// An off-board start makes every first move illegal.
    #[must_use]
    pub fn with_start(mut self, start: Location) -> GameConfig {
        self.start = start;
        self
    }

    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Location {
        self.start
    }
}
