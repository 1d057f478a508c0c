use crate::grid::Grid;
use crate::location::{Location, N};
use crate::tilesets::TileSet;
use crate::{Error, Tile};
use std::fmt;
use std::ops::{Index, IndexMut};

/// State of one square on the board: an optional tile and the premium multipliers
/// that have not been used yet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Square {
    /// The tile on this square, if any
    pub tile: Option<Tile>,
    /// Letter multiplier, 1 when there is no premium or it has been consumed
    pub letter_multiplier: u32,
    /// Word multiplier, 1 when there is no premium or it has been consumed
    pub word_multiplier: u32,
}

impl Default for Square {
    fn default() -> Self {
        Square {
            tile: None,
            letter_multiplier: 1,
            word_multiplier: 1,
        }
    }
}

impl Square {
    /// Check if the square is empty.
    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    /// Reset both multipliers to 1. A consumed premium never comes back.
    pub fn consume_multipliers(&mut self) {
        self.letter_multiplier = 1;
        self.word_multiplier = 1;
    }
}

type Inner = [[Square; N]; N];

/// The 15x15 scrabble board. It owns the state of every square.
///
/// Index it with an on-board [`Location`]; indexing off the board panics,
/// use [`square`](Board::square) or [`tile_at`](Board::tile_at) when unsure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Inner,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&Grid::default())
    }
}

impl Board {
    /// Create an empty board with the premiums of `grid`.
    pub fn new(grid: &Grid) -> Board {
        let mut squares = [[Square::default(); N]; N];
        for (y, row) in grid.iter().enumerate() {
            for (x, bonus) in row.iter().enumerate() {
                let (letter_multiplier, word_multiplier) = bonus.multipliers();
                squares[y][x].letter_multiplier = letter_multiplier;
                squares[y][x].word_multiplier = word_multiplier;
            }
        }
        Board { squares }
    }

    /// Place tiles on the board from a list of strings.
    /// The list must contain 15 rows of 15 characters, `.` or ` ` for an empty square.
    /// Point values are taken from `tileset`. The premiums under the placed tiles are
    /// consumed, as if the tiles had been scored when they were played.
    /// ## Errors
    /// If the list of strings has wrong dimensions or contains letters not in `tileset`.
    ///
    /// ## Examples
    /// ```
    /// # use scrabble_engine::{Board, Location, TileSet, Error};
    /// let mut state = vec!["..............."; 15];
    /// state[7] = "......cat......";
    /// let board = Board::default().with_state_from_strings(&state, &TileSet::default())?;
    /// assert!(board.is_occupied(Location::new('h', 8)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_state_from_strings(
        mut self,
        rows: &[&str],
        tileset: &TileSet,
    ) -> Result<Board, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        for (y, &row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != N {
                return Err(Error::InvalidRowLength(String::from(row), len));
            }
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' || ch == ' ' {
                    continue;
                }
                let tile = tileset.tile(ch).ok_or(Error::InvalidLetter(ch))?;
                let square = &mut self.squares[y][x];
                square.tile = Some(tile);
                square.consume_multipliers();
            }
        }
        Ok(self)
    }

    /// The square at `location`, or `None` outside the board.
    pub fn square(&self, location: Location) -> Option<&Square> {
        location.indices().map(|(x, y)| &self.squares[y][x])
    }

    /// Mutable access to the square at `location`, or `None` outside the board.
    pub fn square_mut(&mut self, location: Location) -> Option<&mut Square> {
        match location.indices() {
            Some((x, y)) => Some(&mut self.squares[y][x]),
            None => None,
        }
    }

    /// Return tile at `location`, or None if the square is empty or outside the board.
    pub fn tile_at(&self, location: Location) -> Option<Tile> {
        self.square(location).and_then(|square| square.tile)
    }

    /// Check if the square at `location` holds a tile.
    ///
    /// ## Examples
    /// ```
    /// # use scrabble_engine::{Board, Location, Tile, Error};
    /// let mut board = Board::default();
    /// board.place(Location::new('h', 8), Tile::new('a', 1))?;
    /// assert!(board.is_occupied(Location::new('h', 8)));
    /// assert!(!board.is_occupied(Location::new('z', 8)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_occupied(&self, location: Location) -> bool {
        self.tile_at(location).is_some()
    }

    /// Put `tile` on the empty square at `location`.
    /// ## Errors
    /// - If `location` is outside the board.
    /// - If the square already holds a tile.
    pub fn place(&mut self, location: Location, tile: Tile) -> Result<(), Error> {
        let square = self
            .square_mut(location)
            .ok_or_else(|| Error::InvalidLocation(location.to_string()))?;
        if square.tile.is_some() {
            return Err(Error::TileReplaceError(location));
        }
        square.tile = Some(tile);
        Ok(())
    }

    /// Iterate over all locations that hold a tile, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (Location, Tile)> + '_ {
        self.squares.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, square)| {
                square.tile.map(|tile| (Location::from_indices(x, y), tile))
            })
        })
    }

    /// Number of tiles on the board
    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Check if there are no tiles on the board
    pub fn is_empty(&self) -> bool {
        self.tiles().next().is_none()
    }
}

impl Index<Location> for Board {
    type Output = Square;
    fn index(&self, location: Location) -> &Self::Output {
        match location.indices() {
            Some((x, y)) => &self.squares[y][x],
            None => panic!("location {} is outside the board", location),
        }
    }
}

impl IndexMut<Location> for Board {
    fn index_mut(&mut self, location: Location) -> &mut Self::Output {
        match location.indices() {
            Some((x, y)) => &mut self.squares[y][x],
            None => panic!("location {} is outside the board", location),
        }
    }
}

/// Display the board state as 15 lines of 15 squares, with column letters on top
/// and row numbers on the left. Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = (0..N)
            .map(|x| Location::from_indices(x, 0).column().unwrap_or('?').to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "   {}", header)?;
        for (y, row) in self.squares.iter().enumerate() {
            let repr = row
                .iter()
                .map(|square| square.tile.map_or(String::from("."), |t| t.to_string()))
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "\n{:2} {}", y + 1, repr)?;
        }
        Ok(())
    }
}
