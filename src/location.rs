use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Number of rows and columns on the board.
pub const N: usize = 15;

const FIRST_COLUMN: char = 'a';

/// A (column, row) coordinate. Columns are `a`..`o`, rows `1`..`15`.
///
/// A `Location` may point outside the board: a proposed move can name any square,
/// and stepping off an edge is how scans detect the border.
/// Use [`is_on_board`](Location::is_on_board) before indexing.
///
/// Locations order row by row, then column by column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    row: i32,
    col: i32,
}

impl Location {
    /// Create a new location from a column letter and a row number.
    /// ## Examples
    /// ```
    /// use scrabble_engine::Location;
    /// let start = Location::new('h', 8);
    /// assert!(start.is_on_board());
    /// assert!(!Location::new('p', 8).is_on_board());
    /// ```
    pub fn new(column: char, row: i32) -> Location {
        let col = column.to_ascii_lowercase() as i32 - FIRST_COLUMN as i32;
        Location { row, col }
    }

    /// Create a location from zero based (x, y) indices.
    pub(crate) fn from_indices(x: usize, y: usize) -> Location {
        Location {
            row: y as i32 + 1,
            col: x as i32,
        }
    }

    /// The column letter, or `None` when the column is not a letter at all.
    pub fn column(&self) -> Option<char> {
        std::char::from_u32((FIRST_COLUMN as i32 + self.col) as u32)
    }

    /// The row number, `1`..`15` when on the board.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Check if the location is inside the 15x15 board.
    pub fn is_on_board(&self) -> bool {
        (0..N as i32).contains(&self.col) && (1..=N as i32).contains(&self.row)
    }

    /// Zero based (x, y) indices, or `None` outside the board.
    pub(crate) fn indices(&self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.col as usize, (self.row - 1) as usize))
        } else {
            None
        }
    }

    /// Move `dcol` columns and `drow` rows. Saturates at the `i32` limits,
    /// which are far off the board.
    pub(crate) fn offset(&self, dcol: i32, drow: i32) -> Location {
        Location {
            row: self.row.saturating_add(drow),
            col: self.col.saturating_add(dcol),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.column() {
            Some(column) if column.is_ascii_graphic() => write!(f, "{}{}", column, self.row),
            _ => write!(f, "?{}", self.row),
        }
    }
}

/// Parse a location like `"h8"` or `"O15"`.
impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let column = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(|| Error::InvalidLocation(String::from(s)))?;
        let row = chars
            .as_str()
            .parse::<i32>()
            .map_err(|_| Error::InvalidLocation(String::from(s)))?;
        let location = Location::new(column, row);
        if !location.is_on_board() {
            return Err(Error::InvalidLocation(String::from(s)));
        }
        Ok(location)
    }
}
