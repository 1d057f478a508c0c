use crate::location::Location;
use crate::moves::IllegalMove;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Errors that can be returned
pub enum Error {
    /// A location string is not a column `a`..`o` followed by a row
    #[error("Invalid location \"{0}\"")]
    InvalidLocation(String),

    /// Letter is not an ascii letter, or not part of the tile set
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// A tile set lists the same letter twice
    #[error("Letter '{0}' occurs more than once in tile set")]
    DuplicateLetter(char),

    /// A game needs at least two players
    #[error("Invalid number of players {0} (expect at least 2)")]
    InvalidPlayerCount(usize),

    /// The tile set can not fill every rack
    #[error("Tile set has {available} tiles, {needed} needed to deal the racks")]
    NotEnoughTiles { available: usize, needed: usize },

    /// The proposed placement breaks a rule
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    /// Exchanges need a reserve of tiles in the bag
    #[error("Exchange needs at least 7 tiles in the bag, {0} left")]
    BagTooSmall(usize),

    /// More letters named than a rack can hold
    #[error("Can not exchange {0} letters (at most 7)")]
    TooManyLetters(usize),

    /// Letters named for an exchange are not all on the rack
    #[error("Letters \"{0}\" are not on the rack")]
    NotInRack(String),

    /// Letters asked for are not in the bag
    #[error("Letters \"{0}\" are not in the bag")]
    NotInBag(String),

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at {0}")]
    TileReplaceError(Location),

    /// Attempt to place (part of) a word outside the board
    #[error("Playing {len} tiles at {start} does not fit")]
    TilePlacementError { start: Location, len: usize },

    /// The game has concluded, no more moves are accepted
    #[error("The game is over")]
    GameOver,
}
