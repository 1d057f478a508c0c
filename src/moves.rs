use crate::geometry::{adjacent_locations, Axis};
use crate::{Board, Location, Rack};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Reason why a proposed move is rejected. The rules are checked in the order listed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    /// A move must place at least one tile
    #[error("no tiles placed")]
    Empty,

    /// A location is outside the 15x15 board
    #[error("{0} is outside the board")]
    OffBoard(Location),

    /// Two tiles placed on the same square
    #[error("more than one tile on {0}")]
    Stacked(Location),

    /// The tiles are not in one row or one column
    #[error("tiles are not in one row or column")]
    NotAligned,

    /// An empty square between the first and last tile
    #[error("gap at {0}")]
    Gap(Location),

    /// A tile is placed on a square that already has one
    #[error("{0} is already occupied")]
    Occupied(Location),

    /// The first move of a game must cover the start square
    #[error("first move must cover {0}")]
    MissesStart(Location),

    /// A placed tile touches neither a tile on the board nor another placed tile
    #[error("{0} is not connected")]
    Disconnected(Location),

    /// The letters are not all on the rack
    #[error("letters \"{0}\" are not on the rack")]
    NotInRack(String),
}

/// A proposed placement: letters and the locations they go to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move(Vec<(char, Location)>);

impl Move {
    /// Create a move from (letter, location) pairs. Letters are converted to upper case.
    pub fn new<I: IntoIterator<Item = (char, Location)>>(placements: I) -> Move {
        Move(
            placements
                .into_iter()
                .map(|(letter, location)| (letter.to_ascii_uppercase(), location))
                .collect(),
        )
    }

    /// Place the letters of `word` on consecutive squares from `start` along `axis`.
    /// ## Examples
    /// ```
    /// use scrabble_engine::{Axis, Location, Move};
    /// let mv = Move::along("cat", Location::new('g', 8), Axis::Horizontal);
    /// assert_eq!(mv.locations(), vec![Location::new('g', 8), Location::new('h', 8), Location::new('i', 8)]);
    /// assert_eq!(mv.letters(), vec!['C', 'A', 'T']);
    /// ```
    pub fn along(word: &str, start: Location, axis: Axis) -> Move {
        let [_, forward] = axis.directions();
        let mut location = start;
        let mut placements = Vec::new();
        for letter in word.chars() {
            placements.push((letter, location));
            location = forward.step(location);
        }
        Move::new(placements)
    }

    pub fn placements(&self) -> &[(char, Location)] {
        &self.0
    }

    pub fn letters(&self) -> Vec<char> {
        self.0.iter().map(|&(letter, _)| letter).collect()
    }

    pub fn locations(&self) -> Vec<Location> {
        self.0.iter().map(|&(_, location)| location).collect()
    }

    /// Number of tiles placed
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let placements = self
            .0
            .iter()
            .map(|(letter, location)| format!("{}{}", letter, location))
            .collect::<Vec<_>>();
        write!(f, "{}", placements.join(" "))
    }
}

/// Check a move against the board and the rack of the player to move.
///
/// `move_number` is the number of moves played so far; the first move (0) must cover
/// `start`. Returns the axis of the move: a single tile counts as vertical.
/// ## Errors
/// The first rule that is broken, see [`IllegalMove`].
pub fn check_move(
    board: &Board,
    mv: &Move,
    rack: &Rack,
    move_number: usize,
    start: Location,
) -> Result<Axis, IllegalMove> {
    if mv.is_empty() {
        return Err(IllegalMove::Empty);
    }

    // bounds
    if let Some(&location) = mv.locations().iter().find(|l| !l.is_on_board()) {
        return Err(IllegalMove::OffBoard(location));
    }

    // no stacking
    let mut locations = HashSet::new();
    for location in mv.locations() {
        if !locations.insert(location) {
            return Err(IllegalMove::Stacked(location));
        }
    }

    // one row or one column
    let first = mv.0[0].1;
    let axis = if mv.locations().iter().all(|l| l.column() == first.column()) {
        Axis::Vertical
    } else if mv.locations().iter().all(|l| l.row() == first.row()) {
        Axis::Horizontal
    } else {
        return Err(IllegalMove::NotAligned);
    };

    // no gaps between the extremes
    let [_, forward] = axis.directions();
    let mut sorted = mv.locations();
    sorted.sort();
    let (lo, hi) = (sorted[0], sorted[sorted.len() - 1]);
    let mut location = lo;
    while location != hi {
        location = forward.step(location);
        if !(board.is_occupied(location) || locations.contains(&location)) {
            return Err(IllegalMove::Gap(location));
        }
    }

    // no overwrite
    if let Some(&location) = sorted.iter().find(|&&l| board.is_occupied(l)) {
        return Err(IllegalMove::Occupied(location));
    }

    // connected to the start square or to other tiles
    if move_number == 0 {
        if !locations.contains(&start) {
            return Err(IllegalMove::MissesStart(start));
        }
    } else {
        for &location in &sorted {
            let touches = adjacent_locations(location)
                .any(|next| board.is_occupied(next) || locations.contains(&next));
            if !touches {
                return Err(IllegalMove::Disconnected(location));
            }
        }
    }

    // letters on the rack
    let letters = mv.letters();
    if !rack.holds(&letters) {
        return Err(IllegalMove::NotInRack(letters.into_iter().collect()));
    }

    Ok(axis)
}

/// Boolean form of [`check_move`].
pub fn move_is_legal(
    board: &Board,
    mv: &Move,
    rack: &Rack,
    move_number: usize,
    start: Location,
) -> bool {
    check_move(board, mv, rack, move_number, start).is_ok()
}
