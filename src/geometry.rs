//! Geometry on the board: stepping between locations, adjacency, and discovery of the
//! words (contiguous runs of tiles) that pass through a set of locations.
use crate::{Board, Location};
use std::collections::BTreeSet;
use std::fmt;

/// Orientation of a word or a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Along a row, column letters increase
    Horizontal,
    /// Along a column, row numbers increase
    Vertical,
}

impl Axis {
    /// The two directions along this axis, (negative, positive).
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Horizontal => [Direction::Left, Direction::Right],
            Axis::Vertical => [Direction::Up, Direction::Down],
        }
    }

    /// The other axis
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// One step on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row - 1
    Up,
    /// Row + 1
    Down,
    /// Previous column letter
    Left,
    /// Next column letter
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The location one step from `location`. The result may be off the board.
    pub fn step(self, location: Location) -> Location {
        match self {
            Direction::Up => location.offset(0, -1),
            Direction::Down => location.offset(0, 1),
            Direction::Left => location.offset(-1, 0),
            Direction::Right => location.offset(1, 0),
        }
    }
}

/// The orthogonal neighbours of `location` that are on the board.
pub fn adjacent_locations(location: Location) -> impl Iterator<Item = Location> {
    let all: &'static [Direction; 4] = &Direction::ALL;
    all.iter()
        .map(move |direction| direction.step(location))
        .filter(Location::is_on_board)
}

/// The set of locations that make up one word on the board, ordered along the word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordLocations(BTreeSet<Location>);

impl WordLocations {
    /// The locations in row-major order, which is reading order for both axes.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.0.contains(location)
    }

    /// First location of the word
    pub fn start(&self) -> Option<Location> {
        self.0.iter().next().copied()
    }

    /// The letters of the word as found on `board`
    pub fn text(&self, board: &Board) -> String {
        self.iter()
            .filter_map(|&location| board.tile_at(location))
            .map(|tile| tile.letter())
            .collect()
    }
}

impl fmt::Display for WordLocations {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let locations = self.iter().map(Location::to_string).collect::<Vec<_>>();
        write!(f, "{}", locations.join(" "))
    }
}

/// The word through the occupied `location` along `axis`.
///
/// Scans from `location` in both directions while the squares hold tiles.
/// Returns `None` when `location` is empty or has no occupied neighbour on `axis`:
/// a single tile is not a word.
pub fn word_location_set(board: &Board, location: Location, axis: Axis) -> Option<WordLocations> {
    if !board.is_occupied(location) {
        return None;
    }
    let mut word = BTreeSet::new();
    word.insert(location);
    for &direction in &axis.directions() {
        let mut current = direction.step(location);
        while board.is_occupied(current) {
            word.insert(current);
            current = direction.step(current);
        }
    }
    if word.len() > 1 {
        Some(WordLocations(word))
    } else {
        None
    }
}

/// All distinct words that pass through any of `locations`, in both directions.
///
/// Two scans that land on the same run of tiles give one word.
/// ## Examples
/// ```
/// # use scrabble_engine::{word_set, Board, Location, TileSet, Error};
/// let mut state = vec!["..............."; 15];
/// state[7] = "......cat......";
/// let board = Board::default().with_state_from_strings(&state, &TileSet::default())?;
/// let locations = [Location::new('g', 8), Location::new('h', 8), Location::new('i', 8)];
/// let words = word_set(&board, &locations);
/// assert_eq!(words.len(), 1);
/// assert_eq!(words[0].text(&board), "CAT");
/// # Ok::<(), Error>(())
/// ```
pub fn word_set(board: &Board, locations: &[Location]) -> Vec<WordLocations> {
    let mut words = BTreeSet::new();
    for &axis in &[Axis::Vertical, Axis::Horizontal] {
        for &location in locations {
            if let Some(word) = word_location_set(board, location, axis) {
                words.insert(word);
            }
        }
    }
    words.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, TileSet};

    type Result<T> = std::result::Result<T, Error>;

    fn loc(s: &str) -> Location {
        s.parse().unwrap()
    }

    fn board_from(rows: &[(usize, &str)]) -> Result<Board> {
        let mut state = vec!["..............."; 15];
        for &(i, row) in rows {
            state[i] = row;
        }
        Board::default().with_state_from_strings(&state, &TileSet::default())
    }

    #[test]
    fn test_adjacent_locations() {
        let mut corner: Vec<_> = adjacent_locations(loc("a1")).collect();
        corner.sort();
        assert_eq!(corner, vec![loc("b1"), loc("a2")]);
        assert_eq!(adjacent_locations(loc("h8")).count(), 4);
        assert_eq!(adjacent_locations(loc("o8")).count(), 3);
        assert_eq!(adjacent_locations(loc("h15")).count(), 3);
    }

    #[test]
    fn test_steps() {
        let h8 = loc("h8");
        assert_eq!(Direction::Up.step(h8), loc("h7"));
        assert_eq!(Direction::Down.step(h8), loc("h9"));
        assert_eq!(Direction::Left.step(h8), loc("g8"));
        assert_eq!(Direction::Right.step(h8), loc("i8"));
        assert!(!Direction::Left.step(loc("a8")).is_on_board());
    }

    #[test]
    fn test_word_location_set() -> Result<()> {
        let board = board_from(&[(7, "......cat......")])?;
        let word = word_location_set(&board, loc("h8"), Axis::Horizontal).unwrap();
        assert_eq!(word.len(), 3);
        assert_eq!(word.start(), Some(loc("g8")));
        assert_eq!(word.text(&board), "CAT");
        assert_eq!(word.to_string(), "g8 h8 i8");
        assert_eq!(word_location_set(&board, loc("h8"), Axis::Vertical), None);
        assert_eq!(word_location_set(&board, loc("h9"), Axis::Horizontal), None);
        Ok(())
    }

    #[test]
    fn test_word_stops_at_edges_and_gaps() -> Result<()> {
        let board = board_from(&[(0, "ab.cd.........e"), (1, "..............f")])?;
        let word = word_location_set(&board, loc("a1"), Axis::Horizontal).unwrap();
        assert_eq!(word.text(&board), "AB");
        let word = word_location_set(&board, loc("d1"), Axis::Horizontal).unwrap();
        assert_eq!(word.text(&board), "CD");
        assert_eq!(word_location_set(&board, loc("o1"), Axis::Horizontal), None);
        let word = word_location_set(&board, loc("o2"), Axis::Vertical).unwrap();
        assert_eq!(word.text(&board), "EF");
        Ok(())
    }

    #[test]
    fn test_single_axis_word() -> Result<()> {
        // a tile with no horizontal neighbour in a vertical run of three
        let board = board_from(&[
            (6, ".......c......."),
            (7, ".......a......."),
            (8, ".......t......."),
        ])?;
        let words = word_set(&board, &[loc("h8")]);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(&board), "CAT");
        Ok(())
    }

    #[test]
    fn test_word_set_is_distinct() -> Result<()> {
        let board = board_from(&[(7, "......cats....."), (8, "........o......")])?;
        let words = word_set(&board, &[loc("g8"), loc("h8"), loc("i8"), loc("j8")]);
        let texts: Vec<String> = words.iter().map(|word| word.text(&board)).collect();
        assert_eq!(texts, vec!["CATS", "TO"]);
        Ok(())
    }

    #[test]
    fn test_word_set_empty() {
        let board = Board::default();
        assert!(word_set(&board, &[loc("h8")]).is_empty());
    }
}
